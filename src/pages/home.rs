//! Public landing page: hero, feature highlights, pricing.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::paths;
use crate::util::format::format_currency;

/// A subscription tier shown on the pricing grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: f64,
    pub currency: &'static str,
    pub perks: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        monthly_price: 0.0,
        currency: "EUR",
        perks: &["1 site", "WebForge subdomain", "Community support"],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        monthly_price: 19.0,
        currency: "EUR",
        perks: &["5 sites", "Custom domain", "SEO tools", "Email support"],
        highlighted: true,
    },
    Plan {
        name: "Agency",
        monthly_price: 1490.0,
        currency: "EUR",
        perks: &["Unlimited sites", "Client workspaces", "Priority support"],
        highlighted: false,
    },
];

pub fn plan_price(plan: &Plan) -> String {
    format!("{} / month", format_currency(plan.monthly_price, plan.currency))
}

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Describe it", "Answer five quick questions about your project."),
    ("We generate it", "Layouts, copy and pages tailored to your business."),
    ("Publish it", "Go live on your own domain in minutes."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="home-page">
            <section class="hero">
                <h1>"Your website, forged by AI"</h1>
                <p>"Describe your project and get a complete site in minutes."</p>
                <a class="btn btn-primary" href=paths::CREATE_WIZARD>"Start building"</a>
            </section>

            <section id="features" class="features">
                {HIGHLIGHTS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <article class="feature-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section id="pricing" class="pricing">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <article class="pricing-card" class:featured=plan.highlighted>
                                <h3>{plan.name}</h3>
                                <p class="pricing-card__price">{plan_price(plan)}</p>
                                <ul>
                                    {plan.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                                </ul>
                                <a class="btn btn-secondary" href=paths::LOGIN>"Choose "{plan.name}</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
