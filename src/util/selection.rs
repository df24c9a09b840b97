//! Card and palette selection bindings for the wizard.
//!
//! Selection state is the config value itself: a card renders as selected
//! when its value equals the config field, which keeps each group mutually
//! exclusive without per-card flags.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::state::wizard::WizardState;

pub const HOME_PAGE: &str = "home";

/// Config field a card group writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardCategory {
    /// Site type; also drives page suggestions.
    Type,
    Style,
}

impl CardCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Style => "style",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "type" => Some(Self::Type),
            "style" => Some(Self::Style),
            _ => None,
        }
    }
}

/// One selectable card or checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

const fn option(value: &'static str, label: &'static str, hint: &'static str) -> SelectOption {
    SelectOption { value, label, hint }
}

pub const SITE_TYPES: [SelectOption; 5] = [
    option("portfolio", "Portfolio", "Showcase your work"),
    option("business", "Business", "Present your company"),
    option("ecommerce", "E-commerce", "Sell products online"),
    option("landing", "Landing page", "Convert visitors"),
    option("blog", "Blog", "Publish articles"),
];

pub const STYLES: [SelectOption; 4] = [
    option("modern", "Modern", "Bold type, generous spacing"),
    option("minimal", "Minimal", "Quiet, content first"),
    option("corporate", "Corporate", "Structured and sober"),
    option("creative", "Creative", "Playful layouts"),
];

/// Palette value paired with its swatch colors.
pub const PALETTES: [(&str, [&str; 3]); 4] = [
    ("ocean", ["#0f172a", "#0ea5e9", "#e0f2fe"]),
    ("sunset", ["#7c2d12", "#f97316", "#fff7ed"]),
    ("forest", ["#14532d", "#22c55e", "#f0fdf4"]),
    ("mono", ["#111827", "#6b7280", "#f9fafb"]),
];

pub const FEATURES: [SelectOption; 6] = [
    option("contact-form", "Contact form", ""),
    option("blog", "Blog", ""),
    option("newsletter", "Newsletter", ""),
    option("gallery", "Gallery", ""),
    option("seo", "SEO", ""),
    option("analytics", "Analytics", ""),
];

/// Pages suggested for a site type, `home` first. Unknown types get the
/// minimal fallback.
pub fn suggested_pages(site_type: &str) -> Vec<String> {
    let extra: &[&str] = match site_type {
        "portfolio" => &["projects", "about", "contact", "resume"],
        "business" => &["services", "about", "team", "contact", "pricing"],
        "ecommerce" => &["shop", "collections", "about", "contact", "faq"],
        "landing" => &["features", "testimonials", "pricing", "contact"],
        _ => &["about", "contact"],
    };
    std::iter::once(HOME_PAGE)
        .chain(extra.iter().copied())
        .map(str::to_owned)
        .collect()
}

/// Display label for a page slug (`"faq"` -> `"Faq"`, `"home"` -> `"Home"`).
pub fn page_label(page: &str) -> String {
    let mut chars = page.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Select `value` in its group and write it to the config.
///
/// Choosing a site type replaces the page suggestions, all ticked.
pub fn select_card(state: &mut WizardState, category: CardCategory, value: &str) {
    match category {
        CardCategory::Type => {
            state.config.site_type = value.to_owned();
            state.suggested_pages = suggested_pages(value);
            state.form.pages = state.suggested_pages.iter().cloned().collect();
        }
        CardCategory::Style => state.config.style = value.to_owned(),
    }
}

pub fn select_palette(state: &mut WizardState, value: &str) {
    state.config.palette = value.to_owned();
}

pub fn is_selected(state: &WizardState, category: CardCategory, value: &str) -> bool {
    match category {
        CardCategory::Type => state.config.site_type == value,
        CardCategory::Style => state.config.style == value,
    }
}
