//! Dashboard page listing the signed-in user's projects.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once `App` has resolved the
//! session it loads the project rows once and offers the wizard link,
//! copy-id buttons, and logout. On narrow screens the sidebar slides in from
//! a floating toggle and closes again on any click in the main content.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::config::{AppConfig, paths};
use crate::state::auth::AuthState;
use crate::state::projects::{ProjectsState, status_label};
use crate::util::auth::install_unauth_redirect;
use crate::util::clipboard::copy_to_clipboard;
use crate::util::format::format_date;
use crate::util::selection::SITE_TYPES;
use crate::util::toast::use_toasts;

/// Display label for a site type value.
pub fn site_type_label(value: &str) -> &str {
    SITE_TYPES
        .iter()
        .find(|option| option.value == value)
        .map_or(value, |option| option.label)
}

/// Input that can move the mobile sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarEvent {
    Toggle,
    ContentClick,
}

/// Sidebar open flag after `event`.
pub fn sidebar_after(open: bool, event: SidebarEvent) -> bool {
    match event {
        SidebarEvent::Toggle => !open,
        SidebarEvent::ContentClick => false,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();
    let projects = RwSignal::new(ProjectsState::default());
    let sidebar_open = RwSignal::new(false);

    install_unauth_redirect(auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let Some(user_id) = auth.with(|a| a.user_id().map(str::to_owned)) else {
            return;
        };
        requested.set(true);
        projects.update(ProjectsState::begin_load);
        load_projects(config.clone(), user_id, projects);
    });

    let on_logout = {
        let config = expect_context::<AppConfig>();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let client = crate::net::auth::AuthClient::new(config.clone());
                leptos::task::spawn_local(async move {
                    let _ = client.sign_out().await;
                    auth.update(|a| a.resolve(None));
                    crate::util::auth::redirect_to(paths::HOME);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &config;
            }
        }
    };

    let greeting = move || {
        auth.with(|a| a.user.as_ref().map(crate::net::types::User::display_name))
            .unwrap_or_default()
    };

    view! {
        <NavBar/>
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-layout">
                <aside id="sidebar" class="sidebar" class:active=move || sidebar_open.get()>
                    <a class="sidebar__link active" href=paths::DASHBOARD>"My projects"</a>
                    <a class="sidebar__link" href=paths::CREATE_WIZARD>"New project"</a>
                    <button class="sidebar__link" on:click=on_logout.clone()>"Log out"</button>
                </aside>
                <button
                    id="mobile-sidebar-toggle"
                    class="btn-icon mobile-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| sidebar_open.update(|open| *open = sidebar_after(*open, SidebarEvent::Toggle))
                >
                    "☰"
                </button>
                <main
                    class="dashboard-page main-content"
                    on:click=move |_| {
                        if sidebar_open.get_untracked() {
                            sidebar_open.set(sidebar_after(true, SidebarEvent::ContentClick));
                        }
                    }
                >
                    <header class="dashboard-page__header">
                        <h1>"My projects"</h1>
                        <span class="dashboard-page__user">{greeting}</span>
                        <a class="btn btn-primary" href=paths::CREATE_WIZARD>"+ New project"</a>
                        <button class="btn btn-secondary" on:click=on_logout.clone()>"Log out"</button>
                    </header>

                    <Show when=move || projects.get().error.is_some()>
                        <p class="dashboard-page__error">{move || projects.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || projects.get().is_empty_list()>
                        <p class="dashboard-page__empty">"No projects yet. Start one with the wizard."</p>
                    </Show>
                    <Show
                        when=move || !projects.get().loading
                        fallback=move || view! { <p>"Loading projects..."</p> }
                    >
                        <div class="project-grid">
                            {move || {
                                projects
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|project| {
                                        let id = project.id.clone();
                                        let created = project.created_at.as_deref().map(format_date).unwrap_or_default();
                                        view! {
                                            <article class="project-card">
                                                <h2 class="project-card__name">{project.name}</h2>
                                                <span class="project-card__type">{site_type_label(&project.site_type).to_owned()}</span>
                                                <span class=format!("status-badge status-{}", project.status)>
                                                    {status_label(&project.status).to_owned()}
                                                </span>
                                                <time class="project-card__date">{created}</time>
                                                <button
                                                    class="btn-icon project-card__copy"
                                                    title="Copy project id"
                                                    on:click=move |_| copy_to_clipboard(id.clone(), toasts)
                                                >
                                                    "⧉"
                                                </button>
                                            </article>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </main>
            </div>
        </Show>
    }
}

fn load_projects(config: AppConfig, user_id: String, projects: RwSignal<ProjectsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::auth::AuthClient::new(config.clone());
        let Some(session) = client.get_session().await else {
            projects.update(|p| p.finish_load(Err("session expired")));
            return;
        };
        let data = crate::net::data::DataClient::new(config, session.access_token);
        let result = data.list_projects(&user_id).await;
        if let Err(e) = &result {
            leptos::logging::error!("project list failed: {e}");
        }
        projects.update(|p| p.finish_load(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user_id);
        projects.update(|p| p.finish_load::<&str>(Ok(Vec::new())));
    }
}
