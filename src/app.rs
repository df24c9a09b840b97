//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::AppConfig;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, update_password::UpdatePasswordPage,
    wizard::WizardPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, auth and toast contexts, resolves the browser session
/// once, and installs the private-route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(toasts);

    track_auth_events(&config, auth);
    resolve_session(config, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/webforge.css"/>
        <Title text="WebForge"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("update-password") view=UpdatePasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("create-wizard") view=WizardPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Browser only: listeners live for the page, and a server would collect one
/// per rendered request.
fn track_auth_events(config: &AppConfig, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::auth_events::{AuthEvent, on_auth_state_change};

        crate::util::auth::install_private_route_guard(config);
        on_auth_state_change(move |event, session| match event {
            AuthEvent::SignedOut => auth.update(|a| a.resolve(None)),
            AuthEvent::SignedIn | AuthEvent::TokenRefreshed | AuthEvent::UserUpdated | AuthEvent::PasswordRecovery => {
                if session.is_some() {
                    auth.update(|a| a.resolve(session));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth);
    }
}

/// Look the session up once per page load. Private pages go through
/// `require_session`, which leaves for the login page when there is none.
fn resolve_session(config: AppConfig, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let client = crate::net::auth::AuthClient::new(config);
        let path = crate::util::auth::current_path();
        if crate::util::auth::is_private_path(&path) {
            let user = client.require_session().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        } else {
            let session = client.get_session().await;
            auth.update(|a| a.resolve(session.as_ref()));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth);
    }
}
