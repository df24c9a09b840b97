//! Shared auth UI helpers and the private-route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior. Private pages are recognised by path fragment so a sign-out
//! anywhere (this tab or another one) evicts the user to the login page.
//!
//! Browser access sits behind the `hydrate` feature; under SSR and in tests
//! navigation helpers are no-ops and location reads come back empty.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{AppConfig, paths};
use crate::net::auth_events::{AuthEvent, on_auth_state_change};
use crate::state::auth::AuthState;

thread_local! {
    static GUARD_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// True when `path` belongs to a page that needs a session.
pub fn is_private_path(path: &str) -> bool {
    paths::PRIVATE_FRAGMENTS.iter().any(|fragment| path.contains(fragment))
}

pub fn should_redirect_on_sign_out(event: AuthEvent, path: &str) -> bool {
    event == AuthEvent::SignedOut && is_private_path(path)
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.is_signed_out()
}

/// A `storage` event for `key` with no new value means another tab dropped
/// the session.
pub fn is_remote_sign_out(config: &AppConfig, key: Option<&str>, new_value: Option<&str>) -> bool {
    key == Some(config.session_storage_key.as_str()) && new_value.is_none()
}

/// Full page navigation to `path`.
pub fn redirect_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                leptos::logging::warn!("redirect to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Path of the current page; empty outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// URL fragment without the leading `#`, if any.
pub fn current_fragment() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        (!fragment.is_empty()).then(|| fragment.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Drop the fragment from the address bar without reloading.
pub fn clear_fragment() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let target = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target));
        }
    }
}

/// `path` resolved against the current origin, for auth redirect targets.
pub fn absolute_url(path: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}{path}");
        }
    }
    path.to_owned()
}

/// Register the sign-out eviction listener once per page.
///
/// Also forwards cross-tab session removal as a `SignedOut` event.
pub fn install_private_route_guard(config: &AppConfig) {
    if GUARD_INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }

    on_auth_state_change(|event, _| {
        if should_redirect_on_sign_out(event, &current_path()) {
            redirect_to(paths::LOGIN);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let config = config.clone();
        let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if is_remote_sign_out(&config, ev.key().as_deref(), ev.new_value().as_deref()) {
                crate::net::auth_events::emit_auth_event(AuthEvent::SignedOut, None);
            }
        });
        if window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("could not watch session storage");
        }
        on_storage.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(paths::LOGIN, NavigateOptions::default());
        }
    });
}
