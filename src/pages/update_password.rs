//! Landing page for password-reset links.
//!
//! The reset email sends the user back here with recovery tokens in the URL
//! fragment; `AuthClient::update_password` picks them up through
//! `get_session`.

use leptos::prelude::*;

use crate::components::field_input::{FieldInput, annotated_edit};
use crate::config::AppConfig;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastSeverity;
#[cfg(feature = "hydrate")]
use crate::util::toast::show_toast;
use crate::util::toast::use_toasts;
use crate::util::validation::{FieldErrors, PASSWORD_FIELD};

pub const PASSWORD_UPDATED: &str = "Password updated.";

#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = password.get_untracked();
        let mut valid = false;
        errors.update(|e| valid = e.check(&PASSWORD_FIELD, &value));
        if !valid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = crate::net::auth::AuthClient::new(config.clone());
            leptos::task::spawn_local(async move {
                match client.update_password(&value).await {
                    Ok(_) => {
                        show_toast(toasts, PASSWORD_UPDATED, ToastSeverity::Success);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            crate::config::REDIRECT_DELAY_MS,
                        ))
                        .await;
                        crate::util::auth::redirect_to(crate::config::paths::HOME);
                    }
                    Err(e) => {
                        show_toast(toasts, e.to_string(), ToastSeverity::Error);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Choose a new password"</h1>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <FieldInput
                        spec=PASSWORD_FIELD
                        label="New password"
                        value=password
                        error=Signal::derive(move || errors.with(|e| e.message("password")))
                        on_input=annotated_edit(PASSWORD_FIELD, password, errors)
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        "Update password"
                    </button>
                </form>
            </div>
        </div>
    }
}
