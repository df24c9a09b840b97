//! Login page: email + password sign-in or sign-up, OAuth providers, and
//! password-reset requests.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::field_input::{FieldInput, annotated_edit};
use crate::config::AppConfig;
use crate::net::auth::OAuthProvider;
use crate::state::toast::ToastSeverity;
use crate::util::toast::{show_toast, use_toasts};
use crate::util::validation::{EMAIL_FIELD, FULL_NAME_FIELD, FieldErrors, FieldSpec, PASSWORD_FIELD};

pub const CONFIRMATION_SENT: &str = "Account created. Check your inbox to confirm your email.";
pub const RESET_SENT: &str = "Password reset link sent. Check your inbox.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Inputs validated on submit, in display order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::SignIn => &[EMAIL_FIELD, PASSWORD_FIELD],
            Self::SignUp => &[FULL_NAME_FIELD, EMAIL_FIELD, PASSWORD_FIELD],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create your account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "No account yet? Sign up",
            Self::SignUp => "Already registered? Sign in",
        }
    }
}

/// Sign-up metadata attached to the new user.
pub fn sign_up_metadata(full_name: &str) -> serde_json::Value {
    serde_json::json!({ "full_name": full_name.trim() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();

    let mode = RwSignal::new(LoginMode::default());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let field_value = move |name: &str| match name {
        "full_name" => full_name.get_untracked(),
        "email" => email.get_untracked(),
        _ => password.get_untracked(),
    };

    let on_submit = {
        let config = config.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let current = mode.get_untracked();
            let values: Vec<(FieldSpec, String)> =
                current.fields().iter().map(|spec| (*spec, field_value(spec.name))).collect();
            let pairs: Vec<(&FieldSpec, &str)> = values.iter().map(|(s, v)| (s, v.as_str())).collect();
            let mut valid = false;
            errors.update(|e| valid = e.check_all(&pairs));
            if !valid {
                return;
            }
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = crate::net::auth::AuthClient::new(config.clone());
                let email_value = email.get_untracked().trim().to_owned();
                let password_value = password.get_untracked();
                let name_value = full_name.get_untracked();
                leptos::task::spawn_local(async move {
                    use crate::net::auth::SignUpOutcome;

                    let result = match current {
                        LoginMode::SignIn => client.sign_in(&email_value, &password_value).await.map(Some),
                        LoginMode::SignUp => client
                            .sign_up(&email_value, &password_value, sign_up_metadata(&name_value))
                            .await
                            .map(|outcome| match outcome {
                                SignUpOutcome::SignedIn(session) => Some(session),
                                SignUpOutcome::ConfirmationSent(_) => None,
                            }),
                    };
                    match result {
                        Ok(Some(_)) => crate::util::auth::redirect_to(crate::config::paths::DASHBOARD),
                        Ok(None) => {
                            show_toast(toasts, CONFIRMATION_SENT, ToastSeverity::Success);
                            mode.set(LoginMode::SignIn);
                            busy.set(false);
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
                let _ = &config;
                busy.set(false);
            }
        }
    };

    let on_provider = {
        let config = config.clone();
        move |provider: OAuthProvider| {
            let client = crate::net::auth::AuthClient::new(config.clone());
            let target = crate::util::auth::absolute_url(crate::config::paths::DASHBOARD);
            if let Err(e) = client.sign_in_with_provider(provider, &target) {
                show_toast(toasts, e.to_string(), ToastSeverity::Error);
            }
        }
    };

    let on_forgot = {
        let config = config.clone();
        move |_| {
            let value = email.get_untracked();
            let mut valid = false;
            errors.update(|e| valid = e.check(&EMAIL_FIELD, &value));
            if !valid {
                show_toast(toasts, "Enter your email first.", ToastSeverity::Warning);
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let client = crate::net::auth::AuthClient::new(config.clone());
                let target = crate::util::auth::absolute_url(crate::config::paths::UPDATE_PASSWORD);
                leptos::task::spawn_local(async move {
                    match client.request_password_reset(value.trim(), &target).await {
                        Ok(()) => {
                            show_toast(toasts, RESET_SENT, ToastSeverity::Success);
                        }
                        Err(e) => {
                            show_toast(toasts, e.to_string(), ToastSeverity::Error);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &config;
            }
        }
    };

    let error_for = move |name: &'static str| Signal::derive(move || errors.with(|e| e.message(name)));
    let on_google = on_provider.clone();
    let on_github = on_provider;

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="logo" href=crate::config::paths::HOME>"WebForge"</a>
                <h1>{move || mode.get().title()}</h1>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <Show when=move || mode.get() == LoginMode::SignUp>
                        <FieldInput
                            spec=FULL_NAME_FIELD
                            label="Full name"
                            value=full_name
                            error=error_for("full_name")
                            on_input=annotated_edit(FULL_NAME_FIELD, full_name, errors)
                        />
                    </Show>
                    <FieldInput
                        spec=EMAIL_FIELD
                        label="Email"
                        placeholder="you@example.com"
                        value=email
                        error=error_for("email")
                        on_input=annotated_edit(EMAIL_FIELD, email, errors)
                    />
                    <FieldInput
                        spec=PASSWORD_FIELD
                        label="Password"
                        value=password
                        error=error_for("password")
                        on_input=annotated_edit(PASSWORD_FIELD, password, errors)
                    />
                    <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <button class="link-button" type="button" on:click=on_forgot>
                    "Forgot password?"
                </button>
                <div class="login-divider"></div>
                <div class="oauth-buttons">
                    <button
                        class="btn btn-oauth"
                        type="button"
                        on:click=move |_| on_google(OAuthProvider::Google)
                    >
                        {format!("Continue with {}", OAuthProvider::Google.label())}
                    </button>
                    <button
                        class="btn btn-oauth"
                        type="button"
                        on:click=move |_| on_github(OAuthProvider::GitHub)
                    >
                        {format!("Continue with {}", OAuthProvider::GitHub.label())}
                    </button>
                </div>
                <button
                    class="link-button"
                    type="button"
                    on:click=move |_| {
                        errors.update(FieldErrors::clear_all);
                        mode.update(|m| *m = m.toggled());
                    }
                >
                    {move || mode.get().toggle_prompt()}
                </button>
            </div>
        </div>
    }
}
