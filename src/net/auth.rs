//! REST client for the hosted auth service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage` under the configured key.
//! Server-side (SSR): every call resolves to `AuthError::Unavailable` or
//! `None`, since sessions only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `AuthError` instead of panicking; `get_session`
//! goes further and fails soft, logging the cause and reporting no session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::AppConfig;
use crate::net::types::{Session, User};

#[cfg(feature = "hydrate")]
use crate::net::auth_events::{AuthEvent, emit_auth_event};
#[cfg(feature = "hydrate")]
use crate::net::types::{FragmentTokens, backend_error_message, parse_fragment_tokens};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid redirect target: {0}")]
    InvalidRedirect(String),
    #[error("not available on server")]
    Unavailable,
}

/// Third-party identity providers enabled for sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

/// Result of a sign-up call: either an immediate session or a pending email
/// confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationSent(User),
}

#[cfg(any(test, feature = "hydrate"))]
fn password_grant_path() -> &'static str {
    "token?grant_type=password"
}

#[cfg(any(test, feature = "hydrate"))]
fn refresh_grant_path() -> &'static str {
    "token?grant_type=refresh_token"
}

#[cfg(any(test, feature = "hydrate"))]
fn recover_url(config: &AppConfig, redirect_to: &str) -> Result<String, AuthError> {
    let url = url::Url::parse_with_params(&config.auth_url("recover"), &[("redirect_to", redirect_to)])
        .map_err(|e| AuthError::InvalidRedirect(e.to_string()))?;
    Ok(url.into())
}

/// Sign-up responses carry a session when email confirmation is disabled and
/// only the user object otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn parse_sign_up_response(value: serde_json::Value, now_secs: i64) -> Result<SignUpOutcome, AuthError> {
    if value.get("access_token").is_some() {
        let session: Session = serde_json::from_value(value).map_err(|e| AuthError::Decode(e.to_string()))?;
        return Ok(SignUpOutcome::SignedIn(session.with_expiry_from(now_secs)));
    }
    let user: User = serde_json::from_value(value).map_err(|e| AuthError::Decode(e.to_string()))?;
    Ok(SignUpOutcome::ConfirmationSent(user))
}

#[cfg(any(test, feature = "hydrate"))]
fn session_from_fragment(tokens: crate::net::types::FragmentTokens, user: User, now_secs: i64) -> Session {
    Session {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: tokens.token_type,
        expires_in: tokens.expires_in,
        expires_at: tokens.expires_at,
        user,
    }
    .with_expiry_from(now_secs)
}

#[cfg(feature = "hydrate")]
fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Typed client for the hosted auth API.
#[derive(Clone, Debug)]
pub struct AuthClient {
    config: AppConfig,
}

impl AuthClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// URL that starts the provider's consent flow and returns to `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRedirect` if the configured backend URL is malformed.
    pub fn provider_authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
        let url = url::Url::parse_with_params(
            &self.config.auth_url("authorize"),
            &[("provider", provider.as_str()), ("redirect_to", redirect_to)],
        )
        .map_err(|e| AuthError::InvalidRedirect(e.to_string()))?;
        Ok(url.into())
    }

    /// Sign in with email + password and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let session: Session = self.post_json(password_grant_path(), &payload, None).await?;
            let session = session.with_expiry_from(now_secs());
            store::save(&self.config, &session);
            emit_auth_event(AuthEvent::SignedIn, Some(&session));
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    /// Register a new account; `metadata` is stored as user metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend refuses the account.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: serde_json::Value,
    ) -> Result<SignUpOutcome, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password, "data": metadata });
            let value: serde_json::Value = self.post_json("signup", &payload, None).await?;
            let outcome = parse_sign_up_response(value, now_secs())?;
            if let SignUpOutcome::SignedIn(session) = &outcome {
                store::save(&self.config, session);
                emit_auth_event(AuthEvent::SignedIn, Some(session));
            }
            Ok(outcome)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, metadata);
            Err(AuthError::Unavailable)
        }
    }

    /// Leave the app for the provider's consent screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the authorize URL cannot be built.
    pub fn sign_in_with_provider(&self, provider: OAuthProvider, redirect_to: &str) -> Result<(), AuthError> {
        let url = self.provider_authorize_url(provider, redirect_to)?;
        #[cfg(feature = "hydrate")]
        {
            crate::util::auth::redirect_to(&url);
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(AuthError::Unavailable)
        }
    }

    /// Revoke the session server-side and drop it locally.
    ///
    /// The local copy is cleared and `SignedOut` emitted even when the revoke
    /// call fails.
    ///
    /// # Errors
    ///
    /// Returns the revoke failure after local cleanup.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let result = match store::load(&self.config) {
                Some(session) => self.send_logout(&session.access_token).await,
                None => Ok(()),
            };
            store::clear(&self.config);
            emit_auth_event(AuthEvent::SignedOut, None);
            if let Err(e) = &result {
                leptos::logging::warn!("sign-out failed: {e}");
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    /// Current session, or `None` when signed out or on any backend failure.
    ///
    /// Tokens in the URL fragment (OAuth or recovery redirect) take precedence
    /// over the stored session; an expired stored session is refreshed.
    pub async fn get_session(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(tokens) = crate::util::auth::current_fragment().as_deref().and_then(parse_fragment_tokens) {
                crate::util::auth::clear_fragment();
                return match self.session_from_redirect(tokens).await {
                    Ok(session) => Some(session),
                    Err(e) => {
                        leptos::logging::error!("session check failed: {e}");
                        None
                    }
                };
            }

            let stored = store::load(&self.config)?;
            if !stored.is_expired(now_secs()) {
                return Some(stored);
            }
            match self.refresh(&stored.refresh_token).await {
                Ok(session) => Some(session),
                Err(e) => {
                    leptos::logging::warn!("session refresh failed: {e}");
                    store::clear(&self.config);
                    emit_auth_event(AuthEvent::SignedOut, None);
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// Current user, redirecting to the login page when there is no session.
    ///
    /// A `None` return means the page is being left; callers stop there.
    pub async fn require_session(&self) -> Option<User> {
        let session = self.get_session().await;
        if session.is_none() {
            crate::util::auth::redirect_to(crate::config::paths::LOGIN);
        }
        session.map(|s| s.user)
    }

    /// Email a password-reset link that lands on `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = recover_url(&self.config, redirect_to)?;
            let payload = serde_json::json!({ "email": email });
            let resp = gloo_net::http::Request::post(&url)
                .header("apikey", &self.config.supabase_anon_key)
                .json(&payload)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            ensure_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, redirect_to);
            Err(AuthError::Unavailable)
        }
    }

    /// Set a new password for the signed-in (or recovering) user.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no session or the backend rejects it.
    pub async fn update_password(&self, password: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = self.get_session().await else {
                return Err(AuthError::Rejected { status: 401, message: "not signed in".to_owned() });
            };
            let payload = serde_json::json!({ "password": password });
            let resp = gloo_net::http::Request::put(&self.config.auth_url("user"))
                .header("apikey", &self.config.supabase_anon_key)
                .header("Authorization", &format!("Bearer {}", session.access_token))
                .json(&payload)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            let user: User = read_json(resp).await?;
            let refreshed = Session { user: user.clone(), ..session };
            store::save(&self.config, &refreshed);
            emit_auth_event(AuthEvent::UserUpdated, Some(&refreshed));
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = password;
            Err(AuthError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
impl AuthClient {
    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        payload: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<T, AuthError> {
        let mut builder = gloo_net::http::Request::post(&self.config.auth_url(path))
            .header("apikey", &self.config.supabase_anon_key);
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = builder
            .json(payload)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        read_json(resp).await
    }

    async fn send_logout(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = gloo_net::http::Request::post(&self.config.auth_url("logout"))
            .header("apikey", &self.config.supabase_anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        ensure_ok(resp).await
    }

    async fn fetch_user(&self, access_token: &str) -> Result<User, AuthError> {
        let resp = gloo_net::http::Request::get(&self.config.auth_url("user"))
            .header("apikey", &self.config.supabase_anon_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        read_json(resp).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let session: Session = self.post_json(refresh_grant_path(), &payload, None).await?;
        let session = session.with_expiry_from(now_secs());
        store::save(&self.config, &session);
        emit_auth_event(AuthEvent::TokenRefreshed, Some(&session));
        Ok(session)
    }

    async fn session_from_redirect(&self, tokens: FragmentTokens) -> Result<Session, AuthError> {
        let recovery = tokens.kind.as_deref() == Some("recovery");
        let user = self.fetch_user(&tokens.access_token).await?;
        let session = session_from_fragment(tokens, user, now_secs());
        store::save(&self.config, &session);
        let event = if recovery { AuthEvent::PasswordRecovery } else { AuthEvent::SignedIn };
        emit_auth_event(event, Some(&session));
        Ok(session)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AuthError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(AuthError::Rejected { status, message: backend_error_message(status, &body) });
    }
    serde_json::from_str(&body).map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<(), AuthError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(AuthError::Rejected { status, message: backend_error_message(status, &body) })
}

/// Log a failed session storage write; returns whether it went through.
pub fn storage_write_ok<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("failed to {action} stored session: {e:?}");
            false
        }
    }
}

/// Browser persistence of the current session.
#[cfg(feature = "hydrate")]
pub(crate) mod store {
    use crate::config::AppConfig;
    use crate::net::types::Session;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn load(config: &AppConfig) -> Option<Session> {
        let raw = storage()?.get_item(&config.session_storage_key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored session: {e}");
                clear(config);
                None
            }
        }
    }

    pub fn save(config: &AppConfig, session: &Session) {
        let Some(storage) = storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                super::storage_write_ok("save", storage.set_item(&config.session_storage_key, &raw));
            }
            Err(e) => leptos::logging::warn!("failed to serialize session: {e}"),
        }
    }

    pub fn clear(config: &AppConfig) {
        if let Some(storage) = storage() {
            super::storage_write_ok("clear", storage.remove_item(&config.session_storage_key));
        }
    }
}
