//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Provided once by `App` as a
//! `RwSignal<AuthState>`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

/// Current user plus whether the initial session lookup is still running.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settle after a lookup; `None` means signed out.
    pub fn resolve(&mut self, session: Option<&Session>) {
        self.user = session.map(|s| s.user.clone());
        self.loading = false;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Lookup finished and nobody is signed in.
    pub fn is_signed_out(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
