//! Client configuration and route constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read a process environment at runtime, so backend
//! endpoints are baked in at compile time from `WEBFORGE_*` variables and
//! handed to components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SUPABASE_URL: &str = "https://webforge.supabase.co";
pub const DEFAULT_SUPABASE_ANON_KEY: &str = "public-anon-key";
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.webforge.ai/webhook/generate-site";

/// Number of screens in the project-creation wizard.
pub const TOTAL_STEPS: usize = 5;
/// Delay between a successful submission and the dashboard redirect.
pub const REDIRECT_DELAY_MS: u64 = 1500;
/// Lifetime of a toast notification.
pub const TOAST_DURATION_MS: f64 = 4000.0;
pub const MIN_PASSWORD_LEN: usize = 6;
/// Pause after the last keystroke before a field is re-validated.
pub const REVALIDATE_DEBOUNCE_MS: u64 = 300;

/// Navigation targets.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const UPDATE_PASSWORD: &str = "/update-password";
    pub const CREATE_WIZARD: &str = "/create-wizard";

    /// Path fragments that mark a page as requiring a session.
    pub const PRIVATE_FRAGMENTS: [&str; 5] = ["dashboard", "profile", "billing", "create-wizard", "project-workspace"];
}

/// Backend endpoints for the hosted auth/database service and the webhook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub webhook_url: String,
    pub session_storage_key: String,
}

impl AppConfig {
    /// Build config from `WEBFORGE_SUPABASE_URL`, `WEBFORGE_SUPABASE_ANON_KEY`
    /// and `WEBFORGE_WEBHOOK_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("WEBFORGE_SUPABASE_URL"),
            option_env!("WEBFORGE_SUPABASE_ANON_KEY"),
            option_env!("WEBFORGE_WEBHOOK_URL"),
        )
    }

    pub(crate) fn from_values(supabase_url: Option<&str>, anon_key: Option<&str>, webhook_url: Option<&str>) -> Self {
        let supabase_url = non_blank(supabase_url)
            .unwrap_or(DEFAULT_SUPABASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let session_storage_key = storage_key_for(&supabase_url);
        Self {
            supabase_url,
            supabase_anon_key: non_blank(anon_key).unwrap_or(DEFAULT_SUPABASE_ANON_KEY).to_owned(),
            webhook_url: non_blank(webhook_url).unwrap_or(DEFAULT_WEBHOOK_URL).to_owned(),
            session_storage_key,
        }
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.supabase_url, path.trim_start_matches('/'))
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Storage key in the same shape the hosted SDK uses: `sb-<project-ref>-auth-token`.
fn storage_key_for(supabase_url: &str) -> String {
    let project_ref = url::Url::parse(supabase_url)
        .ok()
        .and_then(|u| u.host_str().and_then(|host| host.split('.').next()).map(str::to_owned))
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "local".to_owned());
    format!("sb-{project_ref}-auth-token")
}
