//! Wire DTOs for the hosted auth/database backend and the webhook.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON verbatim so serde round-trips need no
//! custom glue; Rust-side names differ only where the wire name is a keyword.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Safety margin before `expires_at` after which a session counts as expired.
pub const SESSION_EXPIRY_MARGIN_SECS: i64 = 10;

/// An authenticated user as returned by the auth backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Primary email, absent for some OAuth providers.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form metadata captured at sign-up (e.g. `full_name`).
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl User {
    /// Name to show in page chrome: `full_name` metadata, then email, then id.
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_owned)
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// Identity + token pair issued by the auth backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds from issue.
    pub expires_in: i64,
    /// Absolute expiry as Unix seconds; filled from `expires_in` when absent.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill `expires_at` from `expires_in` if the backend left it out.
    #[must_use]
    pub fn with_expiry_from(mut self, now_secs: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now_secs + self.expires_in);
        }
        self
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at - SESSION_EXPIRY_MARGIN_SECS <= now_secs)
    }
}

/// Tokens delivered in a redirect URL fragment after OAuth or password recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    /// `recovery` for password-reset links, `None` for plain sign-in.
    pub kind: Option<String>,
}

/// Parse `#access_token=...&refresh_token=...` into tokens.
///
/// Returns `None` if either token is missing so unrelated anchors are ignored.
pub fn parse_fragment_tokens(fragment: &str) -> Option<FragmentTokens> {
    let raw = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut token_type = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut kind = None;
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "refresh_token" => refresh_token = Some(value.into_owned()),
            "token_type" => token_type = Some(value.into_owned()),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "type" => kind = Some(value.into_owned()),
            _ => {}
        }
    }
    Some(FragmentTokens {
        access_token: access_token.filter(|t| !t.is_empty())?,
        refresh_token: refresh_token.filter(|t| !t.is_empty())?,
        token_type: token_type.unwrap_or_else(default_token_type),
        expires_in: expires_in.unwrap_or(3600),
        expires_at,
        kind,
    })
}

/// The wizard's accumulated input, persisted once as `config_json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub site_type: String,
    pub style: String,
    pub palette: String,
    pub features: BTreeSet<String>,
    pub pages: BTreeSet<String>,
}

/// Row inserted into the `projects` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProjectRow {
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub site_type: String,
    pub status: String,
    pub config_json: ProjectConfig,
}

/// Initial status for freshly created projects.
pub const STATUS_PENDING: &str = "pending";

impl NewProjectRow {
    pub fn pending(user_id: &str, config: &ProjectConfig) -> Self {
        Self {
            user_id: user_id.to_owned(),
            name: config.name.clone(),
            site_type: config.site_type.clone(),
            status: STATUS_PENDING.to_owned(),
            config_json: config.clone(),
        }
    }
}

/// A `projects` row as read back from the database.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Server-assigned identifier; numeric keys are read as their decimal text.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub site_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub config_json: Option<ProjectConfig>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected a string or numeric id, got {other}"))),
    }
}

/// Body POSTed to the automation webhook after a project is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub project_id: String,
    pub user_id: String,
    pub config: ProjectConfig,
    /// ISO 8601 UTC timestamp.
    pub timestamp: String,
}

/// Error body shape shared by the auth and data REST APIs.
///
/// The auth service reports `error_description` or `msg`, the data service
/// reports `message`; whichever is present wins.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendErrorBody {
    pub fn into_message(self, status: u16) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed: {status}"))
    }
}

/// Extract a human-readable message from a backend error body.
pub fn backend_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<BackendErrorBody>(body)
        .unwrap_or_default()
        .into_message(status)
}
