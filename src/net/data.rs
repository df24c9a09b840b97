//! REST client for the hosted database (`/rest/v1`).
//!
//! Requests authenticate with the anon key plus the user's access token so
//! row-level security scopes every read and write to the signed-in user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::config::AppConfig;
use crate::net::types::{NewProjectRow, ProjectRecord};
use crate::util::submit::ProjectSink;

#[cfg(feature = "hydrate")]
use crate::net::types::backend_error_message;

pub const PROJECTS_TABLE: &str = "projects";

/// Persistence failures. Nothing is written when any of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message} ({status})")]
    Rejected { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn list_projects_path(user_id: &str) -> String {
    let user_filter: String = url::form_urlencoded::byte_serialize(format!("eq.{user_id}").as_bytes()).collect();
    format!("{PROJECTS_TABLE}?select=*&user_id={user_filter}&order=created_at.desc")
}

/// Data API client bound to one user's access token.
#[derive(Clone, Debug)]
pub struct DataClient {
    config: AppConfig,
    access_token: String,
}

impl DataClient {
    pub fn new(config: AppConfig, access_token: impl Into<String>) -> Self {
        Self { config, access_token: access_token.into() }
    }

    /// Insert one project row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend rejects the row, or
    /// the created row cannot be decoded.
    pub async fn insert_project(&self, row: &NewProjectRow) -> Result<ProjectRecord, DataError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.rest_url(PROJECTS_TABLE))
                .header("apikey", &self.config.supabase_anon_key)
                .header("Authorization", &format!("Bearer {}", self.access_token))
                .header("Prefer", "return=representation")
                .header("Accept", "application/vnd.pgrst.object+json")
                .json(row)
                .map_err(|e| DataError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| DataError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = row;
            Err(DataError::Unavailable)
        }
    }

    /// Projects owned by `user_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the rows cannot be decoded.
    pub async fn list_projects(&self, user_id: &str) -> Result<Vec<ProjectRecord>, DataError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.rest_url(&list_projects_path(user_id)))
                .header("apikey", &self.config.supabase_anon_key)
                .header("Authorization", &format!("Bearer {}", self.access_token))
                .send()
                .await
                .map_err(|e| DataError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, &self.config, &self.access_token);
            Err(DataError::Unavailable)
        }
    }
}

impl ProjectSink for DataClient {
    async fn insert_project(&self, row: &NewProjectRow) -> Result<ProjectRecord, DataError> {
        DataClient::insert_project(self, row).await
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, DataError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| DataError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(DataError::Rejected { status, message: backend_error_message(status, &body) });
    }
    serde_json::from_str(&body).map_err(|e| DataError::Decode(e.to_string()))
}
