//! Best-effort delivery of project-created notifications to the automation
//! webhook.
//!
//! TRADE-OFFS
//! ==========
//! The submission awaits delivery so a page unload cannot cut the request
//! short, but the project row is already committed: a failed notification is
//! logged and otherwise ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use crate::net::types::WebhookPayload;
use crate::util::submit::WebhookNotifier;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    #[error("network error: {0}")]
    Network(String),
    #[error("webhook responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("not available on server")]
    Unavailable,
}

/// POST `payload` to `url` and wait for the response status.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn deliver(url: &str, payload: &WebhookPayload) -> Result<(), WebhookError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| WebhookError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| WebhookError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(WebhookError::Status { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(WebhookError::Unavailable)
    }
}

/// Log a delivery outcome; the only place webhook failures surface.
pub fn report_delivery(project_id: &str, result: &Result<(), WebhookError>) {
    match result {
        Ok(()) => leptos::logging::log!("webhook notified for project {project_id}"),
        Err(e @ WebhookError::Status { .. }) => {
            leptos::logging::warn!("webhook warning for project {project_id}: {e}");
        }
        Err(e) => leptos::logging::error!("webhook call failed for project {project_id}: {e}"),
    }
}

/// Notifier that POSTs to the automation webhook and logs the outcome.
#[derive(Clone, Debug)]
pub struct HttpWebhook {
    url: String,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WebhookNotifier for HttpWebhook {
    async fn notify(&self, payload: WebhookPayload) {
        let result = deliver(&self.url, &payload).await;
        report_delivery(&payload.project_id, &result);
    }
}
