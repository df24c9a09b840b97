//! Project submission pipeline: validate, persist, notify, redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence and notification sit behind `ProjectSink` and
//! `WebhookNotifier` so the ordering rules can run against in-memory fakes:
//! the row is committed before the webhook fires, the webhook call settles
//! before the redirect is handed back, and its outcome never reaches the
//! returned result.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::{REDIRECT_DELAY_MS, paths};
use crate::net::data::DataError;
use crate::net::types::{NewProjectRow, ProjectConfig, ProjectRecord, WebhookPayload};
use crate::state::wizard::{StepRejection, WizardState};

/// Blocking alert shown when the project row cannot be created.
pub const PERSISTENCE_ALERT: &str = "Something went wrong while creating the project. Please try again.";

/// Storage for new project rows.
#[allow(async_fn_in_trait)]
pub trait ProjectSink {
    /// Insert `row` and return the stored record with its server id.
    async fn insert_project(&self, row: &NewProjectRow) -> Result<ProjectRecord, DataError>;
}

/// Best-effort notification channel. Implementations own their error
/// reporting; nothing flows back to the caller.
#[allow(async_fn_in_trait)]
pub trait WebhookNotifier {
    /// Resolves once the notification has settled, successfully or not.
    async fn notify(&self, payload: WebhookPayload);
}

/// Where to go once a project exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    pub after: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub project: ProjectRecord,
    pub redirect: Redirect,
}

/// Re-validate the terminal step and merge its inputs.
///
/// Returns the config to persist; on rejection the state is untouched apart
/// from field annotations.
///
/// # Errors
///
/// Returns the step's rule warnings if it does not validate.
pub fn prepare_submission(state: &mut WizardState) -> Result<ProjectConfig, StepRejection> {
    let terminal = state.total_steps();
    let check = state.check_step(terminal);
    if !check.is_valid() {
        return Err(StepRejection { warnings: check.warnings });
    }
    state.save_step(terminal);
    Ok(state.config.clone())
}

pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Persist `config` for `user_id`, then wait for the webhook to settle.
///
/// # Errors
///
/// Returns the persistence failure; the webhook is not called in that case.
pub async fn persist_and_notify<S, N>(
    sink: &S,
    notifier: &N,
    user_id: &str,
    config: &ProjectConfig,
    now: DateTime<Utc>,
) -> Result<SubmitOutcome, DataError>
where
    S: ProjectSink,
    N: WebhookNotifier,
{
    let row = NewProjectRow::pending(user_id, config);
    let project = match sink.insert_project(&row).await {
        Ok(project) => project,
        Err(e) => {
            leptos::logging::error!("project submission failed: {e}");
            return Err(e);
        }
    };
    leptos::logging::log!("project created: {}", project.id);

    notifier
        .notify(WebhookPayload {
            project_id: project.id.clone(),
            user_id: user_id.to_owned(),
            config: config.clone(),
            timestamp: iso_timestamp(now),
        })
        .await;

    Ok(SubmitOutcome {
        project,
        redirect: Redirect { path: paths::DASHBOARD, after: Duration::from_millis(REDIRECT_DELAY_MS) },
    })
}
