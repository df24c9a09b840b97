//! Project-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Kept apart from wizard state; the dashboard only reads rows back.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::ProjectRecord;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectsState {
    pub items: Vec<ProjectRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished load; a failure keeps the previous rows.
    pub fn finish_load<E: std::fmt::Display>(&mut self, result: Result<Vec<ProjectRecord>, E>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Dashboard empty state: loaded fine and nothing to show.
    pub fn is_empty_list(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// Human label for a project `status` column value.
pub fn status_label(status: &str) -> &str {
    match status {
        "pending" => "Pending",
        "generating" => "Generating",
        "ready" | "published" => "Ready",
        "failed" | "error" => "Failed",
        other => other,
    }
}
