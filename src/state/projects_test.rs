use super::*;
use crate::net::data::DataError;

fn record(id: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_owned(),
        user_id: Some("u1".to_owned()),
        name: format!("Project {id}"),
        site_type: "blog".to_owned(),
        status: "pending".to_owned(),
        config_json: None,
        created_at: Some("2026-10-17T08:00:00Z".to_owned()),
    }
}

#[test]
fn load_success_replaces_items() {
    let mut state = ProjectsState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load::<DataError>(Ok(vec![record("p1"), record("p2")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert!(!state.is_empty_list());
}

#[test]
fn load_failure_keeps_rows_and_sets_error() {
    let mut state = ProjectsState::default();
    state.finish_load::<DataError>(Ok(vec![record("p1")]));
    state.begin_load();
    state.finish_load(Err(DataError::Rejected {
        status: 401,
        message: "JWT expired".to_owned(),
    }));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("JWT expired (401)"));
}

#[test]
fn empty_list_only_after_clean_load() {
    let mut state = ProjectsState::default();
    state.begin_load();
    assert!(!state.is_empty_list());
    state.finish_load::<DataError>(Ok(Vec::new()));
    assert!(state.is_empty_list());
}

#[test]
fn status_labels() {
    assert_eq!(status_label("pending"), "Pending");
    assert_eq!(status_label("published"), "Ready");
    assert_eq!(status_label("archived"), "archived");
}
