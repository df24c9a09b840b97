use super::*;
use crate::net::types::ProjectConfig;

#[test]
fn list_projects_path_filters_by_owner_newest_first() {
    assert_eq!(
        list_projects_path("8f0c-11"),
        "projects?select=*&user_id=eq.8f0c-11&order=created_at.desc"
    );
}

#[test]
fn list_projects_path_escapes_user_id() {
    assert_eq!(
        list_projects_path("a&b"),
        "projects?select=*&user_id=eq.a%26b&order=created_at.desc"
    );
}

#[test]
fn rejected_error_shows_message_and_status() {
    let err = DataError::Rejected { status: 403, message: "permission denied".to_owned() };
    assert_eq!(err.to_string(), "permission denied (403)");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let client = DataClient::new(AppConfig::default(), "token");
    let row = NewProjectRow::pending("u1", &ProjectConfig::default());
    futures::executor::block_on(async {
        assert_eq!(client.insert_project(&row).await, Err(DataError::Unavailable));
        assert_eq!(client.list_projects("u1").await, Err(DataError::Unavailable));
    });
}
