use super::*;

fn session(id: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: User {
            id: id.to_owned(),
            email: Some("a@b.com".to_owned()),
            user_metadata: serde_json::Value::Null,
        },
    }
}

#[test]
fn starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_signed_out());
}

#[test]
fn resolve_with_session_sets_user() {
    let mut state = AuthState::default();
    state.resolve(Some(&session("u1")));
    assert!(!state.loading);
    assert_eq!(state.user_id(), Some("u1"));
    assert!(!state.is_signed_out());
}

#[test]
fn resolve_without_session_is_signed_out() {
    let mut state = AuthState::default();
    state.resolve(Some(&session("u1")));
    state.resolve(None);
    assert_eq!(state.user_id(), None);
    assert!(state.is_signed_out());
}
