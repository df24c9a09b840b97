use super::*;
use crate::net::types::FragmentTokens;

fn client() -> AuthClient {
    AuthClient::new(AppConfig::from_values(Some("https://abc.supabase.co"), None, None))
}

#[test]
fn grant_paths_match_backend_routes() {
    assert_eq!(password_grant_path(), "token?grant_type=password");
    assert_eq!(refresh_grant_path(), "token?grant_type=refresh_token");
}

#[test]
fn provider_authorize_url_encodes_redirect() {
    let url = client()
        .provider_authorize_url(OAuthProvider::GitHub, "https://app.test/dashboard")
        .unwrap();
    assert_eq!(
        url,
        "https://abc.supabase.co/auth/v1/authorize?provider=github&redirect_to=https%3A%2F%2Fapp.test%2Fdashboard"
    );
}

#[test]
fn recover_url_carries_redirect_target() {
    let url = recover_url(client().config(), "https://app.test/update-password").unwrap();
    assert_eq!(
        url,
        "https://abc.supabase.co/auth/v1/recover?redirect_to=https%3A%2F%2Fapp.test%2Fupdate-password"
    );
}

#[test]
fn provider_names_and_labels() {
    assert_eq!(OAuthProvider::Google.as_str(), "google");
    assert_eq!(OAuthProvider::GitHub.as_str(), "github");
    assert_eq!(OAuthProvider::GitHub.label(), "GitHub");
}

#[test]
fn sign_up_with_session_signs_in() {
    let value = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "token_type": "bearer",
        "expires_in": 3600,
        "user": { "id": "u1", "email": "a@b.com" }
    });
    match parse_sign_up_response(value, 100).unwrap() {
        SignUpOutcome::SignedIn(session) => {
            assert_eq!(session.user.id, "u1");
            assert_eq!(session.expires_at, Some(3700));
        }
        other => panic!("expected session, got {other:?}"),
    }
}

#[test]
fn sign_up_without_session_awaits_confirmation() {
    let value = serde_json::json!({ "id": "u2", "email": "new@b.com", "user_metadata": { "full_name": "New" } });
    match parse_sign_up_response(value, 100).unwrap() {
        SignUpOutcome::ConfirmationSent(user) => assert_eq!(user.display_name(), "New"),
        other => panic!("expected confirmation, got {other:?}"),
    }
}

#[test]
fn sign_up_garbage_is_decode_error() {
    let err = parse_sign_up_response(serde_json::json!({ "unexpected": true }), 0).unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
}

#[test]
fn session_from_fragment_fills_expiry() {
    let tokens = FragmentTokens {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 60,
        expires_at: None,
        kind: None,
    };
    let user = User { id: "u1".to_owned(), email: None, user_metadata: serde_json::Value::Null };
    let session = session_from_fragment(tokens, user, 1000);
    assert_eq!(session.expires_at, Some(1060));
    assert_eq!(session.access_token, "at");
}

#[test]
fn auth_error_messages() {
    let rejected = AuthError::Rejected { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(rejected.to_string(), "Invalid login credentials");
    assert_eq!(AuthError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let auth = client();
    futures::executor::block_on(async {
        assert_eq!(auth.sign_in("a@b.com", "secret").await, Err(AuthError::Unavailable));
        assert_eq!(auth.sign_out().await, Err(AuthError::Unavailable));
        assert_eq!(auth.get_session().await, None);
        assert_eq!(auth.require_session().await, None);
    });
}

#[test]
fn storage_write_failure_is_reported() {
    assert!(storage_write_ok::<&str>("save", Ok(())));
    assert!(!storage_write_ok("save", Err("QuotaExceededError")));
}
