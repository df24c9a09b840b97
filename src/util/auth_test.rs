use super::*;
use crate::net::types::User;

#[test]
fn private_paths_match_by_fragment() {
    assert!(is_private_path("/dashboard"));
    assert!(is_private_path("/app/create-wizard"));
    assert!(is_private_path("/billing/invoices"));
    assert!(!is_private_path("/login"));
    assert!(!is_private_path("/"));
}

#[test]
fn sign_out_on_private_path_redirects() {
    assert!(should_redirect_on_sign_out(AuthEvent::SignedOut, "/dashboard"));
    assert!(!should_redirect_on_sign_out(AuthEvent::SignedOut, "/login"));
    assert!(!should_redirect_on_sign_out(AuthEvent::SignedIn, "/dashboard"));
    assert!(!should_redirect_on_sign_out(AuthEvent::TokenRefreshed, "/profile"));
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: Some("alice@example.com".to_owned()),
            user_metadata: serde_json::Value::Null,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn remote_sign_out_needs_session_key_removal() {
    let config = AppConfig::from_values(Some("https://abc.supabase.co"), None, None);
    let key = config.session_storage_key.clone();
    assert!(is_remote_sign_out(&config, Some(&key), None));
    assert!(!is_remote_sign_out(&config, Some(&key), Some("{}")));
    assert!(!is_remote_sign_out(&config, Some("theme"), None));
    assert!(!is_remote_sign_out(&config, None, None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_off_wasm() {
    redirect_to("/login");
    clear_fragment();
    assert_eq!(current_path(), "");
    assert_eq!(current_fragment(), None);
    assert_eq!(absolute_url("/update-password"), "/update-password");
}

#[test]
fn guard_installs_once() {
    let config = AppConfig::default();
    install_private_route_guard(&config);
    install_private_route_guard(&config);
    assert!(GUARD_INSTALLED.with(Cell::get));
}
