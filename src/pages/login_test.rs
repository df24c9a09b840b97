use super::*;

#[test]
fn toggle_flips_mode() {
    assert_eq!(LoginMode::SignIn.toggled(), LoginMode::SignUp);
    assert_eq!(LoginMode::SignUp.toggled(), LoginMode::SignIn);
}

#[test]
fn sign_up_also_asks_for_name() {
    let names: Vec<_> = LoginMode::SignUp.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["full_name", "email", "password"]);
    let names: Vec<_> = LoginMode::SignIn.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["email", "password"]);
}

#[test]
fn invalid_credentials_are_caught_before_any_request() {
    let mut errors = FieldErrors::default();
    let ok = errors.check_all(&[(&EMAIL_FIELD, "a@b"), (&PASSWORD_FIELD, "abcde")]);
    assert!(!ok);
    assert_eq!(errors.len(), 2);
}

#[test]
fn metadata_carries_trimmed_full_name() {
    assert_eq!(sign_up_metadata("  Ada Lovelace "), serde_json::json!({ "full_name": "Ada Lovelace" }));
}
