use super::*;
use crate::state::wizard::{FEATURES_STEP, PAGES_STEP};

// =============================================================
// Single fields
// =============================================================

#[test]
fn required_field_rejects_blank_after_trim() {
    assert_eq!(validate_field(&PROJECT_NAME_FIELD, "   "), Err(FieldError::Required));
    assert_eq!(validate_field(&PROJECT_NAME_FIELD, " x "), Ok(()));
}

#[test]
fn optional_field_accepts_blank() {
    assert_eq!(validate_field(&PROJECT_DESCRIPTION_FIELD, ""), Ok(()));
    let optional_email = FieldSpec::optional("contact", FieldKind::Email);
    assert_eq!(validate_field(&optional_email, "  "), Ok(()));
    assert_eq!(validate_field(&optional_email, "nope"), Err(FieldError::InvalidEmail));
}

#[test]
fn email_needs_domain_with_dot() {
    assert_eq!(validate_field(&EMAIL_FIELD, "a@b"), Err(FieldError::InvalidEmail));
    assert_eq!(validate_field(&EMAIL_FIELD, "a@b.com"), Ok(()));
    assert_eq!(validate_field(&EMAIL_FIELD, "a b@c.com"), Err(FieldError::InvalidEmail));
    assert_eq!(validate_field(&EMAIL_FIELD, "a@@b.com"), Err(FieldError::InvalidEmail));
}

#[test]
fn password_needs_six_characters() {
    assert_eq!(
        validate_field(&PASSWORD_FIELD, "abcde"),
        Err(FieldError::PasswordTooShort { min: 6 })
    );
    assert_eq!(validate_field(&PASSWORD_FIELD, "abcdef"), Ok(()));
    assert_eq!(validate_field(&PASSWORD_FIELD, "éééééé"), Ok(()));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(FieldError::Required.to_string(), "This field is required.");
    assert_eq!(FieldError::InvalidEmail.to_string(), "Invalid email address.");
    assert_eq!(
        FieldError::PasswordTooShort { min: 6 }.to_string(),
        "Password must be at least 6 characters."
    );
}

// =============================================================
// Annotations
// =============================================================

#[test]
fn annotate_is_idempotent_per_field() {
    let mut errors = FieldErrors::default();
    assert!(errors.annotate("email", FieldError::Required));
    assert!(!errors.annotate("email", FieldError::InvalidEmail));
    assert_eq!(errors.get("email"), Some(FieldError::Required));
    assert_eq!(errors.len(), 1);
}

#[test]
fn check_clears_annotation_once_valid() {
    let mut errors = FieldErrors::default();
    assert!(!errors.check(&EMAIL_FIELD, "a@b"));
    assert_eq!(errors.message("email").as_deref(), Some("Invalid email address."));
    assert!(errors.check(&EMAIL_FIELD, "a@b.com"));
    assert!(errors.is_empty());
}

#[test]
fn check_all_reports_every_failure() {
    let mut errors = FieldErrors::default();
    let ok = errors.check_all(&[(&EMAIL_FIELD, ""), (&PASSWORD_FIELD, "abc")]);
    assert!(!ok);
    assert_eq!(errors.get("email"), Some(FieldError::Required));
    assert_eq!(errors.get("password"), Some(FieldError::PasswordTooShort { min: 6 }));

    errors.clear_all();
    assert!(errors.check_all(&[(&EMAIL_FIELD, "a@b.com"), (&PASSWORD_FIELD, "abcdef")]));
}

// =============================================================
// Steps
// =============================================================

#[test]
fn details_step_requires_name_only() {
    let mut form = WizardForm::default();
    let config = ProjectConfig::default();
    let check = validate_step(1, &form, &config);
    assert_eq!(check.field_errors, vec![("name", FieldError::Required)]);
    assert!(check.warnings.is_empty());

    form.name = "Atelier".to_owned();
    assert!(validate_step(1, &form, &config).is_valid());
}

#[test]
fn type_and_style_steps_check_selection() {
    let form = WizardForm::default();
    let mut config = ProjectConfig::default();
    assert_eq!(validate_step(TYPE_STEP, &form, &config).warnings, vec!["Please select a site type."]);
    assert_eq!(validate_step(STYLE_STEP, &form, &config).warnings, vec!["Please select a style."]);

    config.site_type = "portfolio".to_owned();
    config.style = "modern".to_owned();
    assert!(validate_step(TYPE_STEP, &form, &config).is_valid());
    assert!(validate_step(STYLE_STEP, &form, &config).is_valid());
}

#[test]
fn optional_steps_always_pass() {
    let form = WizardForm::default();
    let config = ProjectConfig::default();
    assert!(validate_step(FEATURES_STEP, &form, &config).is_valid());
    assert!(validate_step(PAGES_STEP, &form, &config).is_valid());
}

#[test]
fn step_rules_map_to_collecting_steps() {
    assert_eq!(step_rule(TYPE_STEP), Some(CrossFieldRule::TypeSelected));
    assert_eq!(step_rule(STYLE_STEP), Some(CrossFieldRule::StyleSelected));
    assert_eq!(step_rule(1), None);
    assert_eq!(step_fields(1).len(), 2);
    assert!(step_fields(4).is_empty());
}
