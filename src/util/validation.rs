//! Field and step validation for wizard and auth forms.
//!
//! DESIGN
//! ======
//! Validation never fails as an error path: results are plain values that
//! pages turn into per-field annotations and warning toasts.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::MIN_PASSWORD_LEN;
use crate::net::types::ProjectConfig;
use crate::state::wizard::{STYLE_STEP, TYPE_STEP, WizardForm};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// How a field's content is checked beyond the required rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

/// Static description of one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

pub const EMAIL_FIELD: FieldSpec = FieldSpec::required("email", FieldKind::Email);
pub const PASSWORD_FIELD: FieldSpec = FieldSpec::required("password", FieldKind::Password);
pub const FULL_NAME_FIELD: FieldSpec = FieldSpec::required("full_name", FieldKind::Text);
pub const PROJECT_NAME_FIELD: FieldSpec = FieldSpec::required("name", FieldKind::Text);
pub const PROJECT_DESCRIPTION_FIELD: FieldSpec = FieldSpec::optional("description", FieldKind::Text);

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
}

/// Check one value against its spec. Pattern rules only apply to non-blank
/// input, so optional fields may stay empty.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if spec.required { Err(FieldError::Required) } else { Ok(()) };
    }
    match spec.kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Email => Ok(()),
        FieldKind::Password if value.chars().count() < MIN_PASSWORD_LEN => {
            Err(FieldError::PasswordTooShort { min: MIN_PASSWORD_LEN })
        }
        FieldKind::Password => Ok(()),
    }
}

/// Visible error annotations keyed by field name, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<String, FieldError>,
}

impl FieldErrors {
    /// Attach an annotation unless the field already shows one.
    ///
    /// Returns `true` if a new annotation was added.
    pub fn annotate(&mut self, field: &str, error: FieldError) -> bool {
        if self.by_field.contains_key(field) {
            return false;
        }
        self.by_field.insert(field.to_owned(), error);
        true
    }

    pub fn clear(&mut self, field: &str) {
        self.by_field.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.by_field.clear();
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.by_field.get(field).copied()
    }

    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Validate `value`, annotating on failure and clearing on success.
    pub fn check(&mut self, spec: &FieldSpec, value: &str) -> bool {
        match validate_field(spec, value) {
            Ok(()) => {
                self.clear(spec.name);
                true
            }
            Err(error) => {
                self.annotate(spec.name, error);
                false
            }
        }
    }

    /// Validate every `(spec, value)` pair without stopping at the first failure.
    pub fn check_all(&mut self, fields: &[(&FieldSpec, &str)]) -> bool {
        fields
            .iter()
            .fold(true, |ok, (spec, value)| self.check(spec, value) && ok)
    }
}

/// A wizard rule spanning more than one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrossFieldRule {
    TypeSelected,
    StyleSelected,
}

impl CrossFieldRule {
    pub fn holds(self, config: &ProjectConfig) -> bool {
        match self {
            Self::TypeSelected => !config.site_type.trim().is_empty(),
            Self::StyleSelected => !config.style.trim().is_empty(),
        }
    }

    pub fn warning(self) -> &'static str {
        match self {
            Self::TypeSelected => "Please select a site type.",
            Self::StyleSelected => "Please select a style.",
        }
    }
}

/// Text inputs rendered inside a wizard step.
pub fn step_fields(step: usize) -> &'static [FieldSpec] {
    static DETAILS: [FieldSpec; 2] = [PROJECT_NAME_FIELD, PROJECT_DESCRIPTION_FIELD];
    match step {
        1 => &DETAILS,
        _ => &[],
    }
}

pub fn step_rule(step: usize) -> Option<CrossFieldRule> {
    match step {
        TYPE_STEP => Some(CrossFieldRule::TypeSelected),
        STYLE_STEP => Some(CrossFieldRule::StyleSelected),
        _ => None,
    }
}

/// Outcome of validating one wizard step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCheck {
    pub field_errors: Vec<(&'static str, FieldError)>,
    pub warnings: Vec<&'static str>,
}

impl StepCheck {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.warnings.is_empty()
    }
}

/// Check the step's fields and its cross-field rule; both always run.
pub fn validate_step(step: usize, form: &WizardForm, config: &ProjectConfig) -> StepCheck {
    let field_errors = step_fields(step)
        .iter()
        .filter_map(|spec| {
            validate_field(spec, form.text_value(spec.name))
                .err()
                .map(|e| (spec.name, e))
        })
        .collect();
    let warnings = step_rule(step)
        .filter(|rule| !rule.holds(config))
        .map(CrossFieldRule::warning)
        .into_iter()
        .collect();
    StepCheck { field_errors, warnings }
}
