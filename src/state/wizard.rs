//! Project-creation wizard state and step transitions.
//!
//! DESIGN
//! ======
//! All wizard state lives in one owned struct whose transitions are plain
//! methods; the page maps it to markup. Nothing here touches the DOM, so the
//! controller is testable without a browser.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeSet;

use crate::config::TOTAL_STEPS;
use crate::net::types::ProjectConfig;
use crate::util::selection::{HOME_PAGE, suggested_pages};
use crate::util::validation::{FieldErrors, StepCheck, validate_step};

pub const DETAILS_STEP: usize = 1;
pub const TYPE_STEP: usize = 2;
pub const STYLE_STEP: usize = 3;
pub const FEATURES_STEP: usize = 4;
pub const PAGES_STEP: usize = 5;

/// Progress marker classification relative to the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

impl StepStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "progress-step",
            Self::Active => "progress-step active",
            Self::Completed => "progress-step completed",
        }
    }
}

/// Which navigation buttons the current step shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepControls {
    pub show_prev: bool,
    pub show_next: bool,
    pub show_finish: bool,
}

/// Raw inputs not yet merged into the project config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardForm {
    pub name: String,
    pub description: String,
    pub features: BTreeSet<String>,
    pub pages: BTreeSet<String>,
}

impl WizardForm {
    /// Current text of a named input; unknown names read as empty.
    pub fn text_value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "description" => &self.description,
            _ => "",
        }
    }
}

/// Why a forward move was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRejection {
    /// One warning per broken cross-field rule, for toast display.
    pub warnings: Vec<&'static str>,
}

/// Whole-wizard state: current step, accumulated config, pending inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    step: usize,
    total_steps: usize,
    pub config: ProjectConfig,
    pub form: WizardForm,
    /// Page list offered on the last step, `home` first.
    pub suggested_pages: Vec<String>,
    pub errors: FieldErrors,
    /// Loading overlay is up and a submission is in flight.
    pub submitting: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(TOTAL_STEPS)
    }
}

impl WizardState {
    /// Fresh wizard at step 1 with an empty config. `total_steps` is at least 1.
    pub fn new(total_steps: usize) -> Self {
        let suggested_pages = suggested_pages("");
        let pages = suggested_pages.iter().cloned().collect();
        Self {
            step: 1,
            total_steps: total_steps.max(1),
            config: ProjectConfig::default(),
            form: WizardForm { pages, ..WizardForm::default() },
            suggested_pages,
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    pub fn is_last(&self) -> bool {
        self.step == self.total_steps
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn controls(&self) -> StepControls {
        StepControls {
            show_prev: !self.is_first(),
            show_next: !self.is_last(),
            show_finish: self.is_last(),
        }
    }

    /// Validate the current step and record annotations for failing fields.
    pub fn check_current(&mut self) -> StepCheck {
        self.check_step(self.step)
    }

    /// Validate `step` and record annotations for its failing fields.
    pub fn check_step(&mut self, step: usize) -> StepCheck {
        let check = validate_step(step, &self.form, &self.config);
        for spec in crate::util::validation::step_fields(step) {
            match check.field_errors.iter().find(|(name, _)| *name == spec.name) {
                Some((name, error)) => {
                    self.errors.annotate(name, *error);
                }
                None => self.errors.clear(spec.name),
            }
        }
        check
    }

    /// Advance one step if the current step validates.
    ///
    /// On the last step a valid `next` saves the step's inputs and stays put.
    ///
    /// # Errors
    ///
    /// Returns the rule warnings when validation fails; the step is unchanged.
    pub fn next(&mut self) -> Result<(), StepRejection> {
        let check = self.check_current();
        if !check.is_valid() {
            return Err(StepRejection { warnings: check.warnings });
        }
        self.save_step(self.step);
        if self.step < self.total_steps {
            self.step += 1;
        }
        Ok(())
    }

    /// Go back one step; no-op on the first step.
    pub fn prev(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Merge a step's raw inputs into the config.
    pub fn save_step(&mut self, step: usize) {
        match step {
            DETAILS_STEP => {
                self.config.name = self.form.name.trim().to_owned();
                self.config.description = self.form.description.trim().to_owned();
            }
            FEATURES_STEP => self.config.features = self.form.features.clone(),
            PAGES_STEP => {
                let mut pages = self.form.pages.clone();
                pages.insert(HOME_PAGE.to_owned());
                self.config.pages = pages;
            }
            _ => {}
        }
    }

    /// Edit a text input, dropping its annotation before any re-validation.
    pub fn set_text(&mut self, field: &str, value: String) {
        self.errors.clear(field);
        match field {
            "name" => self.form.name = value,
            "description" => self.form.description = value,
            _ => {}
        }
    }

    pub fn set_feature(&mut self, feature: &str, checked: bool) {
        if checked {
            self.form.features.insert(feature.to_owned());
        } else {
            self.form.features.remove(feature);
        }
    }

    /// Tick or untick a page; `home` stays selected regardless.
    pub fn set_page(&mut self, page: &str, checked: bool) {
        if page == HOME_PAGE {
            return;
        }
        if checked {
            self.form.pages.insert(page.to_owned());
        } else {
            self.form.pages.remove(page);
        }
    }
}
