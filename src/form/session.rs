//! Live form session: the values plus everything displayed around them.

use super::state::{FormState, SubmitOutcome, submit};
use crate::validate::{
    Field, FormValues, PasswordStrength, ValidationResult, compute_strength, compute_submit_gate,
    validate_field,
};
use serde::Serialize;
use std::collections::BTreeMap;

pub const SUCCESS_MESSAGE: &str = "✅ Form submitted successfully!";

/// Border state of an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIndicator {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// What is displayed next to one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
    pub indicator: FieldIndicator,
    pub message: &'static str,
}

impl From<&ValidationResult> for FieldStatus {
    fn from(result: &ValidationResult) -> Self {
        Self {
            indicator: if result.valid {
                FieldIndicator::Valid
            } else {
                FieldIndicator::Invalid
            },
            message: result.message,
        }
    }
}

/// The form as the user sees it.
#[derive(Debug, Clone)]
pub struct FormSession {
    values: FormValues,
    status: BTreeMap<Field, FieldStatus>,
    strength: PasswordStrength,
    submit_allowed: bool,
    success_message: &'static str,
    password_visible: bool,
    state: FormState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Fresh form: empty values, neutral indicators, empty meter, gate evaluated once.
    pub fn new() -> Self {
        let values = FormValues::default();
        let submit_allowed = compute_submit_gate(&values);
        Self {
            values,
            status: neutral_status(),
            strength: PasswordStrength::empty(),
            submit_allowed,
            success_message: "",
            password_visible: false,
            state: FormState::Editing,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn status(&self, field: Field) -> &FieldStatus {
        // Every field is seeded in `neutral_status`.
        &self.status[&field]
    }

    pub fn strength(&self) -> &PasswordStrength {
        &self.strength
    }

    pub fn submit_allowed(&self) -> bool {
        self.submit_allowed
    }

    pub fn success_message(&self) -> &'static str {
        self.success_message
    }

    /// Submit phase. `submit` settles before returning, so this is
    /// `Editing` between events; the phase is not part of [`FormView`].
    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Handle typing into a free-text field.
    ///
    /// Re-validates the field, and for the password also rescores the meter
    /// and re-validates confirm. The gate is recomputed afterwards. Returns
    /// `None` when `field` is the terms box.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Option<ValidationResult> {
        if !self.values.set_text(field, value) {
            return None;
        }

        let result = self.revalidate(field);
        if field == Field::Password {
            self.strength = compute_strength(&self.values.password);
            self.revalidate(Field::Confirm);
        }
        self.refresh_gate();
        Some(result)
    }

    /// Handle the terms checkbox changing. Only the gate is refreshed; the
    /// terms message is updated on submit.
    pub fn set_terms(&mut self, accepted: bool) {
        self.values.terms = accepted;
        self.refresh_gate();
    }

    /// Flip password masking and return the new visibility.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.password_visible = !self.password_visible;
        self.password_visible
    }

    /// Label of the show/hide button for the current visibility.
    pub fn visibility_label(&self) -> &'static str {
        if self.password_visible {
            "🙈 Hide"
        } else {
            "👁️ Show"
        }
    }

    /// Run the submit flow.
    ///
    /// Every field is re-validated and displayed. On acceptance the values,
    /// indicators and meter are reset and the success message is shown; on
    /// rejection the values stay as they are and the success message is cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.state = self.state.begin_submit();

        for field in Field::ALL {
            self.revalidate(field);
        }
        self.strength = compute_strength(&self.values.password);

        let outcome = submit(&mut self.values);
        self.state = self.state.conclude(outcome.is_accepted());

        if outcome.is_accepted() {
            self.success_message = SUCCESS_MESSAGE;
            self.status = neutral_status();
            self.strength = PasswordStrength::empty();
        } else {
            self.success_message = "";
        }
        self.refresh_gate();

        self.state = self.state.settle();
        outcome
    }

    /// Clear everything back to a fresh form.
    pub fn reset(&mut self) {
        let visible = self.password_visible;
        *self = FormSession::new();
        self.password_visible = visible;
    }

    /// Serializable view; the password and confirm text are masked unless
    /// the password is visible.
    pub fn view(&self) -> FormView {
        let mut values = self.values.clone();
        if !self.password_visible {
            values.password = mask(&values.password);
            values.confirm = mask(&values.confirm);
        }

        FormView {
            values,
            status: self.status.clone(),
            strength: self.strength,
            strength_label: self.strength.label(),
            submit_allowed: self.submit_allowed,
            success_message: self.success_message,
            password_visible: self.password_visible,
        }
    }

    fn revalidate(&mut self, field: Field) -> ValidationResult {
        let result = validate_field(field, &self.values);
        self.status.insert(field, FieldStatus::from(&result));
        result
    }

    fn refresh_gate(&mut self) {
        self.submit_allowed = compute_submit_gate(&self.values);
    }
}

/// Snapshot of a [`FormSession`] for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub values: FormValues,
    pub status: BTreeMap<Field, FieldStatus>,
    pub strength: PasswordStrength,
    pub strength_label: String,
    pub submit_allowed: bool,
    pub success_message: &'static str,
    pub password_visible: bool,
}

fn neutral_status() -> BTreeMap<Field, FieldStatus> {
    Field::ALL
        .iter()
        .map(|&field| (field, FieldStatus::default()))
        .collect()
}

fn mask(text: &str) -> String {
    "•".repeat(text.chars().count())
}
