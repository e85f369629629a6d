//! Submit state machine and outcomes.
//!
//! ```text
//! Editing --submit--> Validating --pass--> Accepted --settle--> Editing
//!                                \--fail--> Rejected --settle--> Editing
//! ```

use crate::validate::{FormValues, ValidationFailure, failures};
use serde::Serialize;

/// Phase of the form with respect to submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Editing,
    Validating,
    Accepted,
    Rejected,
}

impl FormState {
    /// A submit attempt starts validation from any phase.
    pub fn begin_submit(self) -> Self {
        FormState::Validating
    }

    /// Record the verdict. Only meaningful while validating.
    pub fn conclude(self, passed: bool) -> Self {
        match self {
            FormState::Validating if passed => FormState::Accepted,
            FormState::Validating => FormState::Rejected,
            other => other,
        }
    }

    /// Terminal outcomes fall back to editing; other phases are unchanged.
    pub fn settle(self) -> Self {
        match self {
            FormState::Accepted | FormState::Rejected => FormState::Editing,
            other => other,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted,
    Rejected { failures: Vec<ValidationFailure> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }

    /// Transient notification shown after the attempt.
    pub fn toast_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "Submitted 🎉",
            SubmitOutcome::Rejected { .. } => "Fix validation errors ❌",
        }
    }

    /// Names of the failing fields, in form order.
    pub fn failed_fields(&self) -> Vec<&'static str> {
        match self {
            SubmitOutcome::Accepted => Vec::new(),
            SubmitOutcome::Rejected { failures } => {
                failures.iter().map(|f| f.field.as_str()).collect()
            }
        }
    }
}

/// Validate every field and, when all pass, clear the values.
///
/// Rejected attempts leave `values` untouched so the user can correct them.
pub fn submit(values: &mut FormValues) -> SubmitOutcome {
    let failures = failures(values);
    if failures.is_empty() {
        values.reset();
        SubmitOutcome::Accepted
    } else {
        SubmitOutcome::Rejected { failures }
    }
}
