//! Error types for the formgate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Field-level validation problems are not errors at all: they are returned as
//! data by the `validate` module. This enum covers the outer surface only.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for formgate operations.
#[derive(Error, Debug)]
pub enum FormgateError {
    /// User provided invalid arguments, an unreadable file, or a bad config.
    #[error("{0}")]
    UserError(String),

    /// A check, gate, or submit did not pass.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl FormgateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FormgateError::UserError(_) => exit_codes::USER_ERROR,
            FormgateError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for formgate operations.
pub type Result<T> = std::result::Result<T, FormgateError>;
