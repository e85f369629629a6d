//! Per-field validators.
//!
//! Each validator reads the current value of one field and returns a
//! [`ValidationResult`]. Nothing is cached: every call recomputes from the
//! value it is given.

use super::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const NAME_MESSAGE: &str = "Name must be letters/spaces (min 2).";
pub const EMAIL_MESSAGE: &str = "Enter a valid email (e.g., jane@example.com).";
pub const PHONE_MESSAGE: &str = "Phone must be 7–15 digits (numbers only).";
pub const PASSWORD_MESSAGE: &str =
    "Use ≥8 chars with uppercase, lowercase, number, and special character.";
pub const CONFIRM_MESSAGE: &str = "Passwords must match.";
pub const TERMS_MESSAGE: &str = "You must accept the terms.";

/// The six inputs of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Confirm,
    Terms,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::Confirm,
        Field::Terms,
    ];

    /// Parse a field from its snake_case name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "password" => Some(Self::Password),
            "confirm" => Some(Self::Confirm),
            "terms" => Some(Self::Terms),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::Confirm => "confirm",
            Field::Terms => "terms",
        }
    }

    /// The message shown next to the field when it is invalid.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => NAME_MESSAGE,
            Field::Email => EMAIL_MESSAGE,
            Field::Phone => PHONE_MESSAGE,
            Field::Password => PASSWORD_MESSAGE,
            Field::Confirm => CONFIRM_MESSAGE,
            Field::Terms => TERMS_MESSAGE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one field.
///
/// `message` is empty when the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub field: Field,
    pub valid: bool,
    pub message: &'static str,
}

impl ValidationResult {
    fn check(field: Field, valid: bool) -> Self {
        Self {
            field,
            valid,
            message: if valid { "" } else { field.error_message() },
        }
    }

    /// Convert an invalid result into a [`ValidationFailure`].
    pub fn failure(&self) -> Option<ValidationFailure> {
        (!self.valid).then(|| ValidationFailure {
            field: self.field,
            reason: self.message,
        })
    }
}

/// The one error kind of the engine: a field the user has to fix.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {reason}")]
pub struct ValidationFailure {
    pub field: Field,
    pub reason: &'static str,
}

pub fn validate_name(value: &str) -> ValidationResult {
    ValidationResult::check(Field::Name, rules::is_name(value.trim()))
}

pub fn validate_email(value: &str) -> ValidationResult {
    ValidationResult::check(Field::Email, rules::is_email(value.trim()))
}

pub fn validate_phone(value: &str) -> ValidationResult {
    ValidationResult::check(Field::Phone, rules::is_phone(value.trim()))
}

/// Password is checked untrimmed: leading and trailing spaces count as
/// special characters.
pub fn validate_password(value: &str) -> ValidationResult {
    let valid = rules::has_min_len(value)
        && rules::has_lowercase(value)
        && rules::has_uppercase(value)
        && rules::has_digit(value)
        && rules::has_special(value);
    ValidationResult::check(Field::Password, valid)
}

/// Confirm depends on the password as well, so callers must re-run it when
/// either value changes.
pub fn validate_confirm(password: &str, confirm: &str) -> ValidationResult {
    ValidationResult::check(Field::Confirm, confirm_valid(password, confirm))
}

pub fn confirm_valid(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && confirm == password
}

pub fn validate_terms(accepted: bool) -> ValidationResult {
    ValidationResult::check(Field::Terms, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_examples() {
        assert!(validate_name("Jo").valid);
        assert!(!validate_name("J").valid);
        assert!(!validate_name("Jo3").valid);
        assert!(validate_name("  Jo  ").valid);
    }

    #[test]
    fn name_of_only_spaces_is_invalid_after_trim() {
        assert!(!validate_name("     ").valid);
    }

    #[test]
    fn email_examples() {
        assert!(validate_email("jane@example.com").valid);
        assert!(!validate_email("jane@example").valid);
        assert!(validate_email("j@e.co").valid);
        assert!(validate_email("  jane@example.com ").valid);
    }

    #[test]
    fn phone_examples() {
        assert!(validate_phone("1234567").valid);
        assert!(!validate_phone("123-4567").valid);
        assert!(!validate_phone("12345678901234567").valid);
        assert!(validate_phone(" 1234567 ").valid);
    }

    #[test]
    fn password_requires_every_class() {
        assert!(validate_password("Aa1!aaaa").valid);
        assert!(!validate_password("Aa1!aaa").valid, "too short");
        assert!(!validate_password("AA1!AAAA").valid, "no lowercase");
        assert!(!validate_password("aa1!aaaa").valid, "no uppercase");
        assert!(!validate_password("Aa!!aaaa").valid, "no digit");
        assert!(!validate_password("Aa11aaaa").valid, "no special");
    }

    #[test]
    fn password_is_not_trimmed() {
        // The surrounding spaces supply the special character and the length.
        assert!(!validate_password(" Abc12 ").valid);
        assert!(validate_password(" Abcd12 ").valid);
    }

    #[test]
    fn confirm_examples() {
        assert!(confirm_valid("Abc123!!", "Abc123!!"));
        assert!(!confirm_valid("Abc123!!", "Abc123!"));
        assert!(!confirm_valid("Abc123!!", ""));
        assert!(!confirm_valid("", ""));
    }

    #[test]
    fn terms_follow_flag() {
        assert!(validate_terms(true).valid);
        assert_eq!(validate_terms(false).message, TERMS_MESSAGE);
    }

    #[test]
    fn valid_result_has_empty_message() {
        let result = validate_email("jane@example.com");
        assert_eq!(result.message, "");
        assert!(result.failure().is_none());
    }

    #[test]
    fn invalid_result_carries_fixed_message() {
        let result = validate_phone("abc");
        assert_eq!(result.message, PHONE_MESSAGE);

        let failure = result.failure().unwrap();
        assert_eq!(failure.field, Field::Phone);
        assert_eq!(
            failure.to_string(),
            "phone: Phone must be 7–15 digits (numbers only)."
        );
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_str(field.as_str()), Some(field));
        }
        assert_eq!(Field::from_str("age"), None);
    }
}
