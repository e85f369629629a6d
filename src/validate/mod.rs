//! Form validation engine.
//!
//! Pure functions over the current field values:
//! - Rules: compiled regexes and character-class checks
//! - Fields: one validator per input, returning validity plus a message
//! - Strength: five-criteria password score with a Weak/Medium/Strong tier
//! - Gate: the conjunction of every field, deciding whether submit is allowed
//!
//! Nothing here holds state between calls.

pub mod fields;
pub mod gate;
pub mod rules;
pub mod strength;
pub mod values;

pub use fields::{
    Field, ValidationFailure, ValidationResult, confirm_valid, validate_confirm, validate_email,
    validate_name, validate_password, validate_phone, validate_terms,
};
pub use gate::{compute_submit_gate, failures, validate_all, validate_field};
pub use strength::{Criteria, PasswordStrength, Tier, compute_strength};
pub use values::FormValues;
