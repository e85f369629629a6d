//! The current values of every form input.

use super::fields::Field;
use serde::{Deserialize, Serialize};

/// Snapshot of the form inputs.
///
/// Can be read from a YAML or JSON file; missing keys default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm: String,
    pub terms: bool,
}

impl FormValues {
    /// Current text of a free-text field. Returns `None` for the terms box.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Password => Some(&self.password),
            Field::Confirm => Some(&self.confirm),
            Field::Terms => None,
        }
    }

    /// Replace the text of a free-text field. Returns `false` for the terms box.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::Confirm => &mut self.confirm,
            Field::Terms => return false,
        };
        *slot = value.into();
        true
    }

    /// Overlay values that are set in `other` onto `self`.
    ///
    /// Empty strings and an unchecked terms box in `other` leave `self` as is.
    pub fn merge(&mut self, other: FormValues) {
        for field in Field::ALL {
            if let Some(text) = other.text(field)
                && !text.is_empty()
            {
                self.set_text(field, text.to_string());
            }
        }
        self.terms |= other.terms;
    }

    /// Clear every input back to its initial state.
    pub fn reset(&mut self) {
        *self = FormValues::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FormValues::default()
    }
}
