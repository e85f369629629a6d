//! Whole-form validation and the submit gate.

use super::fields::{
    Field, ValidationFailure, ValidationResult, validate_confirm, validate_email, validate_name,
    validate_password, validate_phone, validate_terms,
};
use super::values::FormValues;

/// Validate one field against the current form values.
///
/// Confirm reads the password too, which is why this takes the whole form.
pub fn validate_field(field: Field, values: &FormValues) -> ValidationResult {
    match field {
        Field::Name => validate_name(&values.name),
        Field::Email => validate_email(&values.email),
        Field::Phone => validate_phone(&values.phone),
        Field::Password => validate_password(&values.password),
        Field::Confirm => validate_confirm(&values.password, &values.confirm),
        Field::Terms => validate_terms(values.terms),
    }
}

/// Validate every field, in form order.
pub fn validate_all(values: &FormValues) -> Vec<ValidationResult> {
    Field::ALL
        .iter()
        .map(|&field| validate_field(field, values))
        .collect()
}

/// Every failing field, in form order.
pub fn failures(values: &FormValues) -> Vec<ValidationFailure> {
    validate_all(values)
        .iter()
        .filter_map(ValidationResult::failure)
        .collect()
}

/// Is submission allowed? Recomputed from scratch on every call.
pub fn compute_submit_gate(values: &FormValues) -> bool {
    Field::ALL
        .iter()
        .all(|&field| validate_field(field, values).valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::valid_form;

    /// Break exactly one field of an otherwise valid form.
    fn break_field(values: &mut FormValues, field: Field) {
        match field {
            Field::Name => values.name = "J".to_string(),
            Field::Email => values.email = "jane@example".to_string(),
            Field::Phone => values.phone = "555-1234".to_string(),
            // Keep confirm in step so only the password itself fails.
            Field::Password => {
                values.password = "abc123!!".to_string();
                values.confirm = "abc123!!".to_string();
            }
            Field::Confirm => values.confirm = "Abc123!".to_string(),
            Field::Terms => values.terms = false,
        }
    }

    #[test]
    fn gate_open_when_everything_holds() {
        assert!(compute_submit_gate(&valid_form()));
        assert!(failures(&valid_form()).is_empty());
    }

    #[test]
    fn gate_closed_when_any_single_condition_fails() {
        for field in Field::ALL {
            let mut values = valid_form();
            break_field(&mut values, field);

            assert!(!compute_submit_gate(&values), "gate open with {field} broken");
            let failed: Vec<Field> = failures(&values).iter().map(|f| f.field).collect();
            assert_eq!(failed, vec![field]);
        }
    }

    #[test]
    fn gate_is_and_of_six_conditions() {
        // Enumerate every combination of the six conditions.
        for mask in 0u8..64 {
            let mut values = valid_form();
            for (bit, field) in Field::ALL.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    break_field(&mut values, *field);
                }
            }
            let expected_failures = failures(&values).len();
            assert_eq!(compute_submit_gate(&values), mask == 0, "mask {mask:06b}");
            assert_eq!(expected_failures == 0, mask == 0, "mask {mask:06b}");
        }
    }

    #[test]
    fn empty_form_fails_every_field() {
        let failed: Vec<Field> = failures(&FormValues::default())
            .iter()
            .map(|f| f.field)
            .collect();
        assert_eq!(failed, Field::ALL.to_vec());
    }

    #[test]
    fn confirm_follows_password_changes() {
        let mut values = valid_form();
        assert!(validate_field(Field::Confirm, &values).valid);

        values.password = "Xyz789??".to_string();
        assert!(!validate_field(Field::Confirm, &values).valid);

        values.confirm = "Xyz789??".to_string();
        assert!(validate_field(Field::Confirm, &values).valid);
    }

    #[test]
    fn validate_all_is_in_form_order() {
        let results = validate_all(&valid_form());
        let order: Vec<Field> = results.iter().map(|r| r.field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }
}
