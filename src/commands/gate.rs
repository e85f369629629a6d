//! Implementation of the `formgate gate` command.

use super::input::collect_values;
use super::print_json;
use crate::cli::GateArgs;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::validate::{
    FormValues, PasswordStrength, ValidationResult, compute_strength, compute_submit_gate,
    validate_all,
};
use serde::Serialize;
use serde_json::json;

/// Per-field verdicts plus the resulting submit gate.
#[derive(Debug, Serialize)]
struct GateReport {
    submit_allowed: bool,
    fields: Vec<ValidationResult>,
    strength: PasswordStrength,
}

impl GateReport {
    fn evaluate(values: &FormValues) -> Self {
        Self {
            submit_allowed: compute_submit_gate(values),
            fields: validate_all(values),
            strength: compute_strength(&values.password),
        }
    }

    fn blocking_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|r| !r.valid)
            .map(|r| r.field.as_str())
            .collect()
    }
}

pub fn cmd_gate(ctx: &StateContext, args: GateArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let values = collect_values(&args.form)?;
    let report = GateReport::evaluate(&values);
    let blocking = report.blocking_fields();

    events::record(
        ctx,
        config.log_events,
        Event::new(EventAction::Gate).with_details(json!({
            "submit_allowed": report.submit_allowed,
            "blocking_fields": blocking,
        })),
    );

    if args.json {
        print_json(&report)?;
    } else {
        print!("{}", render(&report));
    }

    if report.submit_allowed {
        Ok(())
    } else {
        Err(FormgateError::ValidationError(format!(
            "submit blocked by: {}",
            blocking.join(", ")
        )))
    }
}

fn render(report: &GateReport) -> String {
    let mut out = String::new();
    for result in &report.fields {
        if result.valid {
            out.push_str(&format!("  ✓ {}\n", result.field));
        } else {
            out.push_str(&format!("  ✗ {}: {}\n", result.field, result.message));
        }
    }
    out.push_str(&format!("{}\n", report.strength.label()));
    out.push_str(if report.submit_allowed {
        "Submit: enabled\n"
    } else {
        "Submit: disabled\n"
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FormArgs;
    use crate::events::read_events;
    use crate::test_support::{temp_state, valid_form};

    fn form_args(values: &FormValues) -> GateArgs {
        GateArgs {
            form: FormArgs {
                from: None,
                name: Some(values.name.clone()),
                email: Some(values.email.clone()),
                phone: Some(values.phone.clone()),
                password: Some(values.password.clone()),
                confirm: Some(values.confirm.clone()),
                terms: values.terms,
            },
            json: false,
        }
    }

    #[test]
    fn report_agrees_with_gate() {
        let mut values = valid_form();
        let report = GateReport::evaluate(&values);
        assert!(report.submit_allowed);
        assert!(report.blocking_fields().is_empty());

        values.terms = false;
        let report = GateReport::evaluate(&values);
        assert!(!report.submit_allowed);
        assert_eq!(report.blocking_fields(), vec!["terms"]);
    }

    #[test]
    fn render_marks_each_field() {
        let mut values = valid_form();
        values.phone = "123-4567".to_string();

        let text = render(&GateReport::evaluate(&values));

        assert!(text.contains("  ✓ name\n"));
        assert!(text.contains("  ✗ phone: Phone must be"));
        assert!(text.ends_with("Submit: disabled\n"));
    }

    #[test]
    fn complete_form_passes() {
        let (_temp_dir, ctx) = temp_state();
        cmd_gate(&ctx, form_args(&valid_form())).unwrap();
    }

    #[test]
    fn blocked_gate_is_validation_error() {
        let (_temp_dir, ctx) = temp_state();
        let mut values = valid_form();
        values.confirm = "Abc123!".to_string();

        let err = cmd_gate(&ctx, form_args(&values)).unwrap_err();

        assert!(matches!(err, FormgateError::ValidationError(_)));
        assert!(err.to_string().contains("submit blocked by: confirm"));
    }

    #[test]
    fn gate_event_lists_blocking_fields() {
        let (_temp_dir, ctx) = temp_state();

        let _ = cmd_gate(&ctx, form_args(&FormValues::default()));

        let events = read_events(&ctx).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Gate);
        assert_eq!(events[0].details["submit_allowed"], false);
        assert_eq!(events[0].details["blocking_fields"].as_array().unwrap().len(), 6);
    }
}
