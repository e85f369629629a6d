//! Implementation of the `formgate check` command.

use super::print_json;
use crate::cli::CheckArgs;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::validate::{Field, FormValues, ValidationResult, validate_field};
use serde_json::json;

pub fn cmd_check(ctx: &StateContext, args: CheckArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let result = check_field(&args)?;

    events::record(
        ctx,
        config.log_events,
        Event::new(EventAction::Check)
            .with_field(result.field)
            .with_details(json!({ "valid": result.valid })),
    );

    if args.json {
        print_json(&result)?;
    } else if result.valid {
        println!("{} is valid", result.field);
    }

    match result.failure() {
        None => Ok(()),
        Some(failure) => Err(FormgateError::ValidationError(failure.to_string())),
    }
}

/// Validate the one field named on the command line.
fn check_field(args: &CheckArgs) -> Result<ValidationResult> {
    let field = Field::from_str(&args.field).ok_or_else(|| {
        FormgateError::UserError(format!(
            "unknown field '{}' (expected one of: {})",
            args.field,
            Field::ALL.map(|f| f.as_str()).join(", ")
        ))
    })?;

    let mut values = FormValues::default();
    match field {
        Field::Terms => values.terms = args.accepted,
        Field::Confirm => {
            values.password = args.password.clone().unwrap_or_default();
            values.confirm = args.value.clone();
        }
        _ => {
            values.set_text(field, args.value.clone());
        }
    }

    Ok(validate_field(field, &values))
}
