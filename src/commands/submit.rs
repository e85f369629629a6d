//! Implementation of the `formgate submit` command.
//!
//! Runs one submit attempt over the given form. The attempt is logged as
//! `submit_accepted` or `submit_rejected` with the failing field names only.

use super::input::collect_values;
use super::print_json;
use crate::cli::SubmitArgs;
use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::events::{self, Event, EventAction};
use crate::form::{SUCCESS_MESSAGE, SubmitOutcome, submit};
use serde::Serialize;
use serde_json::json;

/// What the user would see after pressing submit.
#[derive(Debug, Serialize)]
struct SubmitReport<'a> {
    #[serde(flatten)]
    outcome: &'a SubmitOutcome,
    toast: &'static str,
    success_message: &'static str,
}

pub fn cmd_submit(ctx: &StateContext, args: SubmitArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let mut values = collect_values(&args.form)?;
    let outcome = submit(&mut values);

    let action = if outcome.is_accepted() {
        EventAction::SubmitAccepted
    } else {
        EventAction::SubmitRejected
    };
    events::record(
        ctx,
        config.log_events,
        Event::new(action).with_details(json!({ "failed_fields": outcome.failed_fields() })),
    );

    if args.json {
        print_json(&SubmitReport {
            outcome: &outcome,
            toast: outcome.toast_message(),
            success_message: if outcome.is_accepted() {
                SUCCESS_MESSAGE
            } else {
                ""
            },
        })?;
    }

    match &outcome {
        SubmitOutcome::Accepted => {
            if !args.json {
                println!("{}", SUCCESS_MESSAGE);
            }
            Ok(())
        }
        SubmitOutcome::Rejected { failures } => {
            if !args.json {
                println!("{}", outcome.toast_message());
                for failure in failures {
                    println!("  {}", failure);
                }
            }
            Err(FormgateError::ValidationError(format!(
                "submission rejected ({})",
                outcome.failed_fields().join(", ")
            )))
        }
    }
}
