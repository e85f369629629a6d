//! Implementation of the `formgate log` command.

use crate::cli::LogArgs;
use crate::context::StateContext;
use crate::error::Result;
use crate::events::{Event, read_events};
use chrono::SecondsFormat;

pub fn cmd_log(ctx: &StateContext, args: LogArgs) -> Result<()> {
    let events = read_events(ctx)?;
    if events.is_empty() {
        println!("No events recorded.");
        return Ok(());
    }

    for event in tail(&events, args.tail) {
        println!("{}", format_event(event));
    }
    Ok(())
}

/// The last `n` events, or all of them when `n` is zero.
fn tail(events: &[Event], n: usize) -> &[Event] {
    if n == 0 {
        events
    } else {
        &events[events.len().saturating_sub(n)..]
    }
}

fn format_event(event: &Event) -> String {
    format!(
        "{}  {:<16} {:<8} {} {}",
        event.ts.to_rfc3339_opts(SecondsFormat::Secs, true),
        event.action.to_string(),
        event.field.map(|f| f.as_str()).unwrap_or("-"),
        event.actor,
        event.details
    )
}
