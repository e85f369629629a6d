//! Event logging subsystem for formgate.
//!
//! Append-only NDJSON log at `<state-dir>/events/events.ndjson`, one JSON
//! object per line:
//! - `ts`: RFC3339 timestamp
//! - `action`: what happened (check, gate, submit_accepted, ...)
//! - `actor`: `USER@HOST`
//! - `field`: optional field name for single-field events
//! - `details`: freeform object with action-specific details
//!
//! Field values are never logged. Details carry field names and validity only,
//! so a password can not end up on disk.

use crate::context::StateContext;
use crate::error::{FormgateError, Result};
use crate::validate::Field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// State directory created
    Init,
    /// Single field checked
    Check,
    /// Submit gate evaluated
    Gate,
    /// Submit attempt passed
    SubmitAccepted,
    /// Submit attempt failed
    SubmitRejected,
    /// Theme preference changed
    ThemeChange,
    /// Event script replayed
    Replay,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::Check => write!(f, "check"),
            EventAction::Gate => write!(f, "gate"),
            EventAction::SubmitAccepted => write!(f, "submit_accepted"),
            EventAction::SubmitRejected => write!(f, "submit_rejected"),
            EventAction::ThemeChange => write!(f, "theme_change"),
            EventAction::Replay => write!(f, "replay"),
        }
    }
}

/// An event record for the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            field: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            FormgateError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

pub fn events_file_path(ctx: &StateContext) -> PathBuf {
    ctx.events_dir().join("events.ndjson")
}

/// Append an event as one line to the log, creating the file if needed.
pub fn append_event(ctx: &StateContext, event: &Event) -> Result<()> {
    let events_file = events_file_path(ctx);
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    if !events_dir.exists() {
        fs::create_dir_all(&events_dir).map_err(|e| {
            FormgateError::UserError(format!(
                "failed to create events directory '{}': {}",
                events_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            FormgateError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        FormgateError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Append an event when logging is enabled, demoting failures to a warning.
///
/// A logging failure never changes the outcome of the command.
pub fn record(ctx: &StateContext, enabled: bool, event: Event) {
    if !enabled {
        return;
    }
    if let Err(e) = append_event(ctx, &event) {
        eprintln!("Warning: {}", e);
    }
}

/// Read every event from the log. A missing log reads as empty.
pub fn read_events(ctx: &StateContext) -> Result<Vec<Event>> {
    let events_file = events_file_path(ctx);
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        FormgateError::UserError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| {
                FormgateError::UserError(format!("failed to parse event line: {}", e))
            })
        })
        .collect()
}
