//! Config struct definition and default implementation.

use super::types::*;
use crate::ui::Theme;
use serde::{Deserialize, Serialize};

/// Configuration for a formgate state directory.
///
/// This struct represents the contents of `<state-dir>/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Theme
    // =========================================================================
    /// Theme used when the preference store has no saved theme.
    #[serde(default = "default_theme")]
    pub default_theme: Theme,

    // =========================================================================
    // Counter
    // =========================================================================
    /// Amount added or removed by a plain click.
    #[serde(default = "default_counter_step")]
    pub counter_step: i64,

    /// Amount added or removed by a shift-click.
    #[serde(default = "default_counter_shift_step")]
    pub counter_shift_step: i64,

    /// Inclusive upper bound of the randomize button (lower bound is 0).
    #[serde(default = "default_counter_random_max")]
    pub counter_random_max: i64,

    // =========================================================================
    // Presentation
    // =========================================================================
    /// How long a toast stays up, in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Tab panel ids in display order. The first one starts active.
    #[serde(default = "default_tabs")]
    pub tabs: Vec<String>,

    // =========================================================================
    // Logging
    // =========================================================================
    /// Whether commands append to `events/events.ndjson`.
    #[serde(default = "default_true")]
    pub log_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            counter_step: default_counter_step(),
            counter_shift_step: default_counter_shift_step(),
            counter_random_max: default_counter_random_max(),
            toast_duration_ms: default_toast_duration_ms(),
            tabs: default_tabs(),
            log_events: default_true(),
        }
    }
}
