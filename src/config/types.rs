//! Configuration defaults for formgate.
//!
//! Default value functions used by serde when a key is missing from
//! `config.yaml`.

use crate::ui::Theme;

pub(crate) fn default_theme() -> Theme {
    Theme::Light
}
pub(crate) fn default_counter_step() -> i64 {
    1
}
pub(crate) fn default_counter_shift_step() -> i64 {
    5
}
pub(crate) fn default_counter_random_max() -> i64 {
    100
}
pub(crate) fn default_toast_duration_ms() -> u64 {
    1800
}
pub(crate) fn default_true() -> bool {
    true
}

/// Default tab panel ids, one per section of the page.
pub fn default_tabs() -> Vec<String> {
    vec![
        "events".to_string(),
        "interactive".to_string(),
        "form".to_string(),
    ]
}
