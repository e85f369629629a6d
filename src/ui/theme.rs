//! Light/dark theme and its persisted preference.

use super::store::KeyValueStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preference key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a theme from its stored name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Text of the toggle button: it offers the other theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }

    /// The toggle button reads as pressed while dark mode is on.
    pub fn pressed(&self) -> bool {
        *self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the saved theme, falling back to `default` when nothing usable is stored.
pub fn load_theme(store: &dyn KeyValueStore, default: Theme) -> Result<Theme> {
    let saved = store.get(THEME_KEY)?;
    Ok(saved.as_deref().and_then(Theme::from_str).unwrap_or(default))
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::store::MemoryStore;

    #[test]
    fn toggle_flips_between_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn labels_offer_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }

    #[test]
    fn load_defaults_when_unset() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store, Theme::Light).unwrap(), Theme::Light);
        assert_eq!(load_theme(&store, Theme::Dark).unwrap(), Theme::Dark);
    }

    #[test]
    fn load_ignores_unknown_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store, Theme::Light).unwrap(), Theme::Light);
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store, Theme::Light).unwrap(), Theme::Dark);
    }
}
