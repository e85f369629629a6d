//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{FormgateError, Result};
use std::collections::BTreeSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(FormgateError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FormgateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            FormgateError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FormgateError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `counter_step` and `counter_shift_step` must be positive
    /// - `counter_random_max` must not be negative
    /// - `toast_duration_ms` must be positive
    /// - `tabs` must be non-empty, with non-empty unique ids
    pub fn validate(&self) -> Result<()> {
        if self.counter_step <= 0 {
            return Err(invalid("counter_step must be greater than 0"));
        }

        if self.counter_shift_step <= 0 {
            return Err(invalid("counter_shift_step must be greater than 0"));
        }

        if self.counter_random_max < 0 {
            return Err(invalid("counter_random_max must not be negative"));
        }

        if self.toast_duration_ms == 0 {
            return Err(invalid("toast_duration_ms must be greater than 0"));
        }

        if self.tabs.is_empty() {
            return Err(invalid("tabs must list at least one tab id"));
        }

        let mut seen = BTreeSet::new();
        for tab in &self.tabs {
            if tab.trim().is_empty() {
                return Err(invalid("tabs entries must be non-empty"));
            }
            if !seen.insert(tab.as_str()) {
                return Err(FormgateError::UserError(format!(
                    "config validation failed: duplicate tab id '{}'",
                    tab
                )));
            }
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> FormgateError {
    FormgateError::UserError(format!("config validation failed: {}", reason))
}
