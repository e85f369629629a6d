//! State directory resolution for formgate.
//!
//! Every command that reads or writes state goes through [`StateContext`] so
//! the layout of the state directory is defined in one place:
//!
//! ```text
//! <state-dir>/
//!   config.yaml
//!   prefs.json
//!   clipboard.txt
//!   events/events.ndjson
//! ```

use crate::config::Config;
use crate::error::{FormgateError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default state directory, relative to the working directory.
pub const DEFAULT_STATE_DIR: &str = ".formgate";

/// Resolved absolute paths for one state directory.
#[derive(Debug, Clone)]
pub struct StateContext {
    pub state_dir: PathBuf,
}

impl StateContext {
    /// Resolve the state directory: an explicit path wins, otherwise
    /// `.formgate` under the current working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            FormgateError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::resolve_from(&cwd, explicit))
    }

    /// Resolve relative to a known directory. Useful for tests.
    pub fn resolve_from(cwd: &Path, explicit: Option<&Path>) -> Self {
        let state_dir = match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULT_STATE_DIR),
        };
        Self { state_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    pub fn prefs_path(&self) -> PathBuf {
        self.state_dir.join("prefs.json")
    }

    pub fn clipboard_path(&self) -> PathBuf {
        self.state_dir.join("clipboard.txt")
    }

    pub fn events_dir(&self) -> PathBuf {
        self.state_dir.join("events")
    }

    pub fn exists(&self) -> bool {
        self.state_dir.is_dir()
    }

    /// Load `config.yaml`, or defaults when the state directory has none yet.
    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_default(self.config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn default_layout_under_cwd() {
        let ctx = StateContext::resolve_from(Path::new("/work"), None);

        assert_eq!(ctx.state_dir, Path::new("/work/.formgate"));
        assert_eq!(ctx.config_path(), Path::new("/work/.formgate/config.yaml"));
        assert_eq!(ctx.prefs_path(), Path::new("/work/.formgate/prefs.json"));
        assert_eq!(ctx.clipboard_path(), Path::new("/work/.formgate/clipboard.txt"));
        assert_eq!(ctx.events_dir(), Path::new("/work/.formgate/events"));
    }

    #[test]
    fn explicit_relative_dir_is_joined() {
        let ctx = StateContext::resolve_from(Path::new("/work"), Some(Path::new("state")));
        assert_eq!(ctx.state_dir, Path::new("/work/state"));
    }

    #[test]
    fn explicit_absolute_dir_is_used_as_is() {
        let ctx = StateContext::resolve_from(Path::new("/work"), Some(Path::new("/var/fg")));
        assert_eq!(ctx.state_dir, Path::new("/var/fg"));
    }

    #[test]
    #[serial]
    fn resolve_uses_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = StateContext::resolve(None).unwrap();

        assert!(ctx.state_dir.ends_with(DEFAULT_STATE_DIR));
        assert!(!ctx.exists());
    }

    #[test]
    fn missing_config_loads_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = StateContext::resolve_from(temp_dir.path(), None);

        let config = ctx.load_config().unwrap();
        assert_eq!(config.counter_step, 1);
    }

    #[test]
    fn broken_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = StateContext::resolve_from(temp_dir.path(), None);
        std::fs::create_dir_all(&ctx.state_dir).unwrap();
        std::fs::write(ctx.config_path(), "counter_step: 0\n").unwrap();

        assert!(ctx.load_config().is_err());
    }
}
