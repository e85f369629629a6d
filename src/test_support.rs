use crate::context::StateContext;
use crate::validate::FormValues;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A temporary directory with a state context rooted inside it.
pub(crate) fn temp_state() -> (TempDir, StateContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = StateContext::resolve_from(temp_dir.path(), None);
    (temp_dir, ctx)
}

/// A sign-up form where every field passes.
pub(crate) fn valid_form() -> FormValues {
    FormValues {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "5551234567".to_string(),
        password: "Abc123!!".to_string(),
        confirm: "Abc123!!".to_string(),
        terms: true,
    }
}
