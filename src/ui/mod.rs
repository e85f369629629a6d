//! Headless model of the demo page.
//!
//! The session holds every piece of page state (theme, counter, like button,
//! dropdown, modal, tabs, toast, copy box, focus) plus a live form session.
//! Events are routed through `dispatch`, which returns a snapshot after each
//! one. Persistence and the clipboard are collaborators behind traits.

mod clipboard;
mod counter;
mod dispatch;
mod session;
mod store;
mod theme;


pub use clipboard::{Clipboard, ClipboardError, FileClipboard, MemoryClipboard};
pub use counter::Counter;
pub use dispatch::{MenuAction, UiEvent, dispatch, parse_script};
pub use session::{Services, Toast, UiSession, UiSnapshot};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{THEME_KEY, Theme, load_theme, save_theme};
