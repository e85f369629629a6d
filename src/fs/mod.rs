//! Filesystem utilities for formgate.
//!
//! State files (preferences, clipboard) are always written atomically.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
