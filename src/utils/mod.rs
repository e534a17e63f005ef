//! Utilities shared by the recipe writer and the CLI.
//!
//! - [`fs`] - directory creation and atomic file writes
//! - [`shell`] - POSIX shell quoting of substituted values

pub mod fs;
pub mod shell;

pub use fs::{atomic_write, ensure_dir};
