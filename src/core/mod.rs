//! Core types for pkgcrate
//!
//! Holds the error types shared by every other module:
//! - [`PkgcrateError`] - enumerated failure modes of the library
//! - [`ErrorContext`] - user-facing wrapper with suggestions and details
//! - [`user_friendly_error`] - converts any [`anyhow::Error`] for CLI display
//!
//! Library code returns [`Result`], CLI commands return [`anyhow::Result`] and attach
//! context with [`anyhow::Context`].

pub mod error;

pub use error::{ErrorContext, PkgcrateError, user_friendly_error};

/// Result alias used by the library modules.
pub type Result<T> = std::result::Result<T, PkgcrateError>;
