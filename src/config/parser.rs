//! Generic configuration parsing utilities.
//!
//! Reads a YAML file into any `DeserializeOwned` type, attaching the file path to
//! every error. A missing file is reported as [`PkgcrateError::ConfigNotFound`] so the
//! CLI can suggest `--config`.
//!
//! Example error output:
//! ```text
//! Failed to parse config file: /path/to/packages.yaml
//! Caused by:
//!     mapping values are not allowed in this context at line 2 column 8
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::PkgcrateError;

/// Parse a YAML configuration file into `T`.
///
/// # Errors
///
/// - [`PkgcrateError::ConfigNotFound`] if `path` does not exist
/// - an I/O error with path context if the file cannot be read
/// - a [`serde_yaml::Error`] with path context if the content does not deserialize
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if !path.exists() {
        return Err(PkgcrateError::ConfigNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
