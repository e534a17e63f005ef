//! Decoding of the package list.
//!
//! The package list is a YAML mapping from crate name to the binaries its recipe
//! installs:
//!
//! ```yaml
//! ripgrep:            # null: one binary named like the crate
//! fd-find: [fd]       # explicit binary names, in order
//! coreutils: [ls, cat, cp]
//! ```
//!
//! Entry order is preserved. Names are not deduplicated; a YAML mapping already
//! rejects duplicate keys. Names must be registry identifiers: ASCII letters, digits,
//! `-` and `_`.

use anyhow::Result;
use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, warn};

use super::parse_config;
use crate::core::PkgcrateError;
use crate::package::PackageSpec;

/// The binaries field of one package entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binaries {
    /// `null`: a single binary with the package's own name.
    Default,
    /// An explicit, ordered list of binary names.
    Explicit(Vec<String>),
}

impl Binaries {
    /// Decode the value of the entry for `name`.
    ///
    /// # Errors
    ///
    /// [`PkgcrateError::InvalidPackageEntry`] if `value` is neither null nor a sequence
    /// of non-empty strings.
    pub fn decode(name: &str, value: &Value) -> Result<Self, PkgcrateError> {
        let invalid = |reason: String| PkgcrateError::InvalidPackageEntry {
            name: name.to_string(),
            reason,
        };

        match value {
            Value::Null => Ok(Self::Default),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(binary) if !binary.is_empty() => Ok(binary.clone()),
                    Value::String(_) => Err(invalid(format!("binary #{} is an empty string", index + 1))),
                    other => Err(invalid(format!(
                        "binary #{} must be a string, found {}",
                        index + 1,
                        kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Explicit),
            other => Err(invalid(format!(
                "expected null or a sequence of binary names, found {}",
                kind(other)
            ))),
        }
    }

    /// Binary names for the package `name`.
    pub fn into_names(self, name: &str) -> Vec<String> {
        match self {
            Self::Default => vec![name.to_string()],
            Self::Explicit(names) => names,
        }
    }
}

/// Decode a parsed package list into specs, in document order.
///
/// A document with no entries at all (an empty file) yields no specs.
///
/// # Errors
///
/// - [`PkgcrateError::ConfigError`] if the top level is not a mapping or a key is not
///   a registry identifier
/// - [`PkgcrateError::InvalidPackageEntry`] if an entry's binaries are malformed
pub fn decode_package_list(document: &Value) -> Result<Vec<PackageSpec>, PkgcrateError> {
    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => {
            warn!("Package list is empty");
            return Ok(Vec::new());
        }
        other => {
            return Err(PkgcrateError::ConfigError {
                message: format!(
                    "package list must be a mapping of crate names, found {}",
                    kind(other)
                ),
            });
        }
    };

    mapping
        .iter()
        .map(|(key, value)| -> Result<PackageSpec, PkgcrateError> {
            let name = match key {
                Value::String(name) if is_valid_crate_name(name) => name,
                Value::String(name) if name.is_empty() => {
                    return Err(PkgcrateError::ConfigError {
                        message: "package name must not be empty".to_string(),
                    });
                }
                Value::String(name) => {
                    return Err(PkgcrateError::ConfigError {
                        message: format!(
                            "package name '{name}' may only contain ASCII letters, digits, '-' and '_'"
                        ),
                    });
                }
                other => {
                    return Err(PkgcrateError::ConfigError {
                        message: format!("package name must be a string, found {}", kind(other)),
                    });
                }
            };

            let binaries = Binaries::decode(name, value)?.into_names(name);
            debug!("Configured package {} with binaries {:?}", name, binaries);
            Ok(PackageSpec::new(name.clone(), binaries))
        })
        .collect()
}

/// Parse package list text.
pub fn parse_package_list(content: &str) -> Result<Vec<PackageSpec>> {
    let document: Value = serde_yaml::from_str(content)?;
    Ok(decode_package_list(&document)?)
}

/// Read and decode the package list at `path`.
///
/// # Errors
///
/// [`PkgcrateError::ConfigNotFound`] if the file is missing, a YAML error if it does
/// not parse, or any error from [`decode_package_list`].
pub fn load_package_list(path: &Path) -> Result<Vec<PackageSpec>> {
    let document: Value = parse_config(path)?;
    let specs = decode_package_list(&document)?;
    debug!("Loaded {} packages from {}", specs.len(), path.display());
    Ok(specs)
}

/// Registry identifiers: non-empty ASCII alphanumerics, `-` and `_`.
fn is_valid_crate_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
