//! Error handling for pkgcrate
//!
//! This module provides the error types and user-facing error reporting for
//! pkgcrate. The error system follows two rules:
//! 1. **Strongly-typed errors** ([`PkgcrateError`]) for precise handling inside the library
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions for the CLI
//!
//! # Error Categories
//!
//! - **Configuration**: [`PkgcrateError::ConfigError`], [`PkgcrateError::InvalidPackageEntry`],
//!   [`PkgcrateError::ConfigNotFound`]. Raised before any network activity.
//! - **Registry**: [`PkgcrateError::RegistryFetchError`] for transport failures and non-success
//!   HTTP statuses, [`PkgcrateError::MalformedPayloadError`] for bodies that do not match the
//!   expected JSON shape.
//! - **Output**: [`PkgcrateError::TemplateNotFound`], [`PkgcrateError::FileSystemError`].
//!
//! None of these errors is recovered locally. Either every package resolves and is written,
//! or the run aborts and the CLI exits with a non-zero status.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pkgcrate::core::{PkgcrateError, user_friendly_error};
//!
//! let error = PkgcrateError::RegistryFetchError {
//!     package: "ripgrep".to_string(),
//!     reason: "HTTP 404 Not Found".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // colored error, details and suggestion on stderr
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for pkgcrate operations
///
/// Every variant carries enough context (package name, file path, underlying reason) to
/// identify what failed without consulting logs.
#[derive(Error, Debug, Clone)]
pub enum PkgcrateError {
    /// Configuration error
    ///
    /// The package list could not be decoded, e.g. its top level is not a mapping.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// A single package entry in the configuration is malformed
    ///
    /// The per-entry form of [`PkgcrateError::ConfigError`]: raised when a package's
    /// binaries field is neither `null` nor a sequence of non-empty strings.
    #[error("Invalid configuration for package '{name}': {reason}")]
    InvalidPackageEntry {
        /// Name of the package whose entry is invalid
        name: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// Config file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the configuration file that was not found
        path: String,
    },

    /// Registry request failed
    ///
    /// Covers transport failures (DNS, TLS, connection reset) and any non-2xx HTTP
    /// status. Not retried.
    ///
    /// # Fields
    /// - `package`: The package whose metadata was being fetched
    /// - `reason`: The underlying cause, including the HTTP status when there is one
    #[error("Failed to fetch registry metadata for '{package}': {reason}")]
    RegistryFetchError {
        /// The package whose metadata was being fetched
        package: String,
        /// The underlying cause of the failure
        reason: String,
    },

    /// Registry response body does not match the expected shape
    #[error("Malformed registry metadata for '{package}': {reason}")]
    MalformedPayloadError {
        /// The package whose metadata could not be parsed
        package: String,
        /// Parser error or description of the missing field
        reason: String,
    },

    /// Recipe template not found
    #[error("Recipe template not found: {path}")]
    TemplateNotFound {
        /// Path to the template that was not found
        path: String,
    },

    /// File system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// The path where the file system error occurred
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl PkgcrateError {
    /// Name of the package this error is attributed to, if any.
    pub fn package(&self) -> Option<&str> {
        match self {
            Self::InvalidPackageEntry {
                name, ..
            } => Some(name),
            Self::RegistryFetchError {
                package, ..
            }
            | Self::MalformedPayloadError {
                package, ..
            } => Some(package),
            _ => None,
        }
    }
}

/// Error wrapper that adds a user-friendly suggestion and details to a [`PkgcrateError`]
///
/// # Examples
///
/// ```rust,no_run
/// use pkgcrate::core::{ErrorContext, PkgcrateError};
///
/// let context = ErrorContext::new(PkgcrateError::ConfigNotFound {
///     path: "packages.yaml".to_string(),
/// })
/// .with_suggestion("Create packages.yaml or pass --config")
/// .with_details("pkgcrate reads the package list before contacting the registry");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying pkgcrate error
    pub error: PkgcrateError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: PkgcrateError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error. Displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error. Displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes:
/// - [`PkgcrateError`] variants anywhere in the error chain, with tailored suggestions
/// - [`std::io::Error`] with filesystem-specific guidance
/// - [`serde_yaml::Error`] with YAML syntax help
/// - Anything else, rendered with its full cause chain
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // The error itself or a PkgcrateError used as context
    if let Some(pkg_error) = error.downcast_ref::<PkgcrateError>() {
        return create_error_context(pkg_error.clone());
    }

    // Commands wrap library errors in `.context(...)`, so look through the whole chain
    if let Some(pkg_error) = error.chain().find_map(|e| e.downcast_ref::<PkgcrateError>()) {
        return create_error_context(pkg_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(PkgcrateError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check ownership and permissions of the output directory")
                .with_details("pkgcrate could not read or write one of its files");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(PkgcrateError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details("A required file or directory could not be found");
            }
            _ => {}
        }
    }

    if let Some(yaml_error) = error.chain().find_map(|e| e.downcast_ref::<serde_yaml::Error>()) {
        return ErrorContext::new(PkgcrateError::ConfigError {
            message: yaml_error.to_string(),
        })
        .with_suggestion(
            "Check the YAML syntax of the package list. Each entry is `name:` or `name: [bin1, bin2]`",
        )
        .with_details("YAML errors are usually caused by bad indentation or unbalanced brackets");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(PkgcrateError::Other {
        message,
    })
}

/// Map each [`PkgcrateError`] variant to an [`ErrorContext`] with tailored suggestions.
fn create_error_context(error: PkgcrateError) -> ErrorContext {
    match &error {
        PkgcrateError::ConfigNotFound { path } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Create {path} or point pkgcrate at your package list with --config"
            ))
            .with_details("The package list is read before any registry request is made"),

        PkgcrateError::ConfigError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("The package list must be a mapping from crate name to null or a list of binary names")
            .with_details("Example:\n  ripgrep:\n  fd-find: [fd]"),

        PkgcrateError::InvalidPackageEntry { name, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Set '{name}' to null (one binary named '{name}') or to a list of binary names"
            ))
            .with_details("Binary names must be non-empty strings"),

        PkgcrateError::RegistryFetchError { package, reason } => {
            let suggestion = if reason.contains("404") {
                format!("Check that '{package}' is published on the registry and spelled correctly")
            } else if reason.contains("403") || reason.contains("429") {
                "The registry refused the request. Wait a moment and run pkgcrate again".to_string()
            } else {
                "Check your internet connection and the --registry URL".to_string()
            };
            ErrorContext::new(error.clone())
                .with_suggestion(suggestion)
                .with_details("Registry failures are not retried; no recipe was written for any package")
        }

        PkgcrateError::MalformedPayloadError { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Verify that --registry points at a crates.io compatible API")
            .with_details("The registry answered, but the JSON body is missing fields pkgcrate needs"),

        PkgcrateError::TemplateNotFound { path } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Create the template at {path} or pass --template"))
            .with_details("Templates are plain text; CRATE, VERSION, BINARIES, DESCRIPTION, URL and LICENSE are substituted"),

        PkgcrateError::FileSystemError { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Check that {path} is writable"))
            .with_details("Recipes are written to <output>/<crate>/<recipe file>"),

        _ => ErrorContext::new(error.clone()),
    }
}
