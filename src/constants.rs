//! Global constants used throughout the pkgcrate codebase.
//!
//! Registry endpoints, default file locations, and other values that are
//! shared between the CLI layer and the library.

/// Base URL of the public crates.io registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io";

/// Path prefix of the per-crate metadata endpoint, relative to the registry base URL.
///
/// The full request URL is `{registry}{CRATES_API_PATH}/{name}`.
pub const CRATES_API_PATH: &str = "/api/v1/crates";

/// Environment variable that overrides the registry base URL.
pub const REGISTRY_ENV_VAR: &str = "PKGCRATE_REGISTRY";

/// Default location of the package list.
pub const DEFAULT_CONFIG_FILE: &str = "packages.yaml";

/// Default location of the recipe template.
pub const DEFAULT_TEMPLATE_FILE: &str = "template/PKGBUILD";

/// Default directory that receives one sub-directory per package.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Recipe file name used when the template path has no file name.
pub const DEFAULT_RECIPE_FILE: &str = "PKGBUILD";

/// Prefix attached to license expressions that are not on the allow-list.
pub const CUSTOM_LICENSE_PREFIX: &str = "custom:";

/// `User-Agent` sent with every registry request.
///
/// crates.io rejects requests that do not identify the client.
pub fn user_agent() -> String {
    format!("pkgcrate/{} (+https://crates.io/crates/pkgcrate)", env!("CARGO_PKG_VERSION"))
}
