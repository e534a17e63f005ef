//! Fixture builders for registry payloads and package lists.

use serde_json::{Value, json};

use crate::registry::{RegistryPayload, VersionRecord};

/// A payload whose stable version is `stable`, listing `versions` as `(num, license)`.
///
/// Descriptive fields are left empty; set them on the returned value as needed.
pub fn payload(stable: &str, versions: &[(&str, Option<&str>)]) -> RegistryPayload {
    RegistryPayload {
        latest_stable_version: stable.to_string(),
        description: None,
        homepage: None,
        repository: None,
        documentation: None,
        versions: versions
            .iter()
            .map(|(num, license)| VersionRecord {
                num: (*num).to_string(),
                license: license.map(str::to_string),
                yanked: false,
            })
            .collect(),
    }
}

/// A crates.io `GET /api/v1/crates/{name}` response body.
pub fn crate_response(
    name: &str,
    stable: &str,
    license: &str,
    description: Option<&str>,
    repository: Option<&str>,
) -> Value {
    json!({
        "crate": {
            "id": name,
            "name": name,
            "max_stable_version": stable,
            "max_version": stable,
            "newest_version": stable,
            "description": description,
            "homepage": null,
            "repository": repository,
            "documentation": null
        },
        "versions": [
            {
                "crate": name,
                "num": stable,
                "license": license,
                "yanked": false
            }
        ],
        "keywords": [],
        "categories": []
    })
}

/// Package list with one default-binary and one multi-binary entry.
pub const PACKAGES_YAML: &str = "foo:\nbar: [bar1, bar2]\n";

/// A PKGBUILD template using every substitution token.
pub const PKGBUILD_TEMPLATE: &str = "\
pkgname=CRATE
pkgver=VERSION
pkgdesc=DESCRIPTION
url=URL
license=(LICENSE)
_binaries=(BINARIES)
";
