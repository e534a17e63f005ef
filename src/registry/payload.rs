//! Registry metadata payload and the fields derived from it.

use serde::Deserialize;
use tracing::debug;

use crate::core::{PkgcrateError, Result};
use crate::license;

/// One published version of a crate as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRecord {
    /// Version number, e.g. `1.2.0`.
    pub num: String,
    /// Raw license expression recorded for this version.
    #[serde(default)]
    pub license: Option<String>,
    /// Whether the version was yanked from the registry.
    #[serde(default)]
    pub yanked: bool,
}

/// Metadata for one crate, fetched once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPayload {
    /// Version the registry reports as the latest stable release.
    pub latest_stable_version: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub documentation: Option<String>,
    /// Version history in registry order.
    pub versions: Vec<VersionRecord>,
}

/// Description, url, version and license of a crate, as rendered into recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptiveInfo {
    pub description: String,
    pub url: String,
    pub version: String,
    pub license: Vec<String>,
}

#[derive(Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
    versions: Vec<VersionRecord>,
}

#[derive(Deserialize)]
struct CrateInfo {
    #[serde(default)]
    max_stable_version: Option<String>,
    #[serde(default)]
    max_version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    documentation: Option<String>,
}

impl RegistryPayload {
    /// Parse a `GET /api/v1/crates/{name}` response body.
    ///
    /// The stable version is `crate.max_stable_version`. When the registry leaves it
    /// out, the highest non-yanked, non-pre-release entry of `versions` is used, then
    /// `crate.max_version`.
    ///
    /// # Errors
    ///
    /// [`PkgcrateError::MalformedPayloadError`] if the body is not the expected JSON
    /// shape or no version can be determined.
    pub fn from_json(package: &str, body: &[u8]) -> Result<Self> {
        let response: CrateResponse =
            serde_json::from_slice(body).map_err(|e| PkgcrateError::MalformedPayloadError {
                package: package.to_string(),
                reason: e.to_string(),
            })?;

        let CrateResponse {
            krate,
            versions,
        } = response;

        let latest_stable_version = non_empty(krate.max_stable_version)
            .or_else(|| {
                let computed = highest_stable(&versions);
                if let Some(version) = &computed {
                    debug!("{package}: no max_stable_version, using highest stable {version}");
                }
                computed
            })
            .or_else(|| non_empty(krate.max_version))
            .ok_or_else(|| PkgcrateError::MalformedPayloadError {
                package: package.to_string(),
                reason: "no stable version reported and none found in version list".to_string(),
            })?;

        Ok(Self {
            latest_stable_version,
            description: krate.description,
            homepage: krate.homepage,
            repository: krate.repository,
            documentation: krate.documentation,
            versions,
        })
    }

    /// The registry-reported latest stable version.
    ///
    /// Returned even when no `versions` entry carries this number.
    pub fn latest_version(&self) -> &str {
        &self.latest_stable_version
    }

    /// The version-history entry for [`latest_version`](Self::latest_version), if listed.
    pub fn latest_record(&self) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.num == self.latest_stable_version)
    }

    /// Raw license expression of the latest stable version.
    pub fn raw_license(&self) -> Option<&str> {
        self.latest_record().and_then(|v| v.license.as_deref())
    }

    /// Canonical license tokens of the latest stable version.
    ///
    /// Empty when the version is not listed or has no license recorded.
    pub fn license(&self) -> Vec<String> {
        self.raw_license().map(license::normalize).unwrap_or_default()
    }

    /// Description, or an empty string.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// First non-empty of homepage, repository and documentation, or an empty string.
    pub fn url(&self) -> &str {
        [&self.homepage, &self.repository, &self.documentation]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|url| !url.is_empty())
            .unwrap_or("")
    }

    pub fn descriptive_info(&self) -> DescriptiveInfo {
        DescriptiveInfo {
            description: self.description().to_string(),
            url: self.url().to_string(),
            version: self.latest_version().to_string(),
            license: self.license(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Highest non-yanked release without a pre-release tag, by semver ordering.
fn highest_stable(versions: &[VersionRecord]) -> Option<String> {
    versions
        .iter()
        .filter(|v| !v.yanked)
        .filter_map(|v| semver::Version::parse(&v.num).ok().map(|parsed| (parsed, &v.num)))
        .filter(|(parsed, _)| parsed.pre.is_empty())
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, num)| num.clone())
}
