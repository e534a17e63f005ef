use std::error::Error as StdError;
use tracing::debug;

use super::{RegistryPayload, RegistrySource};
use crate::constants::{CRATES_API_PATH, DEFAULT_REGISTRY_URL, user_agent};
use crate::core::{PkgcrateError, Result};

/// [`RegistrySource`] backed by a crates.io compatible HTTP API.
///
/// Each call to [`fetch_crate`](RegistrySource::fetch_crate) issues exactly one
/// `GET {base_url}/api/v1/crates/{name}`. Caching is the caller's business, see
/// [`Package`](crate::package::Package).
///
/// # Examples
///
/// ```rust,no_run
/// use pkgcrate::registry::{HttpRegistry, RegistrySource};
///
/// # async fn example() -> anyhow::Result<()> {
/// let registry = HttpRegistry::new("https://crates.io")?;
/// let payload = registry.fetch_crate("ripgrep").await?;
/// println!("ripgrep {}", payload.latest_version());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistry {
    /// Create a client for the registry at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PkgcrateError::Other`] if the HTTP client cannot be built (e.g. the
    /// TLS backend fails to initialise).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent()).build().map_err(|e| {
            PkgcrateError::Other {
                message: format!("Failed to create HTTP client: {}", error_chain(&e)),
            }
        })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Metadata endpoint for `name`.
    pub fn crate_url(&self, name: &str) -> String {
        format!("{}{}/{}", self.base_url, CRATES_API_PATH, name)
    }
}

impl Default for HttpRegistry {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

impl RegistrySource for HttpRegistry {
    async fn fetch_crate(&self, name: &str) -> Result<RegistryPayload> {
        let url = self.crate_url(name);
        debug!("Fetching registry metadata for {} from {}", name, url);

        let fetch_error = |reason: String| PkgcrateError::RegistryFetchError {
            package: name.to_string(),
            reason,
        };

        let response =
            self.client.get(&url).send().await.map_err(|e| fetch_error(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status} from {url}")));
        }

        let body = response.bytes().await.map_err(|e| fetch_error(error_chain(&e)))?;
        debug!("Fetched {} bytes of metadata for {}", body.len(), name);

        RegistryPayload::from_json(name, &body)
    }
}

/// Render an error with all of its sources, `outer: inner: root`.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
