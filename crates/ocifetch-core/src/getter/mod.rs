//! Generic get-by-URL interface and its registry-backed implementation.

mod provider;
mod registry;

pub use provider::{registry_getter_provider, GetterFactory, Provider, Providers};
pub use registry::RegistryGetter;

use url::Url;

use crate::checksum;
use crate::error::GetError;

/// A retrieved archive and the filename it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartResponse {
    /// Canonical archive bytes.
    pub content: Vec<u8>,
    /// `<name>-<version>.<ext>`, named after the chart's own version.
    pub filename: String,
}

impl ChartResponse {
    /// Lowercase hex SHA-256 of `content`.
    pub fn sha256(&self) -> String {
        checksum::sha256_bytes(&self.content)
    }
}

/// Fetches archives by URL. Implemented per URL scheme.
pub trait Getter {
    /// Retrieves the archive addressed by `href`.
    fn get(&self, href: &str) -> Result<Vec<u8>, GetError>;

    /// Retrieves the archive for `url` at `version` and names it.
    ///
    /// A tag already present in `url` takes precedence over `version`.
    fn get_with_details(&self, url: &Url, version: &str) -> Result<ChartResponse, GetError>;
}
