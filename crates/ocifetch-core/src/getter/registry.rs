//! Getter backed by an OCI registry client.
//!
//! `get` runs pull, load and serialize in order and stops at the first
//! failing stage. Nothing is retried here and no partial buffer escapes.

use url::Url;

use crate::client::{ArchiveFormat, RegistryClient};
use crate::error::GetError;
use crate::getter::{ChartResponse, Getter};
use crate::reference::Reference;
use crate::url_model::{self, DEFAULT_ARCHIVE_EXTENSION};

/// Registry getter. Holds its collaborators and no mutable state.
#[derive(Debug, Clone)]
pub struct RegistryGetter<C, A> {
    client: C,
    archive: A,
    extension: String,
}

impl<C, A> RegistryGetter<C, A>
where
    C: RegistryClient,
    A: ArchiveFormat,
{
    pub fn new(client: C, archive: A) -> Self {
        RegistryGetter {
            client,
            archive,
            extension: DEFAULT_ARCHIVE_EXTENSION.to_string(),
        }
    }

    /// Sets the extension used for derived filenames (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolves `url` to a reference and runs pull, load and serialize.
    pub fn get_url(&self, url: &Url) -> Result<Vec<u8>, GetError> {
        // Without a path the host alone would parse as a repository.
        if url.path().trim_matches('/').is_empty() {
            return Err(GetError::invalid_reference(
                url.as_str(),
                "missing repository path",
            ));
        }
        // Trailing `/` is ignored, as in `reconcile` and the filename.
        let reference = Reference::parse(url_model::host_and_path(url).trim_end_matches('/'))?;
        let label = reference.to_string();

        tracing::debug!(reference = %label, "pulling");
        self.client.pull(&reference).map_err(|source| {
            tracing::warn!(reference = %label, error = %source, "pull failed");
            GetError::PullFailed {
                reference: label.clone(),
                source,
            }
        })?;

        tracing::debug!(reference = %label, "loading");
        let package = self.client.load(&reference).map_err(|source| {
            tracing::warn!(reference = %label, error = %source, "load failed");
            GetError::LoadFailed {
                reference: label.clone(),
                source,
            }
        })?;

        let mut buf = Vec::new();
        self.archive.write(&package, &mut buf).map_err(|source| {
            tracing::warn!(reference = %label, error = %source, "serialize failed");
            GetError::SerializeFailed {
                reference: label.clone(),
                source,
            }
        })?;
        tracing::debug!(reference = %label, bytes = buf.len(), "serialized");

        Ok(buf)
    }
}

impl<C, A> Getter for RegistryGetter<C, A>
where
    C: RegistryClient,
    A: ArchiveFormat,
{
    fn get(&self, href: &str) -> Result<Vec<u8>, GetError> {
        let url = Url::parse(href).map_err(|e| GetError::invalid_reference(href, e.to_string()))?;
        self.get_url(&url)
    }

    fn get_with_details(&self, url: &Url, version: &str) -> Result<ChartResponse, GetError> {
        let tagged = url_model::reconcile(url, version)?;
        let content = self.get_url(&tagged)?;

        // Name after the chart's declared version; the tag may be an alias.
        let package = self
            .archive
            .load_archive(&content)
            .map_err(|source| GetError::InvalidArchive {
                reason: "cannot read retrieved archive".to_string(),
                source: Some(source),
            })?;
        let canonical = package.version();
        if canonical.is_empty() {
            return Err(GetError::InvalidArchive {
                reason: format!("chart {:?} declares no version", package.name()),
                source: None,
            });
        }

        let filename = url_model::filename_with_extension(&tagged, canonical, &self.extension);
        tracing::info!(url = %tagged, %filename, bytes = content.len(), "retrieved chart");

        Ok(ChartResponse { content, filename })
    }
}
