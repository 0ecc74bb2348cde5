//! Error kinds surfaced by the registry getter.

use thiserror::Error;

/// Opaque error produced by an injected collaborator (registry client,
/// archive writer or loader). Kept as the `source()` of [`GetError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GetError {
    /// Malformed URL, host/path, or tag. Detected before any I/O.
    #[error("invalid reference {input:?}: {reason}")]
    InvalidReference { input: String, reason: String },

    /// Neither a URL tag nor an explicit version was supplied.
    #[error("no version or tag provided")]
    MissingVersion,

    /// Registry client failed to make the artifact available locally.
    #[error("pull {reference}: {source}")]
    PullFailed {
        reference: String,
        #[source]
        source: BoxError,
    },

    /// Registry client failed to materialize a pulled artifact.
    #[error("load {reference}: {source}")]
    LoadFailed {
        reference: String,
        #[source]
        source: BoxError,
    },

    /// Writing the canonical archive failed.
    #[error("serialize {reference}: {source}")]
    SerializeFailed {
        reference: String,
        #[source]
        source: BoxError,
    },

    /// Retrieved bytes could not be read back, or carry no version.
    #[error("invalid archive: {reason}")]
    InvalidArchive {
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    /// No provider is registered for the URL scheme.
    #[error("scheme {0:?} not supported")]
    UnsupportedScheme(String),
}

impl GetError {
    pub(crate) fn invalid_reference(input: &str, reason: impl Into<String>) -> Self {
        GetError::InvalidReference {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
