//! Collaborator interfaces consumed by the registry getter.
//!
//! The getter only orchestrates: authenticated transfer, the local content
//! store, and the archive format all live behind these traits and are
//! injected at construction.

use std::io::Write;

use crate::error::BoxError;
use crate::package::Package;
use crate::reference::Reference;

/// Registry client backed by a local content store.
///
/// Implementations shared across threads must be `Send + Sync`; the getter
/// adds no locking of its own.
pub trait RegistryClient {
    /// Ensures the artifact is present in local storage, transferring it
    /// from the registry if needed.
    fn pull(&self, reference: &Reference) -> Result<(), BoxError>;

    /// Materializes a pulled artifact from local storage.
    fn load(&self, reference: &Reference) -> Result<Package, BoxError>;
}

/// Canonical chart archive format (tar + compression).
pub trait ArchiveFormat {
    /// Writes `package` as an archive to `sink`.
    fn write(&self, package: &Package, sink: &mut dyn Write) -> Result<(), BoxError>;

    /// Parses archive bytes back into a package.
    fn load_archive(&self, bytes: &[u8]) -> Result<Package, BoxError>;
}

impl<T: RegistryClient + ?Sized> RegistryClient for std::sync::Arc<T> {
    fn pull(&self, reference: &Reference) -> Result<(), BoxError> {
        (**self).pull(reference)
    }

    fn load(&self, reference: &Reference) -> Result<Package, BoxError> {
        (**self).load(reference)
    }
}

impl<T: ArchiveFormat + ?Sized> ArchiveFormat for std::sync::Arc<T> {
    fn write(&self, package: &Package, sink: &mut dyn Write) -> Result<(), BoxError> {
        (**self).write(package, sink)
    }

    fn load_archive(&self, bytes: &[u8]) -> Result<Package, BoxError> {
        (**self).load_archive(bytes)
    }
}
