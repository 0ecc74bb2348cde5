//! Scheme-keyed getter providers.

use std::fmt;
use std::sync::Arc;

use crate::client::{ArchiveFormat, RegistryClient};
use crate::config::OcifetchConfig;
use crate::error::GetError;
use crate::getter::{Getter, RegistryGetter};

/// Builds a fresh getter for a provider.
pub type GetterFactory =
    Arc<dyn Fn() -> Result<Box<dyn Getter + Send + Sync>, GetError> + Send + Sync>;

/// URL schemes paired with the getter that serves them.
#[derive(Clone)]
pub struct Provider {
    pub schemes: Vec<String>,
    pub new: GetterFactory,
}

impl Provider {
    /// True if this provider serves `scheme` (ASCII case-insensitive).
    pub fn provides(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    pub fn build(&self) -> Result<Box<dyn Getter + Send + Sync>, GetError> {
        (self.new)()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("schemes", &self.schemes)
            .finish_non_exhaustive()
    }
}

/// Ordered provider list; the first provider serving a scheme wins.
#[derive(Debug, Clone, Default)]
pub struct Providers(Vec<Provider>);

impl Providers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, provider: Provider) {
        self.0.push(provider);
    }

    pub fn by_scheme(&self, scheme: &str) -> Result<&Provider, GetError> {
        self.0
            .iter()
            .find(|p| p.provides(scheme))
            .ok_or_else(|| GetError::UnsupportedScheme(scheme.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.0.iter()
    }
}

impl FromIterator<Provider> for Providers {
    fn from_iter<I: IntoIterator<Item = Provider>>(iter: I) -> Self {
        Providers(iter.into_iter().collect())
    }
}

/// Registers a [`RegistryGetter`] for the schemes in `config`.
///
/// Each built getter shares `client` and `archive` by clone; wrap them in
/// `Arc` to share a single instance.
pub fn registry_getter_provider<C, A>(client: C, archive: A, config: &OcifetchConfig) -> Provider
where
    C: RegistryClient + Clone + Send + Sync + 'static,
    A: ArchiveFormat + Clone + Send + Sync + 'static,
{
    let extension = config.archive_extension.clone();
    Provider {
        schemes: config.schemes.clone(),
        new: Arc::new(move || {
            let getter = RegistryGetter::new(client.clone(), archive.clone())
                .with_extension(extension.clone());
            Ok(Box::new(getter) as Box<dyn Getter + Send + Sync>)
        }),
    }
}
