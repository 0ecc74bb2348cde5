//! Registry-backed getter: fetch versioned chart archives from OCI
//! registries through the same get-by-URL interface used for plain HTTP.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod client;
pub mod error;
pub mod getter;
pub mod package;
pub mod reference;
pub mod url_model;

pub use error::{BoxError, GetError};
pub use getter::{ChartResponse, Getter, Provider, Providers, RegistryGetter};
pub use reference::Reference;
