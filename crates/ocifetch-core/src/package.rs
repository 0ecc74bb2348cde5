//! In-memory chart packages exchanged with the registry client and the
//! archive collaborators.

use serde::{Deserialize, Serialize};

/// Chart metadata carried inside every archive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    /// Canonical version declared by the chart itself. May differ from the
    /// registry tag it was pulled by (e.g. `latest`).
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

/// One file inside a chart, path relative to the chart root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// A materialized chart: metadata plus its files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    pub metadata: Metadata,
    pub files: Vec<PackageFile>,
}

impl Package {
    pub fn new(metadata: Metadata) -> Self {
        Package {
            metadata,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.files.push(PackageFile {
            name: name.into(),
            data: data.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn version(&self) -> &str {
        &self.metadata.version
    }
}
