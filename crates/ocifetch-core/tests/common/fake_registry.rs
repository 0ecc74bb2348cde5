//! In-memory registry client and TOML-backed archive format for tests.
//!
//! The registry records every pull/load it receives so tests can assert on
//! stage ordering and on which reference reached the client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;

use ocifetch_core::client::{ArchiveFormat, RegistryClient};
use ocifetch_core::package::{Metadata, Package};
use ocifetch_core::{BoxError, Reference};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Pull(Reference),
    Load(Reference),
}

#[derive(Debug, Default)]
pub struct FakeRegistry {
    /// Charts keyed by `repository:tag`.
    charts: HashMap<String, Package>,
    fail_pull: Option<io::ErrorKind>,
    fail_load: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a chart named `name` with declared `version` under `repository:tag`.
    pub fn with_chart(mut self, repository: &str, tag: &str, name: &str, version: &str) -> Self {
        let package = Package::new(Metadata {
            name: name.to_string(),
            version: version.to_string(),
            ..Default::default()
        })
        .with_file("values.yaml", "replicas: 1\n");
        self.charts.insert(format!("{repository}:{tag}"), package);
        self
    }

    pub fn failing_pull(mut self, kind: io::ErrorKind) -> Self {
        self.fail_pull = Some(kind);
        self
    }

    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RegistryClient for FakeRegistry {
    fn pull(&self, reference: &Reference) -> Result<(), BoxError> {
        self.record(Call::Pull(reference.clone()));
        if let Some(kind) = self.fail_pull {
            return Err(Box::new(io::Error::new(kind, "simulated network error")));
        }
        if !self.charts.contains_key(&reference.to_string()) {
            return Err(Box::new(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{reference}: not found"),
            )));
        }
        Ok(())
    }

    fn load(&self, reference: &Reference) -> Result<Package, BoxError> {
        self.record(Call::Load(reference.clone()));
        if self.fail_load {
            return Err("corrupt local store".into());
        }
        self.charts
            .get(&reference.to_string())
            .cloned()
            .ok_or_else(|| format!("{reference}: not in local store").into())
    }
}

/// Archive format that stores the chart metadata as TOML.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlArchive;

impl ArchiveFormat for TomlArchive {
    fn write(&self, package: &Package, sink: &mut dyn Write) -> Result<(), BoxError> {
        let text = toml::to_string(&package.metadata)?;
        sink.write_all(text.as_bytes())?;
        Ok(())
    }

    fn load_archive(&self, bytes: &[u8]) -> Result<Package, BoxError> {
        let text = std::str::from_utf8(bytes)?;
        let metadata: Metadata = toml::from_str(text)?;
        Ok(Package::new(metadata))
    }
}

/// Archive format whose writer always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenWriter;

impl ArchiveFormat for BrokenWriter {
    fn write(&self, _package: &Package, _sink: &mut dyn Write) -> Result<(), BoxError> {
        Err(Box::new(io::Error::new(io::ErrorKind::WriteZero, "disk full")))
    }

    fn load_archive(&self, _bytes: &[u8]) -> Result<Package, BoxError> {
        Err("unreachable".into())
    }
}

/// Archive format that writes bytes it cannot read back.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreadableArchive;

impl ArchiveFormat for UnreadableArchive {
    fn write(&self, _package: &Package, sink: &mut dyn Write) -> Result<(), BoxError> {
        sink.write_all(&[0xff, 0xfe, 0x00])?;
        Ok(())
    }

    fn load_archive(&self, bytes: &[u8]) -> Result<Package, BoxError> {
        TomlArchive.load_archive(bytes)
    }
}
