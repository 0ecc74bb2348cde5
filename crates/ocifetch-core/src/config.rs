use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::DEFAULT_ARCHIVE_EXTENSION;

fn default_schemes() -> Vec<String> {
    vec!["oci".to_string()]
}

fn default_archive_extension() -> String {
    DEFAULT_ARCHIVE_EXTENSION.to_string()
}

/// Global configuration loaded from `~/.config/ocifetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcifetchConfig {
    /// URL schemes the registry getter provider is registered for.
    #[serde(default = "default_schemes")]
    pub schemes: Vec<String>,
    /// Extension of derived archive filenames, without the dot.
    #[serde(default = "default_archive_extension")]
    pub archive_extension: String,
}

impl Default for OcifetchConfig {
    fn default() -> Self {
        Self {
            schemes: default_schemes(),
            archive_extension: default_archive_extension(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ocifetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OcifetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OcifetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<OcifetchConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: OcifetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
