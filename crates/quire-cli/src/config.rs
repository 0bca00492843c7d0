//! Configuration lookup for the CLI.

use crate::error::Result;
use quire_config::{QuireConfig, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config` or `QUIRE_CONFIG`
    Explicit(PathBuf),
    /// `quire.toml` found in the working directory
    WorkingDir(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

impl ConfigSource {
    /// Pick the config source: an explicit path wins, then `quire.toml` in
    /// `dir`, then the built-in defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }
        let local = dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            ConfigSource::WorkingDir(local)
        } else {
            ConfigSource::Defaults
        }
    }

    /// File path, if the source is a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::WorkingDir(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }

    /// Load the configuration from this source.
    ///
    /// An explicit path that does not exist is an error; the defaults are
    /// only used when nothing was asked for.
    pub fn load(&self) -> Result<QuireConfig> {
        match self.path() {
            Some(path) => Ok(QuireConfig::from_file(path)?),
            None => {
                info!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                Ok(QuireConfig::default())
            }
        }
    }

    /// Path `config init` writes to when none is given
    pub fn init_target(&self, dir: &Path) -> PathBuf {
        match self {
            ConfigSource::Explicit(path) => path.clone(),
            _ => dir.join(CONFIG_FILE_NAME),
        }
    }
}
