//! Configuration file loading.
//!
//! Both framework configs live in one TOML file, `quire.toml`, under the
//! `[template]` and `[site]` tables. Every field has a default, so a missing
//! table yields the deployed site's settings.

use crate::error::ConfigError;
use crate::site::SiteConfig;
use crate::template::TemplateConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "quire.toml";

/// Environment variable overriding the config file path
pub const CONFIG_ENV_VAR: &str = "QUIRE_CONFIG";

/// Combined configuration for both frameworks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuireConfig {
    /// Templating engine settings
    #[serde(default)]
    pub template: TemplateConfig,

    /// Site builder settings
    #[serde(default)]
    pub site: SiteConfig,
}

impl QuireConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string without validating it
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize configuration to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.template.validate()?;
        self.site.validate()?;
        Ok(())
    }
}
