//! Templating engine configuration
//!
//! Directory mapping, passthrough copies, date filters and the excerpt
//! shortcode. The templating engine resolves and copies paths itself; these
//! values are only checked for shape and handed over unchanged.

use crate::error::ConfigError;
use crate::filters::DateFilters;
use quire_excerpt::{ExcerptExtractor, MarkerRules};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Configuration for the templating engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Where sources live and where output goes
    #[serde(default, rename = "dir")]
    pub dirs: DirectoryMapping,

    /// Files and directories copied to the output as-is
    #[serde(default = "default_passthrough", rename = "passthroughCopy")]
    pub passthrough: Vec<PassthroughCopy>,

    /// Date filter formats
    #[serde(default)]
    pub filters: DateFilters,

    /// The excerpt shortcode
    #[serde(default)]
    pub excerpt: ExcerptSettings,
}

/// Input/output directory layout.
///
/// `includes`, `layouts` and `data` are relative to `input`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryMapping {
    /// Source root
    #[serde(default = "default_input")]
    pub input: String,

    /// Build output
    #[serde(default = "default_output")]
    pub output: String,

    /// Partials, relative to `input`
    #[serde(default = "default_includes")]
    pub includes: String,

    /// Layouts, relative to `input`
    #[serde(default = "default_layouts")]
    pub layouts: String,

    /// Global data files, relative to `input`
    #[serde(default = "default_data")]
    pub data: String,
}

/// One passthrough copy rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassthroughCopy {
    /// Source path (file, directory or glob)
    pub from: String,

    /// Destination inside the output directory; mirrors `from` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl PassthroughCopy {
    /// Copy `from` to the same relative location in the output
    pub fn mirror(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: None,
        }
    }
}

/// Settings for the excerpt shortcode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptSettings {
    /// Marker rules in priority order
    #[serde(default)]
    pub rules: MarkerRules,
}

impl TemplateConfig {
    /// Validate the whole templating config
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dirs.validate()?;

        let mut seen = HashSet::new();
        for (i, copy) in self.passthrough.iter().enumerate() {
            if copy.from.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("template.passthroughCopy[{}].from", i),
                    "must not be empty",
                ));
            }
            if !seen.insert(normalize(&copy.from)) {
                return Err(ConfigError::invalid(
                    format!("template.passthroughCopy[{}].from", i),
                    format!("'{}' is listed more than once", copy.from),
                ));
            }
        }

        self.filters.validate()
    }

    /// Build the extractor behind the excerpt shortcode
    pub fn excerpt_extractor(&self) -> ExcerptExtractor {
        ExcerptExtractor::new(self.excerpt.rules.clone())
    }

    /// Serialize as pretty JSON for the templating engine
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as a standalone TOML table
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dirs: DirectoryMapping::default(),
            passthrough: default_passthrough(),
            filters: DateFilters::default(),
            excerpt: ExcerptSettings::default(),
        }
    }
}

impl DirectoryMapping {
    /// Validate directory names
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("input", &self.input), ("output", &self.output)] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(format!("template.dir.{}", field), "must not be empty"));
            }
        }
        if normalize(&self.input) == normalize(&self.output) {
            return Err(ConfigError::invalid(
                "template.dir.output",
                "must differ from the input directory",
            ));
        }

        for (field, value) in [
            ("includes", &self.includes),
            ("layouts", &self.layouts),
            ("data", &self.data),
        ] {
            check_nested(field, value)?;
        }
        Ok(())
    }
}

impl Default for DirectoryMapping {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            includes: default_includes(),
            layouts: default_layouts(),
            data: default_data(),
        }
    }
}

/// Path with `.` components dropped, so `./src` and `src` compare equal
fn normalize(path: &str) -> PathBuf {
    Path::new(path.trim())
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Directories nested under `input` must stay inside it
fn check_nested(field: &str, value: &str) -> Result<(), ConfigError> {
    let field = format!("template.dir.{}", field);
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    let escapes = Path::new(value).components().any(|c| {
        matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
    });
    if escapes {
        return Err(ConfigError::invalid(
            field,
            format!("'{}' must be a relative path inside the input directory", value),
        ));
    }
    Ok(())
}

fn default_input() -> String {
    "src".to_string()
}

fn default_output() -> String {
    "_site".to_string()
}

fn default_includes() -> String {
    "_includes".to_string()
}

fn default_layouts() -> String {
    "_layouts".to_string()
}

fn default_data() -> String {
    "_data".to_string()
}

fn default_passthrough() -> Vec<PassthroughCopy> {
    vec![
        PassthroughCopy::mirror("src/assets"),
        PassthroughCopy::mirror("src/favicon.ico"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_excerpt::{Document, MarkerRule};

    #[test]
    fn test_default_config_is_valid() {
        let config = TemplateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.passthrough.len(), 2);
        assert_eq!(config.dirs.input, "src");
        assert_eq!(config.dirs.output, "_site");
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let mut config = TemplateConfig::default();
        config.dirs.output = "src".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_dot_prefixed_output_same_as_input_rejected() {
        let mut config = TemplateConfig::default();
        config.dirs.output = "./src".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("template.dir.output"));

        config.dirs.output = "src/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_includes_escaping_input_rejected() {
        let mut config = TemplateConfig::default();
        config.dirs.includes = "../shared".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("template.dir.includes"));
    }

    #[test]
    fn test_absolute_layouts_rejected() {
        let mut config = TemplateConfig::default();
        config.dirs.layouts = "/etc/layouts".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_passthrough_rejected() {
        let config = TemplateConfig {
            passthrough: vec![
                PassthroughCopy::mirror("src/assets"),
                PassthroughCopy::mirror("src/assets"),
            ],
            ..TemplateConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_dot_prefixed_duplicate_passthrough_rejected() {
        let config = TemplateConfig {
            passthrough: vec![
                PassthroughCopy::mirror("src/assets"),
                PassthroughCopy::mirror("./src/assets"),
            ],
            ..TemplateConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("passthroughCopy[1]"));
    }

    #[test]
    fn test_empty_passthrough_rejected() {
        let config = TemplateConfig {
            passthrough: vec![PassthroughCopy::mirror("  ")],
            ..TemplateConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excerpt_extractor_uses_configured_rules() {
        let config = TemplateConfig {
            excerpt: ExcerptSettings {
                rules: MarkerRules::new(vec![MarkerRule::new("<em>", "</em>")]).unwrap(),
            },
            ..TemplateConfig::default()
        };
        let extractor = config.excerpt_extractor();
        let doc = Document::new("<p>para</p><em>lead</em>");
        assert_eq!(extractor.extract(&doc).into_excerpt().as_deref(), Some("lead"));
    }

    #[test]
    fn test_json_uses_engine_field_names() {
        let json = TemplateConfig::default().to_json().unwrap();
        assert!(json.contains("\"dir\""));
        assert!(json.contains("\"readableDate\""));
        assert!(json.contains("\"htmlDateString\""));
        assert!(json.contains("<!-- Excerpt Start -->"));
    }
}
