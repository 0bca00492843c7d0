//! Configuration error types

use quire_excerpt::ExcerptError;
use thiserror::Error;

/// Errors that can occur while loading, validating or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Failed to serialize JSON
    #[error("Failed to serialize config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the site builder would reject
    #[error("Invalid value for '{field}': {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// A notes query pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern as written
        pattern: String,
        /// Regex compiler error
        #[source]
        source: regex::Error,
    },

    /// A date filter format string has an unknown specifier
    #[error("Invalid date format '{0}'")]
    DateFormat(String),

    /// A date could not be parsed
    #[error("Invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),

    /// Excerpt rules are malformed
    #[error("Excerpt configuration error: {0}")]
    Excerpt(#[from] ExcerptError),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
