//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use quire_excerpt::ExcerptOutcome;

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> CliFormat {
        self.format
    }

    /// Format an extraction outcome.
    ///
    /// Text output is the bare excerpt, or nothing when none was found.
    pub fn format_excerpt(&self, outcome: &ExcerptOutcome) -> Result<Option<String>> {
        match self.format {
            CliFormat::Text => Ok(outcome.excerpt().map(str::to_string)),
            CliFormat::Json => {
                let value = serde_json::json!({
                    "excerpt": outcome.excerpt(),
                    "outcome": outcome.as_str(),
                });
                Ok(Some(serde_json::to_string_pretty(&value)?))
            }
        }
    }

    /// Format a single computed value such as a filtered date.
    pub fn format_value(&self, label: &str, value: &str) -> Result<String> {
        match self.format {
            CliFormat::Text => Ok(value.to_string()),
            CliFormat::Json => {
                let mut object = serde_json::Map::new();
                object.insert(label.to_string(), serde_json::Value::from(value));
                Ok(serde_json::to_string_pretty(&object)?)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
