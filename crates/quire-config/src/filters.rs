//! Date filters used by page templates.
//!
//! Templates render post dates in two shapes: a human-readable one for
//! display and an ISO date for `<time datetime="...">` attributes. Both are
//! strftime format strings so they can be tuned per site. All dates are
//! rendered in UTC.

use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Format behind `readableDate`, e.g. `17 Oct 2026`
pub const READABLE_DATE_FORMAT: &str = "%d %b %Y";

/// Format behind `htmlDateString`, e.g. `2026-10-17`
pub const HTML_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date filter formats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilters {
    /// strftime format for `readableDate`
    #[serde(default = "default_readable_date")]
    pub readable_date: String,

    /// strftime format for `htmlDateString`
    #[serde(default = "default_html_date_string")]
    pub html_date_string: String,
}

impl DateFilters {
    /// Check that both format strings only use known specifiers
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_format(&self.readable_date)?;
        check_format(&self.html_date_string)?;
        Ok(())
    }

    /// Apply the `readableDate` filter
    pub fn readable_date(&self, date: &DateTime<Utc>) -> Result<String, ConfigError> {
        render(&self.readable_date, date.format(&self.readable_date))
    }

    /// Apply the `htmlDateString` filter
    pub fn html_date_string(&self, date: &DateTime<Utc>) -> Result<String, ConfigError> {
        render(&self.html_date_string, date.format(&self.html_date_string))
    }
}

impl Default for DateFilters {
    fn default() -> Self {
        Self {
            readable_date: default_readable_date(),
            html_date_string: default_html_date_string(),
        }
    }
}

/// Parse a front-matter style date.
///
/// Accepts full RFC 3339 timestamps (converted to UTC) and bare `YYYY-MM-DD`
/// dates, which are taken as midnight UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, ConfigError> {
    let input = input.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| ConfigError::InvalidDate(input.to_string()))
}

pub(crate) fn check_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::DateFormat(format.to_string()));
    }
    Ok(())
}

// chrono reports a bad specifier as fmt::Error, which `to_string` would turn
// into a panic.
pub(crate) fn render(format: &str, formatted: impl std::fmt::Display) -> Result<String, ConfigError> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| ConfigError::DateFormat(format.to_string()))?;
    Ok(out)
}

fn default_readable_date() -> String {
    READABLE_DATE_FORMAT.to_string()
}

fn default_html_date_string() -> String {
    HTML_DATE_FORMAT.to_string()
}
