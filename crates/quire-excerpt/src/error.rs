//! Error types for excerpt extraction

use thiserror::Error;

/// Errors raised while setting up excerpt extraction.
///
/// Extraction itself never fails; these only surface when rules or documents
/// are built from configuration or input files.
#[derive(Error, Debug)]
pub enum ExcerptError {
    /// No marker rules were supplied
    #[error("Excerpt rule list is empty")]
    EmptyRuleSet,

    /// A rule has an empty start or end marker
    #[error("Excerpt rule {index} has an empty {side} marker")]
    EmptyMarker {
        /// Position of the rule in the list
        index: usize,
        /// Which marker is empty ("start" or "end")
        side: &'static str,
    },

    /// Document input could not be parsed
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl From<serde_json::Error> for ExcerptError {
    fn from(e: serde_json::Error) -> Self {
        ExcerptError::InvalidDocument(e.to_string())
    }
}
