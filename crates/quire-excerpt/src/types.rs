//! Document and outcome types for extraction

use crate::error::ExcerptError;
use serde::{Deserialize, Serialize};

/// A page handed over by the templating pipeline.
///
/// Only the rendered HTML is read. Pages that have not been rendered (or are
/// not renderable, such as raw data files) carry no content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Rendered HTML, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered_content: Option<String>,
}

impl Document {
    /// A document with rendered HTML
    pub fn new(rendered_content: impl Into<String>) -> Self {
        Self {
            rendered_content: Some(rendered_content.into()),
        }
    }

    /// A document without rendered content
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON form (`{"renderedContent": "..."}`).
    ///
    /// Unknown fields are ignored so whole page records can be passed in.
    pub fn from_json(json: &str) -> Result<Self, ExcerptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rendered HTML, if present
    pub fn content(&self) -> Option<&str> {
        self.rendered_content.as_deref()
    }
}

/// Result of running the extractor over one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcerptOutcome {
    /// A rule matched; holds the trimmed excerpt
    Found(String),

    /// The document had content but no rule matched
    NoMatch,

    /// The document had no rendered content to scan
    NotExtractable,
}

impl ExcerptOutcome {
    /// Collapse to the excerpt, if one was found
    pub fn into_excerpt(self) -> Option<String> {
        match self {
            ExcerptOutcome::Found(excerpt) => Some(excerpt),
            ExcerptOutcome::NoMatch | ExcerptOutcome::NotExtractable => None,
        }
    }

    /// Borrow the excerpt, if one was found
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            ExcerptOutcome::Found(excerpt) => Some(excerpt),
            _ => None,
        }
    }

    /// Short machine-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            ExcerptOutcome::Found(_) => "found",
            ExcerptOutcome::NoMatch => "no_match",
            ExcerptOutcome::NotExtractable => "not_extractable",
        }
    }
}
