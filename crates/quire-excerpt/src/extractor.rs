//! Core excerpt extractor

use crate::config::{MarkerRule, MarkerRules};
use crate::types::{Document, ExcerptOutcome};
use tracing::{debug, warn};

/// Extracts a preview from rendered pages using ordered marker rules
#[derive(Debug, Clone, Default)]
pub struct ExcerptExtractor {
    rules: MarkerRules,
}

impl ExcerptExtractor {
    /// Create an extractor over a validated rule list
    pub fn new(rules: MarkerRules) -> Self {
        Self { rules }
    }

    /// Extractor using the standard comment-then-paragraph rules
    pub fn standard() -> Self {
        Self::new(MarkerRules::standard())
    }

    /// Rules in priority order
    pub fn rules(&self) -> &MarkerRules {
        &self.rules
    }

    /// Run the rules against a document.
    ///
    /// A document without rendered content logs one warning and yields
    /// [`ExcerptOutcome::NotExtractable`]. A document where no rule matches
    /// yields [`ExcerptOutcome::NoMatch`] without logging at warning level.
    pub fn extract(&self, document: &Document) -> ExcerptOutcome {
        let Some(content) = document.content() else {
            warn!("Failed to extract excerpt: document has no rendered content");
            return ExcerptOutcome::NotExtractable;
        };

        for (index, rule) in self.rules.as_slice().iter().enumerate() {
            if let Some(excerpt) = match_rule(content, rule) {
                debug!("Excerpt rule {} matched ({} chars)", index, excerpt.len());
                return ExcerptOutcome::Found(excerpt.to_string());
            }
        }

        debug!("No excerpt rule matched ({} rules tried)", self.rules.len());
        ExcerptOutcome::NoMatch
    }
}

/// Extract an excerpt from `document` using `rules`.
///
/// Shorthand for [`ExcerptExtractor::extract`] collapsed to an `Option`.
pub fn extract_excerpt(document: &Document, rules: &MarkerRules) -> Option<String> {
    ExcerptExtractor::new(rules.clone())
        .extract(document)
        .into_excerpt()
}

/// Text strictly between the first `start` marker and the first `end` marker
/// that follows it, trimmed.
///
/// An `end` marker that only occurs before `start` does not count.
fn match_rule<'a>(content: &'a str, rule: &MarkerRule) -> Option<&'a str> {
    let start = content.find(&rule.start)? + rule.start.len();
    let end = start + content[start..].find(&rule.end)?;
    Some(content[start..end].trim())
}
