//! Marker rules for excerpt extraction

use crate::error::ExcerptError;
use serde::{Deserialize, Serialize};

/// Comment that opens an explicit excerpt region
pub const EXCERPT_START: &str = "<!-- Excerpt Start -->";

/// Comment that closes an explicit excerpt region
pub const EXCERPT_END: &str = "<!-- Excerpt End -->";

/// A pair of markers delimiting an excerpt region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRule {
    /// Marker that opens the region
    pub start: String,

    /// Marker that closes the region
    pub end: String,
}

impl MarkerRule {
    /// Create a rule from a start and end marker
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The explicit `<!-- Excerpt Start -->` / `<!-- Excerpt End -->` pair
    pub fn excerpt_comments() -> Self {
        Self::new(EXCERPT_START, EXCERPT_END)
    }

    /// The first `<p>` / `</p>` pair
    pub fn first_paragraph() -> Self {
        Self::new("<p>", "</p>")
    }
}

/// An ordered, validated list of marker rules.
///
/// Earlier rules take priority. The list is never empty and no marker is the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MarkerRule>", into = "Vec<MarkerRule>")]
pub struct MarkerRules(Vec<MarkerRule>);

impl MarkerRules {
    /// Validate and wrap a list of rules
    pub fn new(rules: Vec<MarkerRule>) -> Result<Self, ExcerptError> {
        if rules.is_empty() {
            return Err(ExcerptError::EmptyRuleSet);
        }
        for (index, rule) in rules.iter().enumerate() {
            if rule.start.is_empty() {
                return Err(ExcerptError::EmptyMarker { index, side: "start" });
            }
            if rule.end.is_empty() {
                return Err(ExcerptError::EmptyMarker { index, side: "end" });
            }
        }
        Ok(Self(rules))
    }

    /// Explicit excerpt comments first, then the first paragraph
    pub fn standard() -> Self {
        Self(vec![MarkerRule::excerpt_comments(), MarkerRule::first_paragraph()])
    }

    /// Rules in priority order
    pub fn as_slice(&self) -> &[MarkerRule] {
        &self.0
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty; never true once validated
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MarkerRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<MarkerRule>> for MarkerRules {
    type Error = ExcerptError;

    fn try_from(rules: Vec<MarkerRule>) -> Result<Self, Self::Error> {
        Self::new(rules)
    }
}

impl From<MarkerRules> for Vec<MarkerRule> {
    fn from(rules: MarkerRules) -> Self {
        rules.0
    }
}
