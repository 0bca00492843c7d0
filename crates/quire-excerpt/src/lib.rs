//! Quire Excerpt
//!
//! Pulls a short preview out of a rendered page for use in listings.
//!
//! # Overview
//!
//! A page arrives from the templating pipeline as a [`Document`] that may or
//! may not carry rendered HTML. The [`ExcerptExtractor`] tries an ordered list
//! of [`MarkerRule`]s against that HTML and returns the text between the first
//! pair of markers it finds, trimmed of surrounding whitespace.
//!
//! ```text
//! Document → ExcerptExtractor → [rule 1, rule 2, ...] → Option<String>
//! ```
//!
//! The standard rules look for an explicit excerpt comment pair first and fall
//! back to the first paragraph:
//!
//! 1. `<!-- Excerpt Start -->` … `<!-- Excerpt End -->`
//! 2. `<p>` … `</p>`
//!
//! # Key Features
//!
//! - **First match wins**: rules are tried in order with early exit
//! - **Soft failure**: a page without rendered content yields `None` and a
//!   single warning, never an error
//! - **Validated rules**: an empty rule list or empty marker is rejected when
//!   the rules are built, not on every call
//!
//! # Example Usage
//!
//! ```
//! use quire_excerpt::{Document, ExcerptExtractor};
//!
//! let extractor = ExcerptExtractor::standard();
//! let page = Document::new("<p>First para.</p><p>Second para.</p>");
//!
//! assert_eq!(extractor.extract(&page).into_excerpt().as_deref(), Some("First para."));
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod extractor;

#[cfg(test)]
mod tests;

pub use error::ExcerptError;
pub use config::{MarkerRule, MarkerRules, EXCERPT_END, EXCERPT_START};
pub use types::{Document, ExcerptOutcome};
pub use extractor::{extract_excerpt, ExcerptExtractor};
