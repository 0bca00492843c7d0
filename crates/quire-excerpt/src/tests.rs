//! Scenario tests for the excerpt extractor

#[cfg(test)]
mod tests {
    use crate::{Document, ExcerptExtractor, ExcerptOutcome, MarkerRule, MarkerRules};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Counts warning-level events
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, count.load(Ordering::SeqCst))
    }

    #[test]
    fn test_missing_content_warns_once() {
        let extractor = ExcerptExtractor::standard();
        let (outcome, warnings) = count_warnings(|| extractor.extract(&Document::empty()));

        assert_eq!(outcome, ExcerptOutcome::NotExtractable);
        assert_eq!(warnings, 1, "Missing content should emit exactly one warning");
    }

    #[test]
    fn test_no_match_is_silent() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new("<div>no markers here</div>");
        let (outcome, warnings) = count_warnings(|| extractor.extract(&doc));

        assert_eq!(outcome, ExcerptOutcome::NoMatch);
        assert_eq!(warnings, 0, "No match should not emit a warning");
    }

    #[test]
    fn test_explicit_markers_take_priority() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new(
            "<!-- Excerpt Start --> Hello <b>world</b> <!-- Excerpt End --><p>ignored</p>",
        );

        assert_eq!(
            extractor.extract(&doc),
            ExcerptOutcome::Found("Hello <b>world</b>".to_string())
        );
    }

    #[test]
    fn test_explicit_markers_win_over_earlier_paragraph() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new(
            "<p>Intro</p>\n<!-- Excerpt Start -->\n<p>Chosen</p>\n<!-- Excerpt End -->",
        );

        assert_eq!(
            extractor.extract(&doc).into_excerpt().as_deref(),
            Some("<p>Chosen</p>")
        );
    }

    #[test]
    fn test_first_paragraph_fallback() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new("<p>First para.</p><p>Second para.</p>");

        assert_eq!(
            extractor.extract(&doc).into_excerpt().as_deref(),
            Some("First para.")
        );
    }

    #[test]
    fn test_reversed_comment_markers_fall_through() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new(
            "<!-- Excerpt End --> x <!-- Excerpt Start --> y <p>z</p>",
        );

        assert_eq!(extractor.extract(&doc).into_excerpt().as_deref(), Some("z"));
    }

    #[test]
    fn test_start_marker_without_end_falls_through() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new("<!-- Excerpt Start --> dangling <p>para</p>");

        assert_eq!(extractor.extract(&doc).into_excerpt().as_deref(), Some("para"));
    }

    #[test]
    fn test_empty_content_is_no_match() {
        let extractor = ExcerptExtractor::standard();
        let (outcome, warnings) = count_warnings(|| extractor.extract(&Document::new("")));

        assert_eq!(outcome, ExcerptOutcome::NoMatch);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_custom_rules_in_order() {
        let rules = MarkerRules::new(vec![
            MarkerRule::new("<summary>", "</summary>"),
            MarkerRule::first_paragraph(),
        ])
        .unwrap();
        let extractor = ExcerptExtractor::new(rules);

        let with_summary = Document::new("<p>body</p><summary> short </summary>");
        assert_eq!(
            extractor.extract(&with_summary).into_excerpt().as_deref(),
            Some("short")
        );

        let without_summary = Document::new("<p>body</p>");
        assert_eq!(
            extractor.extract(&without_summary).into_excerpt().as_deref(),
            Some("body")
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = ExcerptExtractor::standard();
        let doc = Document::new("<p> same </p>");

        let first = extractor.extract(&doc);
        let second = extractor.extract(&doc);
        assert_eq!(first, second);
        assert_eq!(doc, Document::new("<p> same </p>"));
    }

    #[test]
    fn test_extractor_shared_across_threads() {
        let extractor = Arc::new(ExcerptExtractor::standard());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = Arc::clone(&extractor);
                std::thread::spawn(move || {
                    let doc = Document::new(format!("<p>page {}</p>", i));
                    extractor.extract(&doc).into_excerpt()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(format!("page {}", i)));
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::{Document, ExcerptExtractor, ExcerptOutcome};
    use proptest::prelude::*;

    proptest! {
        /// Property: extraction is deterministic for any input
        #[test]
        fn test_extraction_deterministic(content in ".*") {
            let extractor = ExcerptExtractor::standard();
            let doc = Document::new(content);
            prop_assert_eq!(extractor.extract(&doc), extractor.extract(&doc));
        }

        /// Property: a found excerpt never carries surrounding whitespace
        #[test]
        fn test_excerpt_is_trimmed(inner in "[ \\t\\na-z]{0,40}") {
            let extractor = ExcerptExtractor::standard();
            let doc = Document::new(format!("<p>{}</p>", inner));
            match extractor.extract(&doc) {
                ExcerptOutcome::Found(excerpt) => {
                    prop_assert_eq!(excerpt.as_str(), inner.trim());
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }

        /// Property: text without any marker never yields an excerpt
        #[test]
        fn test_plain_text_never_matches(content in "[a-zA-Z0-9 .,]*") {
            let extractor = ExcerptExtractor::standard();
            let doc = Document::new(content);
            prop_assert_eq!(extractor.extract(&doc), ExcerptOutcome::NoMatch);
        }
    }
}
