//! Integration tests for loading quire.toml files
//!
//! These tests exercise the full read → parse → validate path on disk.

use quire_config::{ConfigError, DateStyle, Locale, QuireConfig, ThemeColor};
use quire_excerpt::Document;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
[template.dir]
input = "content"
output = "public"

[[template.passthroughCopy]]
from = "content/img"
to = "img"

[template.filters]
readableDate = "%-d %B %Y"

[[template.excerpt.rules]]
start = "<!-- Excerpt Start -->"
end = "<!-- Excerpt End -->"

[[template.excerpt.rules]]
start = "<p>"
end = "</p>"

[site]
title = "Field Notes"
description = "Things I wrote down"

[site.theme]
color = "emerald"

[site.notes]
pathPrefix = "/"

[[site.sidebar.links]]
url = "https://example.com"
label = "Home"
icon = "house"

[[site.sidebar.sections]]
label = "Projects"

[[site.sidebar.sections.groups]]
query = { pattern = "^/projects/" }

[[site.customProperties.properties]]
name = "publishedOn"
options = { date = { locale = "en-GB", format = { dateStyle = "long" } } }

[site.tags.map]
rust = "Rust"
"#,
    );

    let config = QuireConfig::from_file(file.path()).unwrap();

    assert_eq!(config.template.dirs.input, "content");
    assert_eq!(config.template.dirs.output, "public");
    assert_eq!(config.template.passthrough.len(), 1);
    assert_eq!(config.template.passthrough[0].to.as_deref(), Some("img"));
    assert_eq!(config.template.excerpt.rules.len(), 2);

    assert_eq!(config.site.title, "Field Notes");
    assert_eq!(config.site.theme.color, ThemeColor::Emerald);
    assert_eq!(config.site.sidebar.sections[0].groups[0].query.pattern, "^/projects/");
    assert!(!config.site.panel.incoming_links);
    assert_eq!(config.site.tags.map.get("rust").map(String::as_str), Some("Rust"));

    let options = config.site.custom_properties.properties[0]
        .options
        .as_ref()
        .and_then(|o| o.date.as_ref())
        .unwrap();
    assert_eq!(options.locale, Locale::EnGb);
    assert_eq!(options.format.map(|f| f.date_style), Some(DateStyle::Long));

    let extractor = config.template.excerpt_extractor();
    let excerpt = extractor
        .extract(&Document::new("<p>Lead paragraph.</p>"))
        .into_excerpt();
    assert_eq!(excerpt.as_deref(), Some("Lead paragraph."));
}

#[test]
fn test_load_missing_file() {
    let result = QuireConfig::from_file("/nonexistent/quire.toml");
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_load_rejects_invalid_pattern() {
    let file = write_config(
        r#"
[site]
title = "Notes"

[[site.sidebar.sections]]
label = "Broken"

[[site.sidebar.sections.groups]]
query = { pattern = "^/(dev" }
"#,
    );

    let result = QuireConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::Pattern { .. })));
}

#[test]
fn test_load_rejects_bad_date_filter() {
    let file = write_config(
        r#"
[template.filters]
htmlDateString = "%Y-%m-%"
"#,
    );

    let result = QuireConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::DateFormat(_))));
}

#[test]
fn test_load_rejects_empty_marker() {
    let file = write_config(
        r#"
[[template.excerpt.rules]]
start = "<p>"
end = ""
"#,
    );

    let result = QuireConfig::from_file(file.path());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("empty end marker"));
}

#[test]
fn test_saved_defaults_reload_identically() {
    let defaults = QuireConfig::default();
    let file = write_config(&defaults.to_toml().unwrap());

    let loaded = QuireConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, defaults);
}
