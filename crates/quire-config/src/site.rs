//! Site builder configuration
//!
//! Mirrors the site builder's config object field for field (camelCase on the
//! wire). Navigation queries are compiled once at validation to catch typos;
//! the builder evaluates them against the notes itself.

use crate::error::ConfigError;
use crate::filters::render;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title shown in the header and `<title>`
    pub title: String,

    /// Meta description
    #[serde(default)]
    pub description: String,

    /// Sidebar links and navigation sections
    #[serde(default)]
    pub sidebar: Sidebar,

    /// Theme tokens
    #[serde(default)]
    pub theme: Theme,

    /// Note URL settings
    #[serde(default)]
    pub notes: NotesSettings,

    /// Front-matter properties displayed on notes
    #[serde(default)]
    pub custom_properties: CustomProperties,

    /// Side panel toggles
    #[serde(default)]
    pub panel: Panel,

    /// Tag display names
    #[serde(default)]
    pub tags: Tags,
}

/// Sidebar contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    /// External links with icons
    #[serde(default)]
    pub links: Vec<SidebarLink>,

    /// Navigation sections
    #[serde(default)]
    pub sections: Vec<SidebarSection>,
}

/// An external link in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Target URL
    pub url: String,

    /// Link text
    pub label: String,

    /// Icon name from the builder's icon set
    pub icon: String,
}

/// A labelled navigation section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading
    pub label: String,

    /// Groups of notes under the heading
    #[serde(default)]
    pub groups: Vec<SidebarGroup>,
}

/// A group of notes selected by a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Optional sub-heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Which notes belong to the group
    pub query: NotesQuery,
}

/// Selects notes by URL pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesQuery {
    /// Regular expression matched against note paths
    pub pattern: String,

    /// Display the matches as a tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeOptions>,
}

/// Tree display options for a notes query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    /// Path rewrites (regex → replacement) applied before building the tree
    #[serde(default)]
    pub replace: BTreeMap<String, String>,
}

/// Theme tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent palette
    #[serde(default)]
    pub color: ThemeColor,
}

/// Accent palettes offered by the site builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ThemeColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    #[default]
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

/// Note URL settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesSettings {
    /// Prefix put in front of every note URL; `/` removes it entirely
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
}

/// Front-matter properties shown on notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperties {
    /// Properties in display order
    #[serde(default)]
    pub properties: Vec<CustomProperty>,
}

/// One displayed property, picked by `name` or by object `path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomProperty {
    /// Front-matter key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Front-matter object whose entries are all shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Formatting options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PropertyOptions>,
}

/// Formatting options for a property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOptions {
    /// Date formatting for date-valued properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateOptions>,
}

/// Locale-aware date formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    /// Locale used for month and weekday names
    pub locale: Locale,

    /// Style; the locale's numeric date when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DateFormat>,
}

/// Date style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFormat {
    /// How much of the date to spell out
    pub date_style: DateStyle,
}

/// Date styles understood by the site builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `Saturday, October 17, 2026`
    Full,
    /// `October 17, 2026`
    Long,
    /// `Oct 17, 2026`
    Medium,
    /// `10/17/26`
    Short,
}

/// Locales supported for date previews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States)
    #[serde(rename = "en-US")]
    EnUs,
    /// English (United Kingdom)
    #[serde(rename = "en-GB")]
    EnGb,
}

/// Side panel toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    /// Show notes linking to the current note
    #[serde(default)]
    pub incoming_links: bool,

    /// Show notes linked from the current note
    #[serde(default)]
    pub outgoing_links: bool,
}

/// Tag display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    /// Tag → display label
    #[serde(default)]
    pub map: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Validate the site configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::invalid("site.title", "must not be empty"));
        }

        for (i, link) in self.sidebar.links.iter().enumerate() {
            if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
                return Err(ConfigError::invalid(
                    format!("site.sidebar.links[{}].url", i),
                    format!("'{}' is not an http(s) URL", link.url),
                ));
            }
            if link.label.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("site.sidebar.links[{}].label", i),
                    "must not be empty",
                ));
            }
            if link.icon.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("site.sidebar.links[{}].icon", i),
                    "must not be empty",
                ));
            }
        }

        for (i, section) in self.sidebar.sections.iter().enumerate() {
            if section.label.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("site.sidebar.sections[{}].label", i),
                    "must not be empty",
                ));
            }
            for group in &section.groups {
                group.query.compile()?;
            }
        }

        if !self.notes.path_prefix.starts_with('/') {
            return Err(ConfigError::invalid(
                "site.notes.pathPrefix",
                format!("'{}' must start with '/'", self.notes.path_prefix),
            ));
        }

        for (i, property) in self.custom_properties.properties.iter().enumerate() {
            if property.name.is_some() == property.path.is_some() {
                return Err(ConfigError::invalid(
                    format!("site.customProperties.properties[{}]", i),
                    "exactly one of 'name' or 'path' must be set",
                ));
            }
        }

        Ok(())
    }

    /// Serialize as pretty JSON for the site builder
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as a standalone TOML table
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl NotesQuery {
    /// Query matching note paths against `pattern`
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            tree: None,
        }
    }

    /// Compile the pattern and every tree rewrite key.
    ///
    /// Returns the compiled main pattern.
    pub fn compile(&self) -> Result<Regex, ConfigError> {
        let main = compile_pattern(&self.pattern)?;
        if let Some(tree) = &self.tree {
            for key in tree.replace.keys() {
                compile_pattern(key)?;
            }
        }
        Ok(main)
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl CustomProperty {
    /// Property read from a front-matter key
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: None,
            options: None,
        }
    }

    /// Property group read from a front-matter object
    pub fn at_path(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: Some(path.into()),
            options: None,
        }
    }

    /// Attach date formatting options
    pub fn with_date(mut self, locale: Locale, style: Option<DateStyle>) -> Self {
        self.options = Some(PropertyOptions {
            date: Some(DateOptions {
                locale,
                format: style.map(|date_style| DateFormat { date_style }),
            }),
        });
        self
    }

    /// Key or path this property reads
    pub fn key(&self) -> &str {
        self.name.as_deref().or(self.path.as_deref()).unwrap_or_default()
    }

    /// Preview how the site builder renders `date` for this property.
    ///
    /// `None` when the property carries no date options.
    pub fn format_date(&self, date: &NaiveDate) -> Option<Result<String, ConfigError>> {
        let options = self.options.as_ref()?.date.as_ref()?;
        let style = options.format.map(|f| f.date_style);
        Some(options.locale.format_date(date, style))
    }
}

impl Locale {
    /// strftime pattern equivalent to the locale's rendering of `style`
    pub fn pattern(&self, style: Option<DateStyle>) -> &'static str {
        match (self, style) {
            (Locale::EnUs, Some(DateStyle::Full)) => "%A, %B %-d, %Y",
            (Locale::EnUs, Some(DateStyle::Long)) => "%B %-d, %Y",
            (Locale::EnUs, Some(DateStyle::Medium)) => "%b %-d, %Y",
            (Locale::EnUs, Some(DateStyle::Short)) => "%-m/%-d/%y",
            (Locale::EnUs, None) => "%-m/%-d/%Y",
            (Locale::EnGb, Some(DateStyle::Full)) => "%A %-d %B %Y",
            (Locale::EnGb, Some(DateStyle::Long)) => "%-d %B %Y",
            (Locale::EnGb, Some(DateStyle::Medium)) => "%-d %b %Y",
            (Locale::EnGb, Some(DateStyle::Short)) | (Locale::EnGb, None) => "%d/%m/%Y",
        }
    }

    /// Render `date` in this locale
    pub fn format_date(&self, date: &NaiveDate, style: Option<DateStyle>) -> Result<String, ConfigError> {
        let pattern = self.pattern(style);
        render(pattern, date.format(pattern))
    }
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
        }
    }
}

fn default_path_prefix() -> String {
    "/notes".to_string()
}

impl Default for SiteConfig {
    /// The deployed notes site
    fn default() -> Self {
        let mut dev_tree = TreeOptions::default();
        dev_tree.replace.insert(r"^/\w+".to_string(), String::new());

        let mut tag_map = BTreeMap::new();
        tag_map.insert("dynamic-content".to_string(), "dynamic content".to_string());

        Self {
            title: "MikeFez.com".to_string(),
            description: "My spot to catalog my ideas and projects. I'm a software engineer, and I love to automate things.".to_string(),
            sidebar: Sidebar {
                links: vec![
                    SidebarLink {
                        url: "https://github.com/MikeFez".to_string(),
                        label: "GitHub".to_string(),
                        icon: "github".to_string(),
                    },
                    SidebarLink {
                        url: "https://buymeacoffee.com/mikefez".to_string(),
                        label: "Buy me a coffee".to_string(),
                        icon: "coffee".to_string(),
                    },
                ],
                sections: vec![
                    SidebarSection {
                        label: "Home Automation".to_string(),
                        groups: vec![SidebarGroup {
                            label: None,
                            query: NotesQuery::new("^/home-automation/"),
                        }],
                    },
                    SidebarSection {
                        label: "Projects".to_string(),
                        groups: vec![SidebarGroup {
                            label: None,
                            query: NotesQuery::new("^/projects/"),
                        }],
                    },
                    SidebarSection {
                        label: "Guides".to_string(),
                        groups: vec![SidebarGroup {
                            label: Some("dev".to_string()),
                            query: NotesQuery {
                                pattern: "^/dev/".to_string(),
                                tree: Some(dev_tree),
                            },
                        }],
                    },
                ],
            },
            theme: Theme {
                color: ThemeColor::Sky,
            },
            notes: NotesSettings {
                path_prefix: "/".to_string(),
            },
            custom_properties: CustomProperties {
                properties: vec![
                    CustomProperty::named("publishedOn").with_date(Locale::EnUs, Some(DateStyle::Full)),
                    CustomProperty::named("updatedOn").with_date(Locale::EnUs, Some(DateStyle::Full)),
                    CustomProperty::at_path("props").with_date(Locale::EnUs, None),
                ],
            },
            panel: Panel {
                incoming_links: false,
                outgoing_links: false,
            },
            tags: Tags { map: tag_map },
        }
    }
}
