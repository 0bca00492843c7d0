//! Quire Config
//!
//! Typed configuration for the two frameworks that build the site:
//!
//! - [`TemplateConfig`]: directory mapping, passthrough copies, date filters
//!   and the excerpt shortcode for the templating engine
//! - [`SiteConfig`]: navigation, theme and custom properties for the site
//!   builder
//!
//! Both are loaded from a single `quire.toml`, validated up front, and
//! exported as JSON in the shape each framework expects.
//!
//! # Examples
//!
//! ```no_run
//! use quire_config::QuireConfig;
//!
//! let config = QuireConfig::from_file("quire.toml")?;
//! println!("{}", config.site.to_json()?);
//! # Ok::<(), quire_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod filters;
mod site;
mod template;

pub use config::{QuireConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use error::ConfigError;
pub use filters::{parse_date, DateFilters, HTML_DATE_FORMAT, READABLE_DATE_FORMAT};
pub use site::{
    CustomProperties, CustomProperty, DateFormat, DateOptions, DateStyle, Locale, NotesQuery,
    NotesSettings, Panel, PropertyOptions, Sidebar, SidebarGroup, SidebarLink, SidebarSection,
    SiteConfig, Tags, Theme, ThemeColor, TreeOptions,
};
pub use template::{DirectoryMapping, ExcerptSettings, PassthroughCopy, TemplateConfig};
