//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use quire_config::CONFIG_ENV_VAR;
use std::path::PathBuf;

/// Quire - site configuration and excerpt tools.
#[derive(Debug, Parser)]
#[command(name = "quire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain text (TOML for config output)
    Text,
    /// JSON
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the excerpt from a rendered page
    Excerpt(ExcerptArgs),

    /// Apply a date filter
    Date(DateArgs),

    /// Inspect and manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the excerpt command.
#[derive(Debug, Parser)]
pub struct ExcerptArgs {
    /// Rendered HTML file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Input is a JSON page record with a `renderedContent` field
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the date command.
#[derive(Debug, Parser)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD or an RFC 3339 timestamp
    pub date: String,

    /// Template filter to apply
    #[arg(long, value_enum, default_value = "readable", conflicts_with = "property")]
    pub filter: DateFilterArg,

    /// Render as the named custom property would be shown instead
    #[arg(short, long)]
    pub property: Option<String>,
}

/// Template date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DateFilterArg {
    /// `readableDate`
    Readable,
    /// `htmlDateString`
    Html,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Only the site builder section
        #[arg(long, conflicts_with = "template")]
        site: bool,
        /// Only the templating engine section
        #[arg(long)]
        template: bool,
    },

    /// Load and validate the configuration
    Check,

    /// Write the default configuration to a file
    Init {
        /// Destination (defaults to --config or ./quire.toml)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
