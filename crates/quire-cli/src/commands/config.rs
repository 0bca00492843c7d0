//! Config command implementation.

use crate::cli::{CliFormat, ConfigAction, ConfigArgs};
use crate::config::ConfigSource;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quire_config::QuireConfig;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    source: &ConfigSource,
    cwd: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show { site, template } => {
            let config = source.load()?;
            println!("{}", show_config(&config, site, template, formatter.format())?);
        }
        ConfigAction::Check => {
            source.load()?;
            match source.path() {
                Some(path) => println!(
                    "{}",
                    formatter.success(&format!("Configuration is valid ({})", path.display()))
                ),
                None => println!(
                    "{}",
                    formatter.warning("No config file found; built-in defaults are valid")
                ),
            }
        }
        ConfigAction::Init { path, force } => {
            let target = path.unwrap_or_else(|| source.init_target(cwd));
            init_config(&target, force)?;
            println!("{}", formatter.success(&format!("Wrote default configuration to {}", target.display())));
            println!("{}", formatter.info("Edit the [site] table before publishing"));
        }
    }
    Ok(())
}

/// Render the effective configuration, whole or one section.
fn show_config(config: &QuireConfig, site: bool, template: bool, format: CliFormat) -> Result<String> {
    let rendered = match (format, site, template) {
        (CliFormat::Json, true, _) => config.site.to_json()?,
        (CliFormat::Json, _, true) => config.template.to_json()?,
        (CliFormat::Json, false, false) => config.to_json()?,
        (CliFormat::Text, true, _) => config.site.to_toml()?,
        (CliFormat::Text, _, true) => config.template.to_toml()?,
        (CliFormat::Text, false, false) => config.to_toml()?,
    };
    Ok(rendered)
}

/// Write the defaults to `target`, refusing to clobber unless forced.
fn init_config(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        return Err(CliError::NotPermitted(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(target, QuireConfig::default().to_toml()?)?;
    Ok(())
}
