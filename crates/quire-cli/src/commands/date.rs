//! Date command implementation.

use crate::cli::{DateArgs, DateFilterArg};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quire_config::{parse_date, QuireConfig};

/// Execute the date command.
pub fn execute_date(args: DateArgs, config: &QuireConfig, formatter: &Formatter) -> Result<()> {
    let (label, value) = render_date(&args, config)?;
    println!("{}", formatter.format_value(label, &value)?);
    Ok(())
}

/// Apply the requested filter or property format, returning a label for the
/// output and the rendered date.
fn render_date(args: &DateArgs, config: &QuireConfig) -> Result<(&'static str, String)> {
    let date = parse_date(&args.date)?;

    if let Some(key) = &args.property {
        let property = config
            .site
            .custom_properties
            .properties
            .iter()
            .find(|p| p.key() == key.as_str())
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown custom property '{}'", key)))?;
        let rendered = property.format_date(&date.date_naive()).ok_or_else(|| {
            CliError::InvalidInput(format!("Custom property '{}' has no date options", key))
        })??;
        return Ok(("property", rendered));
    }

    let filters = &config.template.filters;
    match args.filter {
        DateFilterArg::Readable => Ok(("readableDate", filters.readable_date(&date)?)),
        DateFilterArg::Html => Ok(("htmlDateString", filters.html_date_string(&date)?)),
    }
}
