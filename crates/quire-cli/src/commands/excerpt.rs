//! Excerpt command implementation.

use crate::cli::ExcerptArgs;
use crate::error::Result;
use crate::output::Formatter;
use quire_config::QuireConfig;
use quire_excerpt::{Document, ExcerptOutcome};
use std::io::Read;
use std::path::Path;

/// Execute the excerpt command.
pub fn execute_excerpt(args: ExcerptArgs, config: &QuireConfig, formatter: &Formatter) -> Result<()> {
    let input = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let outcome = extract(&input, args.json, config)?;
    if let Some(output) = formatter.format_excerpt(&outcome)? {
        println!("{}", output);
    }
    Ok(())
}

/// Run the configured excerpt rules over raw input.
///
/// Plain input is taken as rendered HTML; JSON input is a page record.
fn extract(input: &str, json: bool, config: &QuireConfig) -> Result<ExcerptOutcome> {
    let document = if json {
        Document::from_json(input)?
    } else {
        Document::new(input)
    };
    Ok(config.template.excerpt_extractor().extract(&document))
}
