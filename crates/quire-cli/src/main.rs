//! Quire CLI - site configuration and excerpt tools.

use clap::Parser;
use quire_cli::commands;
use quire_cli::{Cli, Command, ConfigSource, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(cli.format, !cli.no_color);
    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

/// Log to stderr so command output stays pipeable
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli, formatter: &Formatter) -> quire_cli::Result<()> {
    let cwd = std::env::current_dir()?;
    let source = ConfigSource::resolve(cli.config.as_deref(), &cwd);

    match cli.command {
        Command::Excerpt(args) => {
            let config = source.load()?;
            commands::execute_excerpt(args, &config, formatter)?;
        }
        Command::Date(args) => {
            let config = source.load()?;
            commands::execute_date(args, &config, formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &source, &cwd, formatter)?;
        }
    }

    Ok(())
}
