//! ninepatch-fix CLI - strip the red tint from nine-patch PNG borders.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::fix::{self, FixArgs};
use commands::{Cli, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.fix.path.is_none() {
        eprintln!("Please specify path to resources");
        eprintln!("Usage: ninepatch-fix [OPTIONS] <PATH>. Use --help for more information.");
        return ExitCode::Usage.into();
    }

    let args = FixArgs::with_config(cli.fix, &AppConfig::load());

    let exit_code = match fix::run(&args) {
        Ok(result) => {
            tracing::debug!("Run summary: {:?}", result.summary);
            result.exit_code
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Failures
        }
    };

    exit_code.into()
}
