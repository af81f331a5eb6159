//! # actcheck CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! the validation pass.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use actcheck_cli::check::{run_check, CheckArgs};

/// Structural validator for GitHub Actions YAML.
///
/// Checks workflow files under `.github/workflows` for their required
/// `on` and `jobs` keys, and action definitions under `.github/actions`
/// for `name` and `runs`. Reports the first invalid file and exits
/// non-zero.
#[derive(Parser, Debug)]
#[command(name = "actcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("actcheck starting");

    match run_check(&cli.check) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
