//! pfind - concurrent recursive filename search
//!
//! Entry point for the CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pfind::config::{CliArgs, FindConfig};
use pfind::FindError;
use tracing_subscriber::EnvFilter;

/// Exit status for bad arguments or an unsearchable root.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.downcast_ref::<FindError>().is_some() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run() -> Result<()> {
    // Missing positionals: clap prints usage to stderr and exits 2.
    let args = CliArgs::parse();

    let config = FindConfig::from_args(args)?;
    setup_logging(config.verbose);

    let results = config.builder().run()?;

    if config.show_stats {
        eprintln!(
            "{} matches in {} directories ({} entries) in {:.3}s",
            results.matches,
            results.stats.dirs,
            results.stats.entries,
            results.stats.duration.as_secs_f64(),
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pfind=debug,warn")
    } else {
        EnvFilter::new("pfind=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
