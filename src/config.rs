//! Command-line configuration for the `pfind` binary
//!
//! - CLI argument parsing using clap derive macros
//! - Validation into a [`FindConfig`]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::FindError;
use crate::SearchBuilder;

/// Find every entry with a given name under a directory, one thread per directory
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pfind",
    version,
    about = "Find every entry with a given name under a directory, one thread per directory",
    after_help = "EXAMPLES:\n    \
        pfind . Cargo.toml\n    \
        pfind /srv/data .git --stats\n    \
        pfind -v ~/src mod.rs --concurrent-listing"
)]
pub struct CliArgs {
    /// Directory to search
    #[arg(value_name = "ROOT")]
    pub root: OsString,

    /// Exact file or directory name to look for
    #[arg(value_name = "NAME")]
    pub name: OsString,

    /// Verbose logging to stderr (unreadable directories, spawn failures)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Allow directory listings to run concurrently instead of one at a time
    #[arg(long)]
    pub concurrent_listing: bool,

    /// Print a summary line to stderr when the search completes
    #[arg(short = 's', long)]
    pub stats: bool,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct FindConfig {
    pub root: PathBuf,
    pub target: OsString,
    pub verbose: bool,
    pub serialize_listing: bool,
    pub show_stats: bool,
}

impl FindConfig {
    /// Validate parsed arguments. Empty strings count as missing.
    pub fn from_args(args: CliArgs) -> Result<Self, FindError> {
        if args.root.is_empty() {
            return Err(FindError::MissingArgument("root directory"));
        }
        if args.name.is_empty() {
            return Err(FindError::MissingArgument("target filename"));
        }

        Ok(Self {
            root: PathBuf::from(args.root),
            target: args.name,
            verbose: args.verbose,
            serialize_listing: !args.concurrent_listing,
            show_stats: args.stats,
        })
    }

    /// A builder for this search, writing to standard output.
    pub fn builder(&self) -> SearchBuilder {
        crate::search()
            .root(self.root.clone())
            .target(self.target.clone())
            .serialize_listing(self.serialize_listing)
    }
}
