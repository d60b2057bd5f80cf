//! # pfind
//!
//! Concurrent recursive filename search, one thread per directory.
//!
//! Given a root directory and a target name, pfind reports every path under
//! the root at which an entry with that name exists. Each directory is
//! searched by its own worker thread; a worker dispatches a new thread for
//! every subdirectory it lists and never waits for it. Completion is
//! detected by a shared counter of outstanding workers rather than by
//! joining threads.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let results = pfind::search()
//!     .root("src")
//!     .target("mod.rs")
//!     .output(std::io::sink())
//!     .collect_paths(true)
//!     .run()
//!     .unwrap();
//!
//! for path in &results.paths {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Output
//!
//! By default every match is written to standard output as soon as it is
//! found, one whole line per match, in no particular order. The same name in
//! `k` directories yields `k` lines.
//!
//! # Custom Sources
//!
//! Implement [`Source`] to search something other than the local filesystem.
//! See its documentation for an example.

#![forbid(unsafe_code)]

pub mod config;

mod access;
mod builder;
mod engine;
mod entry;
mod error;
mod fs;
mod reporter;
mod results;
mod tracker;
mod traits;
mod worker;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use access::DirectoryAccess;
pub use builder::SearchBuilder;
pub use entry::{DirectoryEntry, RawEntry, SearchRequest};
pub use error::FindError;
pub use fs::FsSource;
pub use reporter::ResultReporter;
pub use results::{Results, ScanStats};
pub use tracker::ActiveTaskTracker;
pub use traits::Source;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use pfind::{RawEntry, Source};
///
/// struct Tree;
///
/// impl Source for Tree {
///     fn list_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
///         match path.to_str() {
///             Some("root") => Ok(vec![RawEntry::new("a"), RawEntry::new("notes.txt")]),
///             Some("root/a") => Ok(vec![RawEntry::new("notes.txt")]),
///             _ => Err(io::ErrorKind::NotFound.into()),
///         }
///     }
///
///     fn stat_type(&self, path: &Path) -> io::Result<bool> {
///         Ok(matches!(path.to_str(), Some("root") | Some("root/a")))
///     }
/// }
///
/// let results = pfind::search()
///     .source(Tree)
///     .root("root")
///     .target("notes.txt")
///     .output(io::sink())
///     .run()
///     .unwrap();
///
/// assert_eq!(results.matches, 2);
/// assert_eq!(results.stats.dirs, 2);
/// ```
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
