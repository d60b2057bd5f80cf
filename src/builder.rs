use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use crate::access::DirectoryAccess;
use crate::engine::{run, EngineOptions};
use crate::entry::SearchRequest;
use crate::error::FindError;
use crate::fs::FsSource;
use crate::reporter::ResultReporter;
use crate::results::Results;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`pfind::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let results = pfind::search()
///     .root("projects")
///     .target("Cargo.toml")
///     .collect_paths(true)
///     .run()?;
/// ```
pub struct SearchBuilder {
    root:              Option<PathBuf>,
    target:            Option<OsString>,
    source:            Box<dyn Source>,
    output:            Box<dyn Write + Send>,
    collect_paths:     bool,
    serialize_listing: bool,
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self {
            root:              None,
            target:            None,
            source:            Box::new(FsSource),
            output:            Box::new(std::io::stdout()),
            collect_paths:     false,
            serialize_listing: true,
        }
    }
}

impl SearchBuilder {
    // ── Request ───────────────────────────────────────────────────────────

    /// Directory to start in. Every reported path is prefixed with it as given.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Exact entry name to look for. Files and directories both match.
    pub fn target(mut self, name: impl Into<OsString>) -> Self {
        self.target = Some(name.into());
        self
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Replace the filesystem with another [`Source`]. Defaults to [`FsSource`].
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Box::new(s);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Where match lines go. Defaults to standard output.
    ///
    /// Each line is flushed as soon as it is written; wrap slow sinks yourself
    /// only if you can tolerate delayed output.
    pub fn output(mut self, w: impl Write + Send + 'static) -> Self {
        self.output = Box::new(w);
        self
    }

    /// Collect matched paths into [`Results::paths`].
    ///
    /// Disabled by default.
    pub fn collect_paths(mut self, yes: bool) -> Self {
        self.collect_paths = yes;
        self
    }

    /// Serialize directory listing across all workers. Enabled by default.
    ///
    /// Only turn this off for sources known to be safe to list concurrently;
    /// [`FsSource`] on a platform with a reentrant `readdir` qualifies.
    pub fn serialize_listing(mut self, yes: bool) -> Self {
        self.serialize_listing = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return results.
    ///
    /// Blocks until every directory under the root has been searched.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the root or target is missing or empty, or when the
    /// root cannot be entered. Nothing is searched in either case. Failures
    /// below the root never surface: an unreadable directory is searched as
    /// if it were empty.
    pub fn run(self) -> Result<Results, FindError> {
        let root = self
            .root
            .filter(|r| !r.as_os_str().is_empty())
            .ok_or(FindError::MissingArgument("root directory"))?;
        let target = self
            .target
            .filter(|t| !t.is_empty())
            .ok_or(FindError::MissingArgument("target filename"))?;

        run(EngineOptions {
            request:  SearchRequest::new(root, target),
            access:   DirectoryAccess::new(self.source, self.serialize_listing),
            reporter: ResultReporter::new(self.output, self.collect_paths),
        })
    }
}
