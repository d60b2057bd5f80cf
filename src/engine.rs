use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::access::DirectoryAccess;
use crate::entry::SearchRequest;
use crate::error::FindError;
use crate::reporter::ResultReporter;
use crate::results::{Results, ScanStats};
use crate::worker::{SearchContext, SearchWorker};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub request:  SearchRequest,
    pub access:   DirectoryAccess,
    pub reporter: ResultReporter,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Coordinate a search: confirm the root can be entered, dispatch the root
/// worker, and block until the tracker sees every worker retired.
///
/// Called by `SearchBuilder::run()` after argument validation. No join
/// handles are kept; completion is detected by the tracker alone.
pub(crate) fn run(opts: EngineOptions) -> Result<Results, FindError> {
    let EngineOptions { request, access, reporter } = opts;

    access
        .check_root(&request.root)
        .map_err(|source| FindError::RootInaccessible {
            path: request.root.clone(),
            source,
        })?;

    info!(
        root = %request.root.display(),
        target = %request.target.to_string_lossy(),
        "Starting search"
    );

    let root = request.root.clone();
    let ctx = Arc::new(SearchContext::new(request, access, reporter));

    let start = Instant::now();
    ctx.tracker.start();
    SearchWorker::new(Arc::clone(&ctx), root).dispatch();
    ctx.tracker.wait_until_zero();
    let duration = start.elapsed();

    let (matches, paths) = ctx.reporter.finish();
    let stats = ScanStats::compute(
        ctx.workers.load(Ordering::Relaxed),
        ctx.entries.load(Ordering::Relaxed),
        duration,
    );

    info!(
        dirs = stats.dirs,
        entries = stats.entries,
        matches,
        duration_secs = duration.as_secs_f64(),
        "Search completed"
    );

    Ok(Results { matches, paths, stats })
}
