use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::{trace, warn};

use crate::access::DirectoryAccess;
use crate::entry::SearchRequest;
use crate::reporter::ResultReporter;
use crate::tracker::ActiveTaskTracker;

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Everything the workers share. One per search, handed to every worker by
/// `Arc`; each mutable part carries its own lock.
pub(crate) struct SearchContext {
    pub request:  SearchRequest,
    pub access:   DirectoryAccess,
    pub tracker:  ActiveTaskTracker,
    pub reporter: ResultReporter,
    pub workers:  AtomicUsize,
    pub entries:  AtomicUsize,
}

impl SearchContext {
    pub fn new(request: SearchRequest, access: DirectoryAccess, reporter: ResultReporter) -> Self {
        Self {
            request,
            access,
            tracker:  ActiveTaskTracker::new(),
            reporter,
            workers:  AtomicUsize::new(0),
            entries:  AtomicUsize::new(0),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchWorker
// ---------------------------------------------------------------------------

/// Searches one directory: lists it, dispatches a worker per subdirectory,
/// reports matches, then retires from the tracker.
#[derive(Clone)]
pub(crate) struct SearchWorker {
    ctx:  Arc<SearchContext>,
    path: PathBuf,
}

impl SearchWorker {
    pub fn new(ctx: Arc<SearchContext>, path: PathBuf) -> Self {
        Self { ctx, path }
    }

    /// Run on a new detached thread. The tracker must already count this worker.
    ///
    /// If the OS refuses a thread, the worker runs on the caller's thread
    /// instead, so its decrement still happens.
    pub fn dispatch(self) {
        let fallback = self.clone();
        let spawned = thread::Builder::new()
            .name("pfind-worker".into())
            .spawn(move || self.run());

        if let Err(e) = spawned {
            warn!(path = %fallback.path.display(), error = %e, "Thread spawn failed, searching inline");
            fallback.run();
        }
    }

    pub fn run(self) {
        let ctx = &self.ctx;
        ctx.workers.fetch_add(1, Ordering::Relaxed);

        // Listing
        let listing = ctx.access.list(&self.path);
        let searchable: Vec<_> = listing.iter().filter(|e| e.is_searchable()).collect();
        ctx.entries.fetch_add(searchable.len(), Ordering::Relaxed);
        trace!(path = %self.path.display(), entries = searchable.len(), "Listed");

        // Dispatching: count the child before it can possibly run.
        for entry in searchable.iter().filter(|e| e.is_directory) {
            ctx.tracker.increment();
            SearchWorker::new(Arc::clone(ctx), self.path.join(&entry.name)).dispatch();
        }

        // Matching: one line per matching slot, file or directory alike.
        let target = &ctx.request.target;
        for _ in searchable.iter().filter(|e| e.name == *target) {
            ctx.reporter.report(&self.path.join(target));
        }

        // Retiring
        if ctx.tracker.decrement_and_check() {
            trace!(path = %self.path.display(), "Last worker retired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::Path;

    use crate::entry::RawEntry;
    use crate::traits::Source;

    /// In-memory tree: directory path -> slots. Keys of `dirs` and entries of
    /// `unlistable` are directories; `bad_stat` paths fail their type check.
    #[derive(Default)]
    struct MemTree {
        dirs:       HashMap<PathBuf, Vec<RawEntry>>,
        unlistable: Vec<PathBuf>,
        bad_stat:   Vec<PathBuf>,
    }

    impl MemTree {
        fn dir(mut self, path: &str, slots: Vec<RawEntry>) -> Self {
            self.dirs.insert(PathBuf::from(path), slots);
            self
        }
    }

    impl Source for MemTree {
        fn list_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::ErrorKind::NotFound.into())
        }

        fn stat_type(&self, path: &Path) -> io::Result<bool> {
            if self.bad_stat.iter().any(|p| p == path) {
                return Err(io::ErrorKind::PermissionDenied.into());
            }
            Ok(self.dirs.contains_key(path) || self.unlistable.iter().any(|p| p == path))
        }
    }

    fn search(tree: MemTree, target: &str) -> (Arc<SearchContext>, Vec<PathBuf>) {
        let ctx = Arc::new(SearchContext::new(
            SearchRequest::new("root", target),
            DirectoryAccess::new(Box::new(tree), true),
            ResultReporter::new(Box::new(io::sink()), true),
        ));
        ctx.tracker.start();
        SearchWorker::new(Arc::clone(&ctx), PathBuf::from("root")).dispatch();
        ctx.tracker.wait_until_zero();

        let (_, mut paths) = ctx.reporter.finish();
        paths.sort();
        (ctx, paths)
    }

    #[test]
    fn skips_dot_and_vacant_slots() {
        let tree = MemTree::default()
            .dir("root", vec![
                RawEntry::new("."),
                RawEntry::new(".."),
                RawEntry::vacant("target"),
                RawEntry::vacant("hidden"),
                RawEntry::new("sub"),
            ])
            .dir("root/hidden", vec![RawEntry::new("target")])
            .dir("root/sub", vec![RawEntry::new("target")]);

        let (ctx, paths) = search(tree, "target");

        assert_eq!(paths, vec![PathBuf::from("root/sub/target")]);
        assert_eq!(ctx.workers.load(Ordering::Relaxed), 2, "root and sub only");
        assert_eq!(ctx.tracker.outstanding(), 0);
    }

    #[test]
    fn dot_target_never_matches() {
        let tree = MemTree::default().dir("root", vec![RawEntry::new("."), RawEntry::new("..")]);

        let (_, paths) = search(tree, ".");
        assert!(paths.is_empty());
    }

    #[test]
    fn every_matching_slot_is_reported() {
        // Two slots sharing one name in one listing.
        let tree = MemTree::default()
            .dir("root", vec![RawEntry::new("target"), RawEntry::new("target")])
            .dir("root/target", vec![]);

        let (ctx, paths) = search(tree, "target");

        assert_eq!(paths, vec![PathBuf::from("root/target"); 2]);
        // The directory named `target` is listed twice, so it is searched twice.
        assert_eq!(ctx.workers.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn failed_type_check_still_matches_but_does_not_descend() {
        let mut tree = MemTree::default()
            .dir("root", vec![RawEntry::new("target")])
            .dir("root/target", vec![RawEntry::new("target")]);
        tree.bad_stat.push(PathBuf::from("root/target"));

        let (ctx, paths) = search(tree, "target");

        assert_eq!(paths, vec![PathBuf::from("root/target")]);
        assert_eq!(ctx.workers.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn unreadable_subdirectory_retires_cleanly() {
        let mut tree = MemTree::default().dir("root", vec![RawEntry::new("locked"), RawEntry::new("target")]);
        tree.unlistable.push(PathBuf::from("root/locked"));

        let (ctx, paths) = search(tree, "target");

        assert_eq!(paths, vec![PathBuf::from("root/target")]);
        assert_eq!(ctx.workers.load(Ordering::Relaxed), 2);
        assert_eq!(ctx.tracker.outstanding(), 0);
    }
}
