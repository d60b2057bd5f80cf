use std::path::PathBuf;
use std::time::Duration;

/// The output of a completed search.
///
/// `paths` is opt-in and disabled by default to avoid holding every match in
/// memory when the caller only reads the output stream. Enable it on the
/// builder with `.collect_paths(true)`.
#[derive(Debug)]
pub struct Results {
    /// Total number of match lines reported. Duplicates count separately.
    pub matches: usize,

    /// Reported paths, in the order they were written.
    /// Only populated if `.collect_paths(true)` was set on the builder.
    pub paths: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,
}

/// Statistics for a completed scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanStats {
    /// Directories searched, one per worker, root included.
    pub dirs: usize,

    /// Entries examined across all listings, excluding `.`, `..` and
    /// identity-less slots.
    pub entries: usize,

    /// Wall-clock time from the first worker's dispatch until the last retired.
    pub duration: Duration,

    /// Entries examined per second, clamped to 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(dirs: usize, entries: usize, duration: Duration) -> Self {
        let eps = if duration.as_secs_f64() > 0.0 {
            (entries as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            dirs,
            entries,
            duration,
            entries_per_sec: eps,
        }
    }
}
