use std::path::Path;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::entry::{DirectoryEntry, RawEntry};
use crate::traits::Source;

/// Shared front for the [`Source`]: serializes listings and classifies slots.
///
/// With `serialize` on (the default), at most one `list_entries` call runs at
/// any instant across all workers. Type checks run outside the lock.
pub struct DirectoryAccess {
    source: Box<dyn Source>,
    guard: Option<Mutex<()>>,
}

impl DirectoryAccess {
    pub fn new(source: Box<dyn Source>, serialize: bool) -> Self {
        Self {
            source,
            guard: serialize.then(|| Mutex::new(())),
        }
    }

    /// List and classify the directory at `path`.
    ///
    /// Any listing failure yields an empty sequence: the caller simply has
    /// nothing to dispatch and nothing to match.
    pub fn list(&self, path: &Path) -> Vec<DirectoryEntry> {
        let raw = match self.list_raw(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Listing failed, treating as empty");
                return Vec::new();
            }
        };

        raw.into_iter()
            .map(|RawEntry { name, has_identity }| {
                let mut entry = DirectoryEntry {
                    name,
                    has_identity,
                    is_directory: false,
                };
                if entry.is_searchable() {
                    entry.is_directory = self.is_directory(&path.join(&entry.name));
                }
                entry
            })
            .collect()
    }

    /// A failed type check counts as "not a directory".
    pub fn is_directory(&self, path: &Path) -> bool {
        match self.source.stat_type(path) {
            Ok(is_dir) => is_dir,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Type check failed, not descending");
                false
            }
        }
    }

    pub fn check_root(&self, root: &Path) -> std::io::Result<()> {
        self.source.check_root(root)
    }

    fn list_raw(&self, path: &Path) -> std::io::Result<Vec<RawEntry>> {
        let _held = self
            .guard
            .as_ref()
            .map(|m| m.lock().unwrap_or_else(PoisonError::into_inner));
        self.source.list_entries(path)
    }
}
