use std::io;
use std::path::Path;

use crate::entry::RawEntry;

/// The provider behind [`DirectoryAccess`](crate::access::DirectoryAccess):
/// lists directory slots and answers "is this a directory?".
///
/// Implement this to search something other than the local filesystem, or to
/// feed the search engine listings the real filesystem never produces (`.`/`..`
/// slots, identity-less slots, failing type checks).
///
/// # Thread Safety
///
/// `Send + Sync` are required: one source is shared by every worker thread.
/// The engine still serializes `list_entries` behind a single lock unless
/// `.serialize_listing(false)` is set on the builder, so implementations need
/// not make listing itself reentrant.
///
/// # Error Handling
///
/// Return `Err` freely. The engine never propagates these: a failed listing
/// becomes an empty one and a failed type check means "not a directory".
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use pfind::{RawEntry, Source};
///
/// /// A flat source: the root holds two files and nothing else.
/// struct Flat;
///
/// impl Source for Flat {
///     fn list_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
///         if path == Path::new("root") {
///             Ok(vec![RawEntry::new("a.txt"), RawEntry::new("b.txt")])
///         } else {
///             Err(io::ErrorKind::NotFound.into())
///         }
///     }
///
///     fn stat_type(&self, path: &Path) -> io::Result<bool> {
///         Ok(path == Path::new("root"))
///     }
/// }
/// ```
pub trait Source: Send + Sync {
    /// List every slot of the directory at `path`, in listing order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>>;

    /// `Ok(true)` when `path` is a directory.
    fn stat_type(&self, path: &Path) -> io::Result<bool>;

    /// Confirm the search can start at `root`.
    ///
    /// The default accepts any path `stat_type` reports as a directory.
    fn check_root(&self, root: &Path) -> io::Result<()> {
        if self.stat_type(root)? {
            Ok(())
        } else {
            Err(io::Error::other("not a directory"))
        }
    }
}
