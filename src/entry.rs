use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// What to look for and where to start. Immutable once the search begins;
/// every worker reads it through the shared context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Directory the search starts in. Every reported path is prefixed with it.
    pub root: PathBuf,

    /// Exact entry name to look for.
    pub target: OsString,
}

impl SearchRequest {
    pub fn new(root: impl Into<PathBuf>, target: impl Into<OsString>) -> Self {
        Self {
            root: root.into(),
            target: target.into(),
        }
    }
}

/// One slot of a directory listing, as produced by a [`Source`](crate::traits::Source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// The entry's name within its parent directory.
    pub name: OsString,

    /// Whether the slot refers to an actual file (non-zero inode on Unix).
    /// Slots without identity are listing artifacts and are skipped.
    pub has_identity: bool,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            has_identity: true,
        }
    }

    /// A slot with no underlying file.
    pub fn vacant(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            has_identity: false,
        }
    }
}

/// A listing slot after [`DirectoryAccess`](crate::access::DirectoryAccess)
/// has classified it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub has_identity: bool,

    /// `false` when the type check failed, when the slot is skipped, or when
    /// the entry is anything other than a directory.
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// `.` and `..` and identity-less slots never take part in the search.
    pub fn is_searchable(&self) -> bool {
        self.has_identity && !is_dot_entry(&self.name)
    }
}

pub(crate) fn is_dot_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}
