use std::fs;
use std::io;
use std::path::Path;

use crate::entry::RawEntry;
use crate::traits::Source;

/// [`Source`] backed by the local filesystem.
///
/// Symbolic links are reported as non-directories (`symlink_metadata`), so the
/// walk never follows them and cannot cycle. A link can still match by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl Source for FsSource {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        for dent in fs::read_dir(path)? {
            // Unreadable slot: no name to match, nothing to descend into.
            let Ok(dent) = dent else { continue };
            entries.push(RawEntry {
                has_identity: inode(&dent) != 0,
                name: dent.file_name(),
            });
        }
        Ok(entries)
    }

    fn stat_type(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::symlink_metadata(path)?.file_type().is_dir())
    }

    /// The root must be openable as a directory, not just exist.
    fn check_root(&self, root: &Path) -> io::Result<()> {
        fs::read_dir(root).map(drop)
    }
}

#[cfg(unix)]
fn inode(dent: &fs::DirEntry) -> u64 {
    use std::os::unix::fs::DirEntryExt;
    dent.ino()
}

#[cfg(not(unix))]
fn inode(_dent: &fs::DirEntry) -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_files_and_dirs_without_dot_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut names: Vec<_> = FsSource
            .list_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|e| {
                assert!(e.has_identity);
                e.name.into_string().unwrap()
            })
            .collect();
        names.sort();

        assert_eq!(names, vec!["file.txt", "sub"]);
    }

    #[test]
    fn stat_type_distinguishes_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        assert!(FsSource.stat_type(dir.path()).unwrap());
        assert!(!FsSource.stat_type(&dir.path().join("file.txt")).unwrap());
        assert!(FsSource.stat_type(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn check_root_rejects_files_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(FsSource.check_root(dir.path()).is_ok());
        assert!(FsSource.check_root(&file).is_err());
        assert!(FsSource.check_root(&dir.path().join("missing")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dirs_are_not_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        assert!(FsSource.stat_type(&dir.path().join("real")).unwrap());
        assert!(!FsSource.stat_type(&dir.path().join("link")).unwrap());
    }
}
