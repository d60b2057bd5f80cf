use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

/// Writes match lines one whole line at a time.
///
/// The sink and the optional path collection sit behind the same lock, so the
/// collected order is exactly the printed order.
pub struct ResultReporter {
    inner: Mutex<Inner>,
}

struct Inner {
    out: Box<dyn Write + Send>,
    matches: usize,
    paths: Option<Vec<PathBuf>>,
}

impl ResultReporter {
    pub fn new(out: Box<dyn Write + Send>, collect_paths: bool) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                matches: 0,
                paths: collect_paths.then(Vec::new),
            }),
        }
    }

    /// Emit `path` as one line and flush. No deduplication.
    ///
    /// A failing sink is logged and otherwise ignored; the search keeps going.
    pub fn report(&self, path: &Path) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Inner { out, matches, paths } = &mut *inner;

        let written = write_line(out, path).and_then(|()| out.flush());
        if let Err(e) = written {
            warn!(path = %path.display(), error = %e, "Failed to write match");
        }

        *matches += 1;
        if let Some(paths) = paths {
            paths.push(path.to_path_buf());
        }
    }

    /// Number of `report` calls so far, and the collected paths (empty unless
    /// collection was enabled). Collected paths are handed over, not copied.
    pub fn finish(&self) -> (usize, Vec<PathBuf>) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let paths = inner.paths.as_mut().map(std::mem::take).unwrap_or_default();
        (inner.matches, paths)
    }
}

/// Raw path bytes on Unix, so non-UTF-8 names print as the path they are.
#[cfg(unix)]
fn write_line<W: Write + ?Sized>(out: &mut W, path: &Path) -> std::io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_line<W: Write + ?Sized>(out: &mut W, path: &Path) -> std::io::Result<()> {
    writeln!(out, "{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn one_line_per_report_without_dedup() {
        let buf = Shared::default();
        let reporter = ResultReporter::new(Box::new(buf.clone()), true);

        reporter.report(Path::new("root/a/target"));
        reporter.report(Path::new("root/a/target"));

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "root/a/target\nroot/a/target\n");

        let (matches, paths) = reporter.finish();
        assert_eq!(matches, 2);
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn paths_empty_when_not_collecting() {
        let reporter = ResultReporter::new(Box::new(io::sink()), false);
        reporter.report(Path::new("x/y"));

        let (matches, paths) = reporter.finish();
        assert_eq!(matches, 1);
        assert!(paths.is_empty());
    }

    #[test]
    fn broken_sink_still_counts() {
        let reporter = ResultReporter::new(Box::new(Broken), true);
        reporter.report(Path::new("x/y"));

        let (matches, paths) = reporter.finish();
        assert_eq!(matches, 1);
        assert_eq!(paths, vec![PathBuf::from("x/y")]);
    }
}
