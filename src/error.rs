use std::path::PathBuf;
use thiserror::Error;

/// Usage errors: both stop a search before it starts.
///
/// Nothing that happens once workers are running is surfaced here: unreadable
/// directories collapse to empty listings and the walk carries on.
#[derive(Error, Debug)]
pub enum FindError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unable to search directory {}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FindError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RootInaccessible { path, .. } => Some(path),
            Self::MissingArgument(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_inaccessible_carries_path() {
        let err = FindError::RootInaccessible {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.path(), Some(&PathBuf::from("/nope")));
        assert_eq!(err.to_string(), "unable to search directory /nope");
    }

    #[test]
    fn missing_argument_message() {
        let err = FindError::MissingArgument("target filename");
        assert_eq!(err.to_string(), "missing target filename");
        assert!(err.path().is_none());
    }
}
