use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    // Traversal
    #[error("cannot read directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve working directory")]
    WorkingDirectory(#[source] std::io::Error),

    // Config
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // Third-party extensibility
    #[error("reader error: {0}")]
    Reader(String),
}

impl FindError {
    /// Build a [`FindError::DirectoryRead`] for `path`.
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::DirectoryRead { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether this error ends the whole search.
    ///
    /// Every traversal and working-directory failure is fatal: the search
    /// returns no partial results. Only configuration errors are raised before
    /// any work starts, so callers can fix them and try again.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidConfig(_))
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to FindError
// ---------------------------------------------------------------------------

pub(crate) fn from_ignore(dir: &Path, err: ignore::Error) -> FindError {
    let mut path = dir.to_path_buf();
    let mut err = err;
    loop {
        err = match err {
            ignore::Error::WithPath { path: p, err } => {
                path = p;
                *err
            }
            ignore::Error::WithDepth { err, .. } => *err,
            ignore::Error::WithLineNumber { err, .. } => *err,
            ignore::Error::Io(source) => return FindError::DirectoryRead { path, source },
            other => {
                return FindError::DirectoryRead {
                    path,
                    source: std::io::Error::other(other.to_string()),
                }
            }
        };
    }
}
