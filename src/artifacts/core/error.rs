//! Error types for directory comparison
//!
//! Two kinds of failure reach the caller:
//!
//! - input validation (`RootNotFound`, `RootNotADirectory`), raised before any
//!   traversal begins
//! - I/O failures discovered mid-walk (`Io`, `Walk`), which abort the whole
//!   comparison instead of producing a partial report

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A supplied root does not exist.
    #[error("directory not found: {0}")]
    RootNotFound(PathBuf),

    /// A supplied root exists but is not a directory.
    #[error("not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// Reading a directory listing, a file's metadata or its content failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recursive enumeration of an exclusive subtree failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl CompareError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        CompareError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn walk(path: impl AsRef<Path>, source: walkdir::Error) -> Self {
        CompareError::Walk {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether the error was raised while validating the roots.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CompareError::RootNotFound(_) | CompareError::RootNotADirectory(_)
        )
    }
}

pub type CompareResult<T> = Result<T, CompareError>;
