//! Error types for mount target utilities.
//!
//! Path matching never fails, it only reports "no match". Everything that can
//! fail (enumerating a mount target directory, strict parsing) returns a
//! [`CsiError`], which derives [`thiserror::Error`] and keeps the underlying
//! I/O cause reachable through [`std::error::Error::source`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for `libcsi` operations.
#[derive(Debug, Error)]
pub enum CsiError {
    /// Walking the directory tree failed on the root or on some entry.
    #[error("failed to enumerate files under {}: {source}", .path.display())]
    Walk {
        /// Root directory of the enumeration.
        path: PathBuf,
        /// Underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// The enumeration root exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A file path under the root could not be turned into a UTF-8 key.
    #[error("non-UTF8 path under mount target: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// The caller supplied an invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An unclassified internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CsiError {
    /// Create a [`CsiError::Internal`] from anything that implements
    /// [`std::fmt::Display`].
    pub fn internal<E: std::fmt::Display>(e: E) -> Self {
        Self::Internal(e.to_string())
    }

    /// Kind of the underlying I/O error, if the failure came from the
    /// filesystem.
    ///
    /// Lets callers tell "not found" from "permission denied" without the
    /// crate promising any finer error categories.
    pub fn io_error_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Walk { source, .. } => source.io_error().map(io::Error::kind),
            _ => None,
        }
    }
}
