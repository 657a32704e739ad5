//! Error types for archive selection, creation and extraction.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while planning, creating or extracting archives.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pattern could not be used at match time (e.g. malformed regex).
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The raw pattern string.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// An include/exclude target does not exist and is not a recognizable
    /// pattern. Non-fatal: accumulated as a planning diagnostic.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The filesystem denied access to a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// Incompatible or incomplete configuration, detected before any I/O.
    #[error("configuration error: {reason}")]
    ConfigurationError {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// The input file is not a structurally valid ZIP archive.
    #[error("corrupt archive: {reason}")]
    CorruptArchive {
        /// What the structural check found.
        reason: String,
    },

    /// An archive entry would resolve outside the destination directory.
    /// Always fatal: the whole extraction is aborted.
    #[error("path traversal attempt: {path}")]
    PathTraversalAttempt {
        /// The stored entry path that attempted the escape.
        path: PathBuf,
    },

    /// A destination file already exists and overwriting is disabled.
    /// Per-entry: aggregated in the extraction report.
    #[error("destination already exists: {path}")]
    DestinationExists {
        /// The existing destination path.
        path: PathBuf,
    },

    /// The supplied password does not decrypt an encrypted entry.
    /// Always fatal.
    #[error("incorrect password for encrypted archive")]
    IncorrectPassword,
}

impl ArchiveError {
    /// Wraps an I/O error, promoting permission failures to
    /// [`ArchiveError::PermissionDenied`] when the offending path is known.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(err)
        }
    }

    /// Returns `true` if this error represents a security violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipsel_core::ArchiveError;
    ///
    /// let err = ArchiveError::PathTraversalAttempt {
    ///     path: PathBuf::from("../../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ArchiveError::IncorrectPassword;
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversalAttempt { .. })
    }

    /// Returns `true` if this error must abort the whole operation.
    ///
    /// Per-entry conditions (`DestinationExists`) and planning diagnostics
    /// (`PathNotFound`) are recoverable; everything else is fatal.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::DestinationExists { .. } | Self::PathNotFound { .. }
        )
    }
}
