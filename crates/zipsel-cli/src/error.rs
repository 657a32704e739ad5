//! Error conversion utilities for CLI.
//!
//! Converts zipsel-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use zipsel_core::ArchiveError;

/// Converts `ArchiveError` to a user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    match err {
        ArchiveError::PathTraversalAttempt { path } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ArchiveError::IncorrectPassword => {
            anyhow!(
                "Wrong or missing password for '{}'\n\
                 HINT: Pass the archive password with --password.",
                archive.display()
            )
        }
        ArchiveError::InvalidPattern { pattern, reason } => {
            anyhow!(
                "Invalid pattern '{pattern}': {reason}\n\
                 HINT: Patterns with '(', '[', '|' or anchors are treated as regexes."
            )
        }
        ArchiveError::CorruptArchive { reason } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The file may be corrupted or not a ZIP archive.",
                archive.display(),
                reason
            )
        }
        ArchiveError::PermissionDenied { path } => {
            anyhow!("Permission denied: {}", path.display())
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds context to a result of an archive operation
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}
