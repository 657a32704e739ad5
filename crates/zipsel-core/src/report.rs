//! Operation reports for archive creation and extraction.

use std::path::PathBuf;
use std::time::Duration;

/// Statistics from a completed `create` operation.
#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    /// Number of files written into the archive.
    pub files_added: usize,

    /// Uncompressed bytes consumed from the filesystem.
    pub bytes_written: u64,

    /// Wall-clock duration of the operation.
    pub duration: Duration,

    /// Non-fatal planning diagnostics (e.g. an input that was neither an
    /// existing path nor a recognizable pattern).
    pub warnings: Vec<String>,
}

impl CreateReport {
    /// Records a non-fatal warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns `true` if any warnings were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Statistics from a completed `extract` operation.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Number of files materialized on disk.
    pub files_extracted: usize,

    /// Number of directories created from explicit directory entries.
    pub directories_created: usize,

    /// Number of entries skipped by include filtering.
    pub files_skipped: usize,

    /// Bytes written to disk.
    pub bytes_written: u64,

    /// Destinations that already existed while overwriting was disabled.
    /// The existing files were left untouched; the caller decides whether
    /// conflicts are fatal.
    pub conflicts: Vec<PathBuf>,

    /// Wall-clock duration of the operation.
    pub duration: Duration,
}

impl ExtractReport {
    /// Returns `true` if any destination conflicts were recorded.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
