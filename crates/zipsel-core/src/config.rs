//! Configuration for archive creation and extraction.

use crate::ArchiveError;
use crate::Result;
use std::path::PathBuf;

/// Compression strength for archive entries.
///
/// Maps onto the codec's deflate strength: `None` stores entries without
/// compression, the remaining levels select increasing deflate effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Store entries without compression.
    None,
    /// Low-effort deflate.
    Fast,
    /// Default deflate effort.
    #[default]
    Normal,
    /// High-effort deflate.
    Maximum,
    /// Highest-effort deflate.
    Ultra,
}

impl CompressionLevel {
    /// Deflate strength for the codec; `None` means store.
    pub(crate) const fn deflate_level(self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::Fast => Some(1),
            Self::Normal => Some(6),
            Self::Maximum => Some(8),
            Self::Ultra => Some(9),
        }
    }
}

/// Per-archive encryption method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncryptionMethod {
    /// Entries are written unencrypted.
    #[default]
    None,
    /// Legacy ZipCrypto stream cipher. Weak; kept for compatibility.
    ZipCrypto,
    /// AES-256 entry encryption.
    Aes256,
}

/// Configuration for a single `create` operation.
///
/// Caller-owned, read-only input; the subsystem never mutates it.
///
/// # Examples
///
/// ```
/// use zipsel_core::CompressionLevel;
/// use zipsel_core::CreateConfig;
///
/// let config = CreateConfig::new("backup.zip")
///     .with_input_paths(vec!["src/".to_string(), "Cargo.toml".to_string()])
///     .with_exclude_paths(vec!["*.tmp".to_string()])
///     .with_compression(CompressionLevel::Maximum);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CreateConfig {
    /// Final path of the archive. A temporary file in the same directory
    /// is used during writing and atomically renamed on success.
    pub output_archive_path: PathBuf,

    /// Input roots and include patterns. A directory expands to every
    /// regular file beneath it; pattern-like elements are matched against
    /// the file universe.
    pub input_paths: Vec<String>,

    /// Exclude patterns. Exclude always wins over include.
    pub exclude_paths: Vec<String>,

    /// Password for encrypted archives. Required (non-empty) whenever
    /// `encryption` is not `None`.
    pub password: Option<String>,

    /// Compression strength for all entries.
    pub compression: CompressionLevel,

    /// Per-archive encryption method.
    pub encryption: EncryptionMethod,
}

impl CreateConfig {
    /// Creates a configuration writing to `output_archive_path` with
    /// default compression and no encryption.
    #[must_use]
    pub fn new(output_archive_path: impl Into<PathBuf>) -> Self {
        Self {
            output_archive_path: output_archive_path.into(),
            input_paths: Vec::new(),
            exclude_paths: Vec::new(),
            password: None,
            compression: CompressionLevel::default(),
            encryption: EncryptionMethod::default(),
        }
    }

    /// Sets the input roots and include patterns.
    #[must_use]
    pub fn with_input_paths(mut self, input_paths: Vec<String>) -> Self {
        self.input_paths = input_paths;
        self
    }

    /// Sets the exclude patterns.
    #[must_use]
    pub fn with_exclude_paths(mut self, exclude_paths: Vec<String>) -> Self {
        self.exclude_paths = exclude_paths;
        self
    }

    /// Sets the archive password.
    #[must_use]
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    /// Sets the compression level.
    #[must_use]
    pub fn with_compression(mut self, compression: CompressionLevel) -> Self {
        self.compression = compression;
        self
    }

    /// Sets the encryption method.
    #[must_use]
    pub fn with_encryption(mut self, encryption: EncryptionMethod) -> Self {
        self.encryption = encryption;
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`crate::create`] before any I/O begins, so an
    /// encryption/password mismatch never leaves a partial archive behind.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::ConfigurationError`] if a non-`None`
    /// encryption method is requested without a non-empty password.
    pub fn validate(&self) -> Result<()> {
        if self.encryption != EncryptionMethod::None
            && self.password.as_deref().is_none_or(str::is_empty)
        {
            return Err(ArchiveError::ConfigurationError {
                reason: format!(
                    "{:?} encryption requires a non-empty password",
                    self.encryption
                ),
            });
        }
        Ok(())
    }
}

/// Configuration for a single `extract` operation.
///
/// Caller-owned, read-only input; the subsystem never mutates it.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Path of the archive to read.
    pub input_archive_path: PathBuf,

    /// Destination directory. Created if missing; every materialized path
    /// must remain a descendant of it.
    pub dest_dir: PathBuf,

    /// Include patterns applied to each entry's stored relative path.
    /// Empty means extract everything.
    pub include_paths: Vec<String>,

    /// Password for encrypted entries.
    pub password: Option<String>,

    /// Whether existing destination files may be overwritten. When
    /// `false`, conflicts are aggregated in the report and the existing
    /// files are left untouched.
    pub overwrite_existing: bool,
}

impl ExtractConfig {
    /// Creates a configuration extracting `input_archive_path` into
    /// `dest_dir`.
    #[must_use]
    pub fn new(input_archive_path: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_archive_path: input_archive_path.into(),
            dest_dir: dest_dir.into(),
            include_paths: Vec::new(),
            password: None,
            overwrite_existing: false,
        }
    }

    /// Sets the include patterns.
    #[must_use]
    pub fn with_include_paths(mut self, include_paths: Vec<String>) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// Sets the archive password.
    #[must_use]
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = password;
        self
    }

    /// Sets the overwrite policy.
    #[must_use]
    pub fn with_overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::ConfigurationError`] if an empty password
    /// string is supplied (use `None` for "no password").
    pub fn validate(&self) -> Result<()> {
        if self.password.as_deref() == Some("") {
            return Err(ArchiveError::ConfigurationError {
                reason: "password must be non-empty; omit it for unencrypted archives".into(),
            });
        }
        Ok(())
    }
}
