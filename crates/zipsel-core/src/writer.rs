//! Archive creation.
//!
//! Consumes a [`CreateConfig`], resolves the entry set through the
//! selection planner and writes a single ZIP archive. The archive is
//! written to a temporary file in the destination directory and only
//! renamed to its final path on full success, so a failed `create` never
//! leaves a partial archive behind.

use crate::ArchiveError;
use crate::Result;
use crate::config::CreateConfig;
use crate::config::EncryptionMethod;
use crate::plan;
use crate::plan::FileEntry;
use crate::report::CreateReport;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use zip::AesMode;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::unstable::write::FileOptionsExt;
use zip::write::FileOptions;
use zip::write::SimpleFileOptions;

/// Creates a ZIP archive as described by `config`.
///
/// The entry set is resolved via [`plan::plan`]; planner diagnostics are
/// carried over as report warnings. Exactly one temporary file is created
/// and removed regardless of outcome, and exactly one file exists at
/// `output_archive_path` on success.
///
/// # Examples
///
/// ```no_run
/// use zipsel_core::CreateConfig;
/// use zipsel_core::create;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CreateConfig::new("backup.zip")
///     .with_input_paths(vec!["src/".to_string()])
///     .with_exclude_paths(vec!["*.tmp".to_string()]);
/// let report = create(&config)?;
/// println!("archived {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`ArchiveError::ConfigurationError`] before any I/O if a
/// non-`None` encryption method lacks a password, or an I/O / pattern
/// error from planning or writing.
pub fn create(config: &CreateConfig) -> Result<CreateReport> {
    // Fail fast: configuration problems must never cost a partial archive.
    config.validate()?;

    let start = std::time::Instant::now();
    let selection = plan::plan(&config.input_paths, &config.exclude_paths)?;

    let mut report = CreateReport::default();
    for diagnostic in &selection.diagnostics {
        report.add_warning(diagnostic.to_string());
    }

    let dest_dir = output_directory(&config.output_archive_path);
    std::fs::create_dir_all(&dest_dir).map_err(|e| ArchiveError::from_io(e, &dest_dir))?;

    // The temp file lives next to the final path so the rename is atomic;
    // dropping it on any failure path removes it again.
    let temp = NamedTempFile::new_in(&dest_dir).map_err(|e| ArchiveError::from_io(e, &dest_dir))?;

    write_entries(temp.as_file(), &selection.entries, config, &mut report)?;

    temp.persist(&config.output_archive_path)
        .map_err(|e| ArchiveError::Io(e.error))?;

    report.duration = start.elapsed();
    Ok(report)
}

/// Directory the output archive (and its temp file) lands in.
fn output_directory(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_entries(
    file: &File,
    entries: &[FileEntry],
    config: &CreateConfig,
    report: &mut CreateReport,
) -> Result<()> {
    let mut zip = ZipWriter::new(file);
    let options = entry_options(config);
    let mut buffer = vec![0u8; 64 * 1024];

    for entry in entries {
        let name = zip_entry_name(&entry.relative_path)?;
        zip.start_file(name, options.clone())
            .map_err(|e| std::io::Error::other(format!("failed to start entry: {e}")))?;

        let mut source = File::open(&entry.absolute_path)
            .map_err(|e| ArchiveError::from_io(e, &entry.absolute_path))?;
        loop {
            let read = source.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            zip.write_all(&buffer[..read])?;
            report.bytes_written += read as u64;
        }
        report.files_added += 1;
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish archive: {e}")))?;
    Ok(())
}

/// Maps the configured compression and encryption onto codec entry
/// options. `validate()` has already guaranteed a password whenever
/// encryption is requested.
fn entry_options(config: &CreateConfig) -> FileOptions<'_, ()> {
    let base = match config.compression.deflate_level() {
        None => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        Some(level) => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(level)),
    };

    match (config.encryption, config.password.as_deref()) {
        (EncryptionMethod::ZipCrypto, Some(password)) => {
            base.with_deprecated_encryption(password.as_bytes())
        }
        (EncryptionMethod::Aes256, Some(password)) => {
            base.with_aes_encryption(AesMode::Aes256, password)
        }
        _ => base,
    }
}

/// Converts a relative path to ZIP entry form (forward slashes, UTF-8).
fn zip_entry_name(path: &Path) -> Result<String> {
    let name = path.to_str().ok_or_else(|| {
        ArchiveError::Io(std::io::Error::other(format!(
            "path is not valid UTF-8: {}",
            path.display()
        )))
    })?;

    #[cfg(windows)]
    let name = name.replace('\\', "/");
    #[cfg(not(windows))]
    let name = name.to_string();

    Ok(name)
}
