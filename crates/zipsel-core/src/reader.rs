//! Archive probing and extraction.
//!
//! Every entry name is sanitized before a single byte reaches the
//! destination: extraction walks the full entry list first, and a
//! traversal attempt anywhere in the archive aborts the operation with
//! nothing written.

use crate::ArchiveError;
use crate::Result;
use crate::config::ExtractConfig;
use crate::pattern::Pattern;
use crate::report::ExtractReport;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use zip::ZipArchive;
use zip::result::ZipError;

/// Local file header and empty-archive end-of-central-directory magics.
const ZIP_MAGICS: [[u8; 4]; 2] = [*b"PK\x03\x04", *b"PK\x05\x06"];

/// Returns `true` if the file at `path` starts with a ZIP signature.
///
/// This is a pure content probe. The file extension is ignored, and any
/// I/O failure (missing file, unreadable file, fewer than four bytes)
/// yields `false` rather than an error.
///
/// # Examples
///
/// ```no_run
/// use zipsel_core::is_archive_file;
///
/// assert!(is_archive_file("backup.zip"));
/// assert!(!is_archive_file("renamed.zip.txt"));
/// ```
#[must_use]
pub fn is_archive_file(path: impl AsRef<Path>) -> bool {
    let Ok(mut file) = File::open(path.as_ref()) else {
        return false;
    };
    let mut magic = [0u8; 4];
    if file.read_exact(&mut magic).is_err() {
        return false;
    }
    ZIP_MAGICS.contains(&magic)
}

/// Validated destination directory for extraction.
///
/// Holds the canonicalized path so containment checks compare resolved
/// forms on both sides.
#[derive(Debug)]
struct DestDir(PathBuf);

impl DestDir {
    /// Canonicalizes the destination and checks it is a writable
    /// directory. The caller has already created it.
    fn new(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("destination is not a directory: {}", path.display()),
            )));
        }

        let canonical = path
            .canonicalize()
            .map_err(|e| ArchiveError::from_io(e, path))?;

        // Effective write permission via access(), not mode bits.
        #[cfg(unix)]
        {
            use std::ffi::CString;
            use std::os::unix::ffi::OsStrExt;

            let path_cstring =
                CString::new(canonical.as_os_str().as_bytes()).map_err(|_| {
                    ArchiveError::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "path contains null byte",
                    ))
                })?;

            // SAFETY: access() is called with a valid, NUL-terminated C
            // string that outlives the call and is never modified by it.
            #[allow(unsafe_code)]
            let result = unsafe { libc::access(path_cstring.as_ptr(), libc::W_OK) };

            if result != 0 {
                return Err(ArchiveError::PermissionDenied { path: canonical });
            }
        }

        Ok(Self(canonical))
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

/// Normalizes a stored entry name into a safe relative path.
///
/// Backslashes are treated as separators first, so `..\` tricks cannot
/// survive the component walk. Parent, root and prefix components are
/// rejected; `.` components are dropped.
///
/// # Errors
///
/// Returns [`ArchiveError::PathTraversalAttempt`] for `..`, absolute or
/// drive-prefixed names, and [`ArchiveError::CorruptArchive`] for a name
/// that normalizes to nothing.
fn sanitize_entry_name(name: &str) -> Result<PathBuf> {
    let normalized = name.replace('\\', "/");
    let mut out = PathBuf::new();

    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::PathTraversalAttempt {
                    path: PathBuf::from(name),
                });
            }
        }
    }

    if out.as_os_str().is_empty() {
        return Err(ArchiveError::CorruptArchive {
            reason: format!("entry name normalizes to nothing: {name:?}"),
        });
    }
    Ok(out)
}

/// Extracts an archive as described by `config`.
///
/// Entry names are validated in a first pass over the whole archive; any
/// traversal attempt aborts before the second pass writes a single file.
/// Include patterns select entries by their stored relative paths, and
/// destination conflicts under `overwrite_existing == false` are
/// aggregated in the report instead of failing the operation.
///
/// # Errors
///
/// Returns [`ArchiveError::CorruptArchive`] if the input is not a ZIP
/// archive, [`ArchiveError::PathTraversalAttempt`] for a hostile entry
/// name, [`ArchiveError::IncorrectPassword`] for a wrong or missing
/// password, or an I/O error.
pub fn extract(config: &ExtractConfig) -> Result<ExtractReport> {
    config.validate()?;

    let start = std::time::Instant::now();

    if !is_archive_file(&config.input_archive_path) {
        return Err(ArchiveError::CorruptArchive {
            reason: format!(
                "not a ZIP archive: {}",
                config.input_archive_path.display()
            ),
        });
    }

    // Compile include patterns before touching the destination.
    let includes: Vec<Pattern> = config
        .include_paths
        .iter()
        .map(|raw| Pattern::classify(raw.clone()))
        .collect();
    for pattern in &includes {
        pattern.validate()?;
    }

    std::fs::create_dir_all(&config.dest_dir)
        .map_err(|e| ArchiveError::from_io(e, &config.dest_dir))?;
    let dest = DestDir::new(&config.dest_dir)?;

    let file = File::open(&config.input_archive_path)
        .map_err(|e| ArchiveError::from_io(e, &config.input_archive_path))?;
    let mut archive = ZipArchive::new(file).map_err(|e| ArchiveError::CorruptArchive {
        reason: e.to_string(),
    })?;

    // Pass 1: sanitize every name so a hostile entry anywhere in the
    // archive aborts with zero files written.
    let mut sanitized = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let name = archive
            .name_for_index(index)
            .ok_or_else(|| ArchiveError::CorruptArchive {
                reason: format!("missing name for entry {index}"),
            })?
            .to_string();
        let safe = sanitize_entry_name(&name)?;
        sanitized.push((name, safe));
    }

    let mut report = ExtractReport::default();

    // Pass 2: materialize.
    for (index, (name, safe)) in sanitized.iter().enumerate() {
        let is_dir = name.ends_with('/');
        let relative = safe.to_string_lossy().into_owned();
        let out = dest.path().join(safe);

        if !includes.is_empty() && !matches_any(&includes, &relative, &out)? {
            if !is_dir {
                report.files_skipped += 1;
            }
            continue;
        }

        // Resolved names stay inside the destination by construction;
        // this guards against regressions in the sanitizer.
        if !out.starts_with(dest.path()) {
            return Err(ArchiveError::PathTraversalAttempt {
                path: PathBuf::from(name),
            });
        }

        if is_dir {
            std::fs::create_dir_all(&out).map_err(|e| ArchiveError::from_io(e, &out))?;
            report.directories_created += 1;
            continue;
        }

        if out.exists() && !config.overwrite_existing {
            report.conflicts.push(out);
            continue;
        }

        let mut entry = open_entry(&mut archive, index, config.password.as_deref())?;

        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ArchiveError::from_io(e, parent))?;
        }
        let mut target = File::create(&out).map_err(|e| ArchiveError::from_io(e, &out))?;

        let mut buffer = vec![0u8; 64 * 1024];
        loop {
            let read = entry.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            target.write_all(&buffer[..read])?;
            report.bytes_written += read as u64;
        }
        report.files_extracted += 1;
    }

    report.duration = start.elapsed();
    Ok(report)
}

fn matches_any(patterns: &[Pattern], relative: &str, absolute: &Path) -> Result<bool> {
    for pattern in patterns {
        if pattern.matches(relative, absolute)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Opens one entry for reading, decrypting when a password is present.
fn open_entry<'a>(
    archive: &'a mut ZipArchive<File>,
    index: usize,
    password: Option<&str>,
) -> Result<zip::read::ZipFile<'a, File>> {
    let result = match password {
        Some(password) => archive.by_index_decrypt(index, password.as_bytes()),
        None => archive.by_index(index),
    };
    result.map_err(|e| match e {
        ZipError::InvalidPassword => ArchiveError::IncorrectPassword,
        ZipError::UnsupportedArchive(msg) if msg.contains("Password") => {
            ArchiveError::IncorrectPassword
        }
        ZipError::Io(io) => ArchiveError::Io(io),
        other => ArchiveError::CorruptArchive {
            reason: other.to_string(),
        },
    })
}
