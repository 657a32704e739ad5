//! Selection planning.
//!
//! Turns input roots plus include/exclude patterns into the concrete,
//! ordered set of files that a `create` operation will archive. Directory
//! inputs expand recursively; pattern-like inputs are matched against the
//! file universe; exclude patterns always win; the result is deduplicated
//! by absolute path and ordered lexicographically by relative path so
//! archive output is reproducible.

use crate::ArchiveError;
use crate::Result;
use crate::pattern::Pattern;
use crate::pattern::PatternKind;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One file selected for archiving.
///
/// Only regular files become entries; directories are traversed, never
/// stored themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Canonical absolute path on the filesystem. Deduplication key.
    pub absolute_path: PathBuf,

    /// Path relative to the input root that produced this entry; becomes
    /// the stored archive path.
    pub relative_path: PathBuf,

    /// File size in bytes.
    pub size: u64,
}

/// The outcome of selection planning.
#[derive(Debug, Default)]
pub struct SelectionPlan {
    /// Selected files, deduplicated and ordered lexicographically by
    /// relative path.
    pub entries: Vec<FileEntry>,

    /// Non-fatal problems encountered while resolving inputs. An input
    /// that is neither an existing path nor a recognizable pattern lands
    /// here as [`ArchiveError::PathNotFound`] instead of failing the plan.
    pub diagnostics: Vec<ArchiveError>,
}

impl SelectionPlan {
    /// Returns `true` if any diagnostics were accumulated.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Resolves `input_paths` minus `exclude_paths` into a selection plan.
///
/// # Algorithm
///
/// 1. Each input is classified: an existing directory expands to every
///    regular file beneath it (recursive, deterministic order); an
///    existing file contributes itself; a pattern-like element is matched
///    against the file universe (the union of the directory roots given
///    in the same call, or the current working directory tree when none
///    is given).
/// 2. Exclude dominates: a file matched by any include is still dropped
///    if it matches any exclude pattern.
/// 3. A file reachable via multiple inputs appears exactly once, keyed by
///    canonical absolute path.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidPattern`] for a malformed regex in
/// either list (checked before any traversal), or an I/O error if a
/// directory walk fails. Unresolvable non-pattern inputs are diagnostics,
/// not errors.
pub fn plan(input_paths: &[String], exclude_paths: &[String]) -> Result<SelectionPlan> {
    let cwd = std::env::current_dir()?;
    plan_with_universe(input_paths, exclude_paths, &cwd)
}

fn plan_with_universe(
    input_paths: &[String],
    exclude_paths: &[String],
    cwd: &Path,
) -> Result<SelectionPlan> {
    let excludes: Vec<Pattern> = exclude_paths
        .iter()
        .cloned()
        .map(Pattern::classify)
        .collect();

    let mut diagnostics = Vec::new();
    let mut dir_roots: Vec<PathBuf> = Vec::new();
    let mut pattern_inputs: Vec<Pattern> = Vec::new();
    let mut entries: Vec<FileEntry> = Vec::new();

    for raw in input_paths {
        let path = Path::new(raw);
        if path.is_dir() {
            dir_roots.push(path.to_path_buf());
        } else if path.is_file() {
            entries.push(single_file_entry(path)?);
        } else {
            let pattern = Pattern::classify(raw.clone());
            if is_matchable(pattern.kind()) {
                pattern_inputs.push(pattern);
            } else {
                diagnostics.push(ArchiveError::PathNotFound {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    // Malformed regexes fail the whole plan before any traversal starts.
    for pattern in pattern_inputs.iter().chain(excludes.iter()) {
        pattern.validate()?;
    }

    for root in &dir_roots {
        entries.extend(collect_tree(root)?);
    }

    // Directory roots already contribute every file beneath them, so
    // pattern inputs only need their own walk when no root was given.
    if !pattern_inputs.is_empty() && dir_roots.is_empty() {
        for entry in collect_tree(cwd)? {
            if matches_any(&pattern_inputs, &entry)? {
                entries.push(entry);
            }
        }
    }

    let mut kept = Vec::with_capacity(entries.len());
    'next_entry: for entry in entries {
        for exclude in &excludes {
            if exclude.matches(&entry.relative_path.to_string_lossy(), &entry.absolute_path)? {
                continue 'next_entry;
            }
        }
        kept.push(entry);
    }

    let mut seen = HashSet::new();
    kept.retain(|entry| seen.insert(entry.absolute_path.clone()));
    kept.sort_by(|a, b| {
        a.relative_path
            .cmp(&b.relative_path)
            .then_with(|| a.absolute_path.cmp(&b.absolute_path))
    });

    Ok(SelectionPlan {
        entries: kept,
        diagnostics,
    })
}

/// Pattern kinds that make sense as include inputs without naming an
/// existing path.
const fn is_matchable(kind: PatternKind) -> bool {
    matches!(
        kind,
        PatternKind::Wildcard
            | PatternKind::Regex
            | PatternKind::ExtensionOnly
            | PatternKind::DirectoryPrefix
    )
}

fn matches_any(patterns: &[Pattern], entry: &FileEntry) -> Result<bool> {
    let relative = entry.relative_path.to_string_lossy();
    for pattern in patterns {
        if pattern.matches(&relative, &entry.absolute_path)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Collects every regular file beneath `root`, relative paths computed
/// against `root` itself.
fn collect_tree(root: &Path) -> Result<Vec<FileEntry>> {
    let canonical_root = fs::canonicalize(root).map_err(|e| ArchiveError::from_io(e, root))?;
    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let metadata = entry.metadata().map_err(walk_error)?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "walked path escaped its root {}: {e}",
                    root.display()
                )))
            })?
            .to_path_buf();

        out.push(FileEntry {
            absolute_path: canonical_root.join(&relative),
            relative_path: relative,
            size: metadata.len(),
        });
    }

    Ok(out)
}

fn single_file_entry(path: &Path) -> Result<FileEntry> {
    let absolute = fs::canonicalize(path).map_err(|e| ArchiveError::from_io(e, path))?;
    let metadata = fs::metadata(&absolute).map_err(|e| ArchiveError::from_io(e, path))?;
    let relative = absolute
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| {
            ArchiveError::Io(std::io::Error::other(format!(
                "cannot determine file name for {}",
                path.display()
            )))
        })?;

    Ok(FileEntry {
        absolute_path: absolute,
        relative_path: relative,
        size: metadata.len(),
    })
}

fn walk_error(err: walkdir::Error) -> ArchiveError {
    let message = err.to_string();
    err.into_io_error().map_or_else(
        || ArchiveError::Io(std::io::Error::other(message)),
        ArchiveError::Io,
    )
}
