//! Pattern matching against candidate paths.
//!
//! One branch per [`PatternKind`], dispatched from [`Pattern::matches`].
//! All matching is case-sensitive except [`PatternKind::ExtensionOnly`],
//! which compares extensions case-insensitively. No platform-dependent
//! casing is applied anywhere.

use crate::ArchiveError;
use crate::Result;
use crate::pattern::Pattern;
use crate::pattern::PatternKind;
use regex::Regex;
use std::path::Path;

impl Pattern {
    /// Evaluates this pattern against a candidate.
    ///
    /// `relative` is the candidate's path relative to its input root (or
    /// its stored archive path); `absolute` is its absolute filesystem
    /// path, used only by [`PatternKind::AbsolutePath`].
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidPattern`] for a malformed or empty
    /// regex pattern. Invalid patterns fail loudly rather than silently
    /// matching nothing.
    pub fn matches(&self, relative: &str, absolute: &Path) -> Result<bool> {
        match self.kind() {
            PatternKind::Wildcard => Ok(wildcard_match(relative, self.raw())),
            PatternKind::Regex => self.regex_match(relative),
            PatternKind::ExtensionOnly => Ok(extension_match(relative, self.raw())),
            PatternKind::DirectoryPrefix => Ok(directory_prefix_match(relative, self.raw())),
            PatternKind::AbsolutePath => Ok(absolute_path_match(absolute, self.raw())),
            PatternKind::RelativeSuffix => Ok(relative_suffix_match(relative, self.raw())),
        }
    }

    /// Evaluates this pattern against a single path used as both the
    /// relative and the absolute form.
    pub fn matches_path(&self, candidate: &Path) -> Result<bool> {
        let relative = candidate.to_string_lossy();
        self.matches(&relative, candidate)
    }

    /// Checks that this pattern can be used at match time.
    ///
    /// Classification is purely syntactic, so a malformed regex only
    /// surfaces here. Planning validates patterns up front to fail before
    /// any I/O rather than mid-traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidPattern`] for a malformed or empty
    /// regex pattern.
    pub fn validate(&self) -> Result<()> {
        if self.kind() == PatternKind::Regex {
            self.compiled_regex()?;
        }
        Ok(())
    }

    fn regex_match(&self, relative: &str) -> Result<bool> {
        Ok(self.compiled_regex()?.is_match(relative))
    }

    fn compiled_regex(&self) -> Result<Regex> {
        if self.raw().is_empty() {
            return Err(ArchiveError::InvalidPattern {
                pattern: String::new(),
                reason: "empty pattern".into(),
            });
        }
        Regex::new(self.raw()).map_err(|e| ArchiveError::InvalidPattern {
            pattern: self.raw().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Evaluates a candidate path against a list of raw pattern strings.
///
/// Each raw string is classified and the per-pattern results are OR-ed:
/// the candidate matches if any pattern matches. An empty list matches
/// nothing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipsel_core::pattern::match_patterns;
///
/// let patterns = vec!["*.txt".to_string(), ".log".to_string()];
/// assert!(match_patterns(Path::new("notes.txt"), &patterns)?);
/// assert!(match_patterns(Path::new("build.LOG"), &patterns)?);
/// assert!(!match_patterns(Path::new("main.rs"), &patterns)?);
/// # Ok::<(), zipsel_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidPattern`] if any pattern is a malformed
/// regex.
pub fn match_patterns(candidate: &Path, patterns: &[String]) -> Result<bool> {
    for raw in patterns {
        if Pattern::classify(raw.clone()).matches_path(candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Glob match where `*` expands to zero or more characters excluding the
/// path separator. A pattern containing `/` is therefore matched
/// segment-wise against the full relative path.
fn wildcard_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    let mut ti = 0;
    let mut pi = 0;
    // Backtracking point: pattern index after the last `*` and the text
    // index where that `*` started consuming.
    let mut star: Option<(usize, usize)> = None;

    while ti < text.len() {
        if pi < pattern.len() && pattern[pi] == '*' {
            star = Some((pi + 1, ti));
            pi += 1;
        } else if pi < pattern.len() && pattern[pi] == text[ti] {
            ti += 1;
            pi += 1;
        } else if let Some((star_pi, star_ti)) = star {
            // `*` never consumes the separator.
            if text[star_ti] == '/' {
                return false;
            }
            star = Some((star_pi, star_ti + 1));
            ti = star_ti + 1;
            pi = star_pi;
        } else {
            return false;
        }
    }

    while pi < pattern.len() && pattern[pi] == '*' {
        pi += 1;
    }
    pi == pattern.len()
}

/// Case-insensitive extension comparison, leading `.` stripped from the
/// pattern.
fn extension_match(relative: &str, pattern: &str) -> bool {
    let target = pattern.trim_start_matches('.');
    Path::new(relative)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(target))
}

/// Path-segment-aligned prefix: `logs/` matches `logs/a.txt` but never
/// `logsfoo/bar`.
fn directory_prefix_match(relative: &str, pattern: &str) -> bool {
    let prefix = pattern.trim_end_matches('/');
    relative == prefix
        || relative
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Exact absolute-path equality, or containment beneath the pattern when
/// it denotes a directory.
fn absolute_path_match(absolute: &Path, pattern: &str) -> bool {
    let target = Path::new(pattern);
    absolute == target || absolute.starts_with(target)
}

/// Path-segment-aligned suffix of the relative path.
fn relative_suffix_match(relative: &str, pattern: &str) -> bool {
    relative == pattern
        || relative
            .strip_suffix(pattern)
            .is_some_and(|rest| rest.ends_with('/'))
}
