//! Pattern classification.
//!
//! Raw pattern strings supplied by callers are classified into a single
//! [`PatternKind`] before any matching happens. Classification is purely
//! syntactic: it never touches the filesystem and never fails. A string
//! that classifies as [`PatternKind::Regex`] may still be a malformed
//! regex; that is only detected at match time.

pub mod matcher;

pub use matcher::match_patterns;

/// Regex metacharacters that force [`PatternKind::Regex`] classification.
///
/// `*` is deliberately absent (it drives wildcard classification) and so is
/// `.` (it is ordinary in file names and extension patterns).
const REGEX_METACHARS: &[char] = &['(', ')', '[', ']', '{', '}', '|', '+', '?', '\\'];

/// The kind of a classified pattern.
///
/// Every raw string maps to exactly one kind; see [`Pattern::classify`]
/// for the precedence rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Glob-style pattern containing `*`. The wildcard never matches a
    /// path separator.
    Wildcard,
    /// Regular expression, matched against the candidate's relative path.
    Regex,
    /// Bare extension such as `.txt`; compared case-insensitively.
    ExtensionOnly,
    /// Trailing-slash pattern matching everything under a directory.
    DirectoryPrefix,
    /// Absolute filesystem path; exact match or containment.
    AbsolutePath,
    /// Anything else: a path-segment-aligned suffix of the relative path.
    RelativeSuffix,
}

/// A classified matching rule derived from a raw string.
///
/// Immutable once constructed. Matching behavior per kind lives in
/// [`matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    kind: PatternKind,
}

impl Pattern {
    /// Classifies a raw pattern string.
    ///
    /// Total, pure and deterministic. Precedence, highest first:
    ///
    /// 1. trailing `/` is always [`PatternKind::DirectoryPrefix`],
    ///    regardless of other contents;
    /// 2. `^`/`$` anchors, regex metacharacters beyond `*`, or the empty
    ///    string give [`PatternKind::Regex`];
    /// 3. a `*` gives [`PatternKind::Wildcard`]; wildcard detection beats
    ///    extension detection, so `*.txt` is a wildcard;
    /// 4. a leading `.` with no `/` gives [`PatternKind::ExtensionOnly`];
    /// 5. an absolute path gives [`PatternKind::AbsolutePath`];
    /// 6. everything else is [`PatternKind::RelativeSuffix`].
    ///
    /// # Examples
    ///
    /// ```
    /// use zipsel_core::pattern::Pattern;
    /// use zipsel_core::pattern::PatternKind;
    ///
    /// assert_eq!(Pattern::classify("*.txt").kind(), PatternKind::Wildcard);
    /// assert_eq!(Pattern::classify(".txt").kind(), PatternKind::ExtensionOnly);
    /// assert_eq!(Pattern::classify("logs/").kind(), PatternKind::DirectoryPrefix);
    /// assert_eq!(Pattern::classify("^foo.*$").kind(), PatternKind::Regex);
    /// assert_eq!(Pattern::classify("src/main.rs").kind(), PatternKind::RelativeSuffix);
    /// ```
    #[must_use]
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify_kind(&raw);
        Self { raw, kind }
    }

    /// Returns the raw pattern string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the classified kind.
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.kind
    }
}

fn classify_kind(raw: &str) -> PatternKind {
    if raw.ends_with('/') {
        return PatternKind::DirectoryPrefix;
    }
    if raw.is_empty()
        || raw.starts_with('^')
        || raw.ends_with('$')
        || raw.contains(REGEX_METACHARS)
    {
        return PatternKind::Regex;
    }
    if raw.contains('*') {
        return PatternKind::Wildcard;
    }
    if raw.starts_with('.') && !raw.contains('/') {
        return PatternKind::ExtensionOnly;
    }
    if std::path::Path::new(raw).is_absolute() {
        return PatternKind::AbsolutePath;
    }
    PatternKind::RelativeSuffix
}
