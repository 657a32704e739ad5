//! Pattern-driven ZIP archive construction and extraction.
//!
//! The crate selects files through a small pattern language (wildcards,
//! regexes, extension filters, directory prefixes, absolute paths and
//! relative suffixes), plans a deterministic entry set where excludes
//! always win, and writes or reads ZIP archives with optional
//! compression and encryption. Extraction validates every entry name
//! before writing anything, so a hostile archive cannot escape the
//! destination directory.
//!
//! # Example
//!
//! ```no_run
//! use zipsel_core::CreateConfig;
//! use zipsel_core::ExtractConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CreateConfig::new("backup.zip")
//!     .with_input_paths(vec!["src/".to_string()])
//!     .with_exclude_paths(vec!["*.tmp".to_string()]);
//! zipsel_core::create(&config)?;
//!
//! let config = ExtractConfig::new("backup.zip", "restored/");
//! zipsel_core::extract(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pattern;
pub mod plan;
pub mod reader;
pub mod report;
pub mod writer;

pub use config::CompressionLevel;
pub use config::CreateConfig;
pub use config::EncryptionMethod;
pub use config::ExtractConfig;
pub use error::ArchiveError;
pub use error::Result;
pub use pattern::Pattern;
pub use pattern::PatternKind;
pub use pattern::match_patterns;
pub use plan::FileEntry;
pub use plan::SelectionPlan;
pub use plan::plan;
pub use reader::extract;
pub use reader::is_archive_file;
pub use report::CreateReport;
pub use report::ExtractReport;
pub use writer::create;
