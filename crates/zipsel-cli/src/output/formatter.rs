//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use zipsel_core::CreateReport;
use zipsel_core::ExtractReport;
use zipsel_core::PatternKind;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format creation result
    fn format_create_result(&self, output_path: &Path, report: &CreateReport) -> Result<()>;

    /// Format extraction result
    fn format_extract_result(&self, report: &ExtractReport) -> Result<()>;

    /// Format archive probe result
    fn format_probe_result(&self, path: &Path, is_archive: bool) -> Result<()>;

    /// Format pattern match result
    fn format_match_result(
        &self,
        candidate: &str,
        matched: bool,
        kinds: &[(String, PatternKind)],
    ) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
