//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use zipsel_core::CreateReport;
use zipsel_core::ExtractReport;
use zipsel_core::PatternKind;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn kind_name(kind: PatternKind) -> &'static str {
        match kind {
            PatternKind::Wildcard => "wildcard",
            PatternKind::Regex => "regex",
            PatternKind::ExtensionOnly => "extension_only",
            PatternKind::DirectoryPrefix => "directory_prefix",
            PatternKind::AbsolutePath => "absolute_path",
            PatternKind::RelativeSuffix => "relative_suffix",
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_create_result(&self, output_path: &Path, report: &CreateReport) -> Result<()> {
        #[derive(Serialize)]
        struct CreateOutput {
            output_path: String,
            files_added: usize,
            bytes_written: u64,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = CreateOutput {
            output_path: output_path.display().to_string(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("create", data);
        Self::output(&output)
    }

    fn format_extract_result(&self, report: &ExtractReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractOutput {
            files_extracted: usize,
            directories_created: usize,
            files_skipped: usize,
            bytes_written: u64,
            conflicts: Vec<String>,
            duration_ms: u128,
        }

        let data = ExtractOutput {
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            files_skipped: report.files_skipped,
            bytes_written: report.bytes_written,
            conflicts: report
                .conflicts
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            duration_ms: report.duration.as_millis(),
        };

        let output = JsonOutput::success("extract", data);
        Self::output(&output)
    }

    fn format_probe_result(&self, path: &Path, is_archive: bool) -> Result<()> {
        #[derive(Serialize)]
        struct ProbeOutput {
            path: String,
            is_archive: bool,
        }

        let data = ProbeOutput {
            path: path.display().to_string(),
            is_archive,
        };

        let output = JsonOutput::success("probe", data);
        Self::output(&output)
    }

    fn format_match_result(
        &self,
        candidate: &str,
        matched: bool,
        kinds: &[(String, PatternKind)],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct PatternInfo {
            pattern: String,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct MatchOutput {
            candidate: String,
            matched: bool,
            patterns: Vec<PatternInfo>,
        }

        let data = MatchOutput {
            candidate: candidate.to_string(),
            matched,
            patterns: kinds
                .iter()
                .map(|(pattern, kind)| PatternInfo {
                    pattern: pattern.clone(),
                    kind: Self::kind_name(*kind),
                })
                .collect(),
        };

        let output = JsonOutput::success("match", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_snake_case() {
        assert_eq!(JsonFormatter::kind_name(PatternKind::Wildcard), "wildcard");
        assert_eq!(
            JsonFormatter::kind_name(PatternKind::ExtensionOnly),
            "extension_only"
        );
        assert_eq!(
            JsonFormatter::kind_name(PatternKind::DirectoryPrefix),
            "directory_prefix"
        );
    }

    #[test]
    fn test_json_output_structure() {
        #[derive(Serialize)]
        struct TestData {
            value: String,
        }

        let output = JsonOutput::success(
            "probe",
            TestData {
                value: "test".to_string(),
            },
        );
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"operation\":\"probe\""));
        assert!(json.contains("\"status\":\"success\""));
        assert!(!json.contains("\"error\""));
    }
}
