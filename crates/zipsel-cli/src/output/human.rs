//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use zipsel_core::CreateReport;
use zipsel_core::ExtractReport;
use zipsel_core::PatternKind;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn kind_label(kind: PatternKind) -> &'static str {
        match kind {
            PatternKind::Wildcard => "wildcard",
            PatternKind::Regex => "regex",
            PatternKind::ExtensionOnly => "extension",
            PatternKind::DirectoryPrefix => "directory-prefix",
            PatternKind::AbsolutePath => "absolute-path",
            PatternKind::RelativeSuffix => "relative-suffix",
        }
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_create_result(&self, output_path: &Path, report: &CreateReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.success_line(&format!("Archive created: {}", output_path.display()));
        let _ = self
            .term
            .write_line(&format!("  Files added: {}", report.files_added));
        let _ = self.term.write_line(&format!(
            "  Total size:  {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Duration:    {:?}", report.duration));
        }

        if report.has_warnings() {
            let _ = self.term.write_line("");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.term.write_line("Warnings:");
            }
            for warning in &report.warnings {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_extract_result(&self, report: &ExtractReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.success_line("Extraction complete");
        let _ = self
            .term
            .write_line(&format!("  Files extracted: {}", report.files_extracted));
        let _ = self.term.write_line(&format!(
            "  Total size:      {}",
            Self::format_size(report.bytes_written)
        ));

        if report.files_skipped > 0 {
            let _ = self
                .term
                .write_line(&format!("  Files skipped:   {}", report.files_skipped));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Directories:     {}",
                report.directories_created
            ));
            let _ = self
                .term
                .write_line(&format!("  Duration:        {:?}", report.duration));
        }

        if report.has_conflicts() {
            let _ = self.term.write_line("");
            self.format_warning("Some files already existed and were left untouched:");
            for conflict in &report.conflicts {
                let _ = self.term.write_line(&format!("  - {}", conflict.display()));
            }
        }

        Ok(())
    }

    fn format_probe_result(&self, path: &Path, is_archive: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if is_archive {
            self.success_line(&format!("{}: ZIP archive", path.display()));
        } else {
            let _ = self
                .term
                .write_line(&format!("{}: not a ZIP archive", path.display()));
        }

        Ok(())
    }

    fn format_match_result(
        &self,
        candidate: &str,
        matched: bool,
        kinds: &[(String, PatternKind)],
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if matched {
            self.success_line(&format!("{candidate}: matched"));
        } else {
            let _ = self.term.write_line(&format!("{candidate}: no match"));
        }

        if self.verbose {
            for (pattern, kind) in kinds {
                let _ = self
                    .term
                    .write_line(&format!("  {pattern} ({})", Self::kind_label(*kind)));
            }
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
