//! Probe command implementation.

use crate::cli::ProbeArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipsel_core::is_archive_file;

pub fn execute(args: &ProbeArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let is_archive = is_archive_file(&args.file);

    formatter.format_probe_result(&args.file, is_archive)?;

    // Scripting contract: exit code distinguishes archive from non-archive.
    if !is_archive {
        std::process::exit(1);
    }

    Ok(())
}
