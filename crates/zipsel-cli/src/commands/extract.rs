//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use zipsel_core::ExtractConfig;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let config = ExtractConfig::new(&args.archive, output_dir)
        .with_include_paths(args.include.clone())
        .with_password(args.password.clone())
        .with_overwrite_existing(args.force);

    let report = add_archive_context(zipsel_core::extract(&config), &args.archive)?;

    formatter.format_extract_result(&report)?;

    Ok(())
}
