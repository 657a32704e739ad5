//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipsel_core::CreateConfig;

pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = CreateConfig::new(&args.output)
        .with_input_paths(args.inputs.clone())
        .with_exclude_paths(args.exclude.clone())
        .with_password(args.password.clone())
        .with_compression(args.compression.into())
        .with_encryption(args.encryption.into());

    let report = add_archive_context(zipsel_core::create(&config), &args.output)?;

    formatter.format_create_result(&args.output, &report)?;

    Ok(())
}
