//! Match command implementation.

use crate::cli::MatchArgs;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use zipsel_core::Pattern;
use zipsel_core::match_patterns;

pub fn execute(args: &MatchArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let kinds: Vec<_> = args
        .patterns
        .iter()
        .map(|raw| (raw.clone(), Pattern::classify(raw.clone()).kind()))
        .collect();

    let matched = match_patterns(Path::new(&args.path), &args.patterns)
        .map_err(|e| anyhow!("{e}"))?;

    formatter.format_match_result(&args.path, matched, &kinds)?;

    // Scripting contract: exit code distinguishes match from no match.
    if !matched {
        std::process::exit(1);
    }

    Ok(())
}
