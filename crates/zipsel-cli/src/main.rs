//! Zipsel CLI - Command-line utility for pattern-driven ZIP archive
//! creation and extraction.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Create(args) => commands::create::execute(args, &*formatter),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Probe(args) => commands::probe::execute(args, &*formatter),
        cli::Commands::Match(args) => commands::matches::execute(args, &*formatter),
    }
}
