//! rasterpack CLI
//!
//! Usage: rasterpack --input <DIR> --output <DIR> [--watch]

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, ui) = commands::resolve(&cli)?;

    if cli.watch {
        return commands::watch::cmd_watch(&settings, ui);
    }

    let code = commands::batch::cmd_batch(&settings, cli.dry_run, ui)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
