//! remp - find the directory or file along a path matching a regex pattern
//!
//! remp provides:
//! - Pattern compilation from regexes, exact names and pattern files
//! - Prefix-by-prefix search in either direction
//! - First-match or match-all output, optionally the base directory only

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod render;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
