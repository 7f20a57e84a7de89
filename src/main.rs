//! # git-follow-up CLI
//!
//! Binary entry point for the `git-follow-up` command-line tool.
//!
//! It parses the command line with `clap`, sets up logging, and dispatches
//! to the subcommand. Everything else lives in the `git_follow_up` library
//! crate so the binary stays a thin wrapper.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
