//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`, covering every
//! subcommand, flag, and the `--display` field names.
//!
//! ```bash
//! # Load bash completions for the current session
//! source <(git-follow-up completions bash)
//!
//! # Install zsh completions
//! git-follow-up completions zsh > ~/.zfunc/_git-follow-up
//! ```

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command, writing the script to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
