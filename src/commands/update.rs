//! # Update Command Implementation
//!
//! Implements the `update` subcommand, which synchronizes the local mirror of
//! every selected repository with its remote.
//!
//! - **Selection**: `--label` restricts the run to repositories carrying all
//!   of the given labels.
//! - **Concurrency**: all repositories are synchronized at once; the command
//!   returns when the last one is done.
//! - **Failures**: a repository that cannot be synchronized is reported and
//!   does not stop the others. The command still succeeds, since the failure
//!   only concerns that repository.

use anyhow::Result;
use clap::Args;

use git_follow_up::repository::SystemGit;
use git_follow_up::sync;

use super::Context;

/// Synchronize the local mirrors with their remotes
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Only synchronize repositories carrying this label.
    ///
    /// Repeat the flag or separate values with commas; a repository must
    /// carry every given label.
    #[arg(long = "label", value_name = "LABEL", value_delimiter = ',')]
    pub labels: Vec<String>,
}

/// Execute the `update` command.
pub fn execute(args: UpdateArgs, context: &Context) -> Result<()> {
    let config = context.load_config()?;
    let repos = config.select_by_labels(&args.labels);

    if repos.is_empty() {
        println!("No repositories to synchronize.");
        return Ok(());
    }

    println!("Synchronizing {} repositories...", repos.len());
    let outcomes = sync::sync_all(&repos, &SystemGit)?;

    let output = &context.output;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("{} {}", output.status_marker(true), outcome.name),
            Err(e) => println!("{} {}: {}", output.status_marker(false), outcome.name, e),
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    println!(
        "\n{} synchronized, {} failed",
        outcomes.len() - failed,
        failed
    );

    Ok(())
}
