//! # Commits Command Implementation
//!
//! Implements the `commits` subcommand, which prints, oldest first, the
//! commits authored across the followed repositories since a given day.
//!
//! ## Functionality
//!
//! - **Window**: `--from` takes `ytd`, `mtd`, `wtd` (default), `yesterday`,
//!   `today` or a `yyyy-MM-dd` date. Commits authored strictly after local
//!   midnight of that day are listed. An unrecognized value aborts the run.
//! - **Repository selection**: `--label` keeps repositories carrying every
//!   given label.
//! - **Author selection**: `--author` keeps commits whose author name or
//!   email contains any given value, ignoring case.
//! - **Fields**: `--display` picks among `repo`, `date`, `hash`, `message`
//!   and `author`; they are always printed in that order.
//! - **Update first**: `-u/--update` synchronizes the selected mirrors
//!   before reading them.
//!
//! A repository whose mirror cannot be read is reported on stderr and simply
//! contributes no commits.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use log::warn;

use git_follow_up::date_range::{self, DEFAULT_FROM};
use git_follow_up::error::Error;
use git_follow_up::filter::{DisplayField, Filter};
use git_follow_up::repository::SystemGit;
use git_follow_up::{aggregate, collect, render, suggestions, sync};

use super::Context;

/// List commits across the followed repositories
#[derive(Args, Debug)]
pub struct CommitsArgs {
    /// Start of the window: ytd, mtd, wtd, yesterday, today or a yyyy-MM-dd date
    #[arg(long, value_name = "WHEN", default_value = DEFAULT_FROM)]
    pub from: String,

    /// Only list repositories carrying this label.
    ///
    /// Repeat the flag or separate values with commas; a repository must
    /// carry every given label.
    #[arg(long = "label", value_name = "LABEL", value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Only list commits whose author name or email contains this value.
    ///
    /// Repeat the flag or separate values with commas; any value may match.
    #[arg(long = "author", value_name = "AUTHOR", value_delimiter = ',')]
    pub authors: Vec<String>,

    /// Fields to print [default: all]
    #[arg(
        long = "display",
        value_enum,
        value_name = "FIELD",
        value_delimiter = ','
    )]
    pub display: Vec<DisplayField>,

    /// Synchronize the selected repositories before listing
    #[arg(short = 'u', long)]
    pub update: bool,
}

/// Execute the `commits` command.
pub fn execute(args: CommitsArgs, context: &Context) -> Result<()> {
    let config = context.load_config()?;

    let from = match date_range::resolve_now(&args.from) {
        Ok(from) => from.fixed_offset(),
        Err(Error::DateToken { token }) => return Err(suggestions::unrecognized_from(&token)),
        Err(e) => return Err(e.into()),
    };

    let filter = Filter::new(from, args.labels, args.authors, args.display);
    let repos = config.select_by_labels(&filter.labels);
    if repos.is_empty() {
        warn!("No repository matches the requested labels");
        return Ok(());
    }

    let backend = SystemGit;

    if args.update {
        // Failures are logged by the synchronizer; listing goes on with
        // whatever the mirrors hold.
        sync::sync_all(&repos, &backend)?;
    }

    let commits = aggregate::merge(collect::collect_all(&repos, &backend, &filter));

    let mut stdout = io::stdout().lock();
    for line in render::render_all(&commits, &filter.display, &context.output) {
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
