//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use git_follow_up::defaults;
use git_follow_up::output::{ColorWhen, OutputConfig};

use crate::commands::{self, Context};

/// Keep track of contributions made across many git repositories
///
/// Repositories are listed in a YAML configuration file and mirrored locally;
/// they can be hosted anywhere and reached over ssh or https, with or without
/// an access token.
#[derive(Parser, Debug)]
#[command(name = "git-follow-up")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Configuration file [default: <HOME>/config.yaml]
    #[arg(long, global = true, value_name = "FILE", env = "GIT_FOLLOW_UP_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the configuration and the repository mirrors [default: ~/.git-follow-up]
    #[arg(long, global = true, value_name = "DIR", env = "GIT_FOLLOW_UP_HOME")]
    home: Option<PathBuf>,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List commits across the followed repositories
    Commits(commands::commits::CommitsArgs),

    /// Synchronize the local mirrors with their remotes
    Update(commands::update::UpdateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let home = self.home.unwrap_or_else(defaults::default_home);
        let context = Context {
            config_path: self
                .config
                .unwrap_or_else(|| defaults::config_path(&home)),
            home,
            output: OutputConfig::new(self.color),
        };

        match self.command {
            Commands::Commits(args) => commands::commits::execute(args, &context),
            Commands::Update(args) => commands::update::execute(args, &context),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr, one line each. `RUST_LOG` overrides
/// `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Only fails when a logger is already installed
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
