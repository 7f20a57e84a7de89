//! # Output Configuration
//!
//! Decides whether commit lines and sync summaries are coloured.
//!
//! `--color always` and `--color never` are final. Under `--color auto` the
//! environment is consulted first, in this order:
//!
//! | variable         | effect                         |
//! |------------------|--------------------------------|
//! | `NO_COLOR`       | any value turns colours off    |
//! | `CLICOLOR=0`     | turns colours off              |
//! | `CLICOLOR_FORCE` | non-empty, non-`0` forces them |
//! | `TERM=dumb`      | turns colours off              |
//!
//! When none of them decides, colours follow whether stdout is a terminal
//! that supports them.

use std::env;
use std::ffi::OsString;

use clap::ValueEnum;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    Always,
    Never,
    #[default]
    Auto,
}

/// Resolved presentation settings shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether colors and emoji markers are used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve `when` against the process environment and stdout.
    pub fn new(when: ColorWhen) -> Self {
        let use_color = match when {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => color_from_env(|name| env::var_os(name))
                .unwrap_or_else(|| console::Term::stdout().features().colors_supported()),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn colored() -> Self {
        Self { use_color: true }
    }

    /// Marker printed in front of a repository's sync outcome.
    pub fn status_marker(&self, success: bool) -> &'static str {
        match (self.use_color, success) {
            (true, true) => "✅",
            (true, false) => "❌",
            (false, true) => "[ok]",
            (false, false) => "[failed]",
        }
    }
}

/// Colour decision taken from the environment alone, `None` when no
/// variable settles it. `lookup` reads one variable.
fn color_from_env<F>(lookup: F) -> Option<bool>
where
    F: Fn(&str) -> Option<OsString>,
{
    if lookup("NO_COLOR").is_some() {
        return Some(false);
    }
    if lookup("CLICOLOR").is_some_and(|v| v == "0") {
        return Some(false);
    }
    if lookup("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        return Some(true);
    }
    if lookup("TERM").is_some_and(|v| v == "dumb") {
        return Some(false);
    }
    None
}
