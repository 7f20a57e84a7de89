//! # CLI Command Implementations
//!
//! One module per subcommand. Each defines a `clap` `Args` struct and an
//! `execute` function that loads what it needs through the shared
//! [`Context`] and calls into the `git_follow_up` library.

pub mod commits;
pub mod completions;
pub mod update;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use git_follow_up::config::{self, Config};
use git_follow_up::defaults;
use git_follow_up::output::OutputConfig;
use git_follow_up::suggestions;

/// Settings shared by every command, resolved from the global flags.
#[derive(Debug, Clone)]
pub struct Context {
    pub home: PathBuf,
    pub config_path: PathBuf,
    pub output: OutputConfig,
}

impl Context {
    /// Load the configuration, creating the mirror root if needed.
    ///
    /// Any failure here is fatal to the run.
    pub fn load_config(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Err(suggestions::config_not_found(&self.config_path));
        }

        let mirror_root = defaults::mirror_root(&self.home);
        create_private_dir(&mirror_root).with_context(|| {
            format!(
                "Failed to create mirror directory {}",
                mirror_root.display()
            )
        })?;

        config::from_file(&self.config_path, &mirror_root).map_err(|e| {
            anyhow::anyhow!(
                "Failed to load config from {}: {}",
                self.config_path.display(),
                e
            )
        })
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
