//! # Configuration
//!
//! The configuration file lists the repositories to follow:
//!
//! ```yaml
//! repositories:
//!   - name: api
//!     url: git@github.com:acme/api.git
//!     labels: [backend, team-a]
//!     authentication:
//!       type: ssh
//!       auth_file: /home/dev/.ssh/id_deploy
//!   - name: docs
//!     url: https://github.com/acme/docs.git
//! ```
//!
//! `labels` and `authentication` are optional. Each repository is mirrored
//! under the mirror root in a directory named after it, so names must be
//! unique and usable as a single path component.
//!
//! The configuration is loaded once at startup and never changes during a
//! run. Any problem with it is reported as [`Error::ConfigParse`] and is
//! fatal.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::auth::Authentication;
use crate::error::{Error, Result};
use crate::filter::contains_all;

/// A repository to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Unique name, also the mirror directory name
    pub name: String,
    /// Remote URL, anything `git clone` accepts
    pub url: String,
    #[serde(default)]
    pub labels: BTreeSet<String>,
    #[serde(default)]
    pub authentication: Authentication,
    /// Local bare mirror, derived from the mirror root and the name
    #[serde(skip)]
    pub local_path: PathBuf,
}

impl RepositoryDescriptor {
    /// Whether this repository carries every label in `labels`.
    pub fn has_labels<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        contains_all(&self.labels, labels)
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repositories: Vec<RepositoryDescriptor>,
}

impl Config {
    /// Repositories carrying all of `labels`; every repository when `labels`
    /// is empty.
    pub fn select_by_labels<S: AsRef<str>>(&self, labels: &[S]) -> Vec<RepositoryDescriptor> {
        self.repositories
            .iter()
            .filter(|repo| repo.has_labels(labels))
            .cloned()
            .collect()
    }
}

/// Parse a configuration document, deriving each mirror path from
/// `mirror_root`.
pub fn parse(yaml_content: &str, mirror_root: &Path) -> Result<Config> {
    let mut config = if yaml_content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str::<Config>(yaml_content).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: Some(
                concat!(
                    "Each repository needs at least 'name' and 'url'; ",
                    "authentication type is one of none, ssh, access_token"
                )
                .to_string(),
            ),
        })?
    };

    validate(&config)?;

    for repo in &mut config.repositories {
        repo.local_path = mirror_root.join(&repo.name);
    }

    Ok(config)
}

/// Read and parse the configuration file at `path`.
pub fn from_file<P: AsRef<Path>>(path: P, mirror_root: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content, mirror_root)
}

fn validate(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, repo) in config.repositories.iter().enumerate() {
        if repo.name.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: format!("Repository #{} has an empty name", index + 1),
                hint: None,
            });
        }
        if repo.name.contains(['/', '\\']) || repo.name == "." || repo.name == ".." {
            return Err(Error::ConfigParse {
                message: format!("Repository name '{}' is not a valid directory name", repo.name),
                hint: Some(
                    "Names are used as mirror directory names; avoid path separators".to_string(),
                ),
            });
        }
        if repo.url.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: format!("Repository '{}' has an empty url", repo.name),
                hint: None,
            });
        }
        if !seen.insert(repo.name.as_str()) {
            return Err(Error::ConfigParse {
                message: format!("Repository name '{}' is declared more than once", repo.name),
                hint: Some("Repository names must be unique".to_string()),
            });
        }
    }

    Ok(())
}
