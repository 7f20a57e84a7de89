//! Default locations used by git-follow-up.
//!
//! Everything lives under a single home directory, `~/.git-follow-up` unless
//! overridden with `--home` or the `GIT_FOLLOW_UP_HOME` environment variable:
//!
//! ```text
//! ~/.git-follow-up/
//! ├── config.yaml     repository list
//! └── git/            one bare mirror per repository, named after it
//! ```

use std::path::{Path, PathBuf};

/// Name of the configuration file inside the home directory.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Name of the mirror directory inside the home directory.
pub const MIRROR_DIRNAME: &str = "git";

/// Returns the default home directory.
///
/// Falls back to `.git-follow-up` in the current directory if the user's home
/// directory cannot be determined.
pub fn default_home() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".git-follow-up"))
        .unwrap_or_else(|| PathBuf::from(".git-follow-up"))
}

/// Configuration file location for a given home directory.
pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILENAME)
}

/// Mirror root for a given home directory.
pub fn mirror_root(home: &Path) -> PathBuf {
    home.join(MIRROR_DIRNAME)
}

/// SSH key used when a repository declares `ssh` without an `auth_file`.
pub fn default_ssh_key() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("id_rsa"))
}
