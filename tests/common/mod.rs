//! Shared test utilities for integration and E2E tests.
//!
//! Tests build real git repositories in a temporary directory, declare them
//! in a configuration file using their local paths as URLs, and run the
//! binary (or the library) against them. No network access is needed, but a
//! `git` binary is; tests call [`git_available`] first and skip otherwise.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     if !git_available() {
//!         return;
//!     }
//!     let fixture = TestFixture::new();
//!     let alpha = fixture.source("alpha");
//!     alpha.commit("jean", "2019-05-05T10:00:00+00:00", "first");
//!     let config = format!("repositories:\n{}", repo_entry("alpha", &alpha.url(), &[]));
//!     let fixture = fixture.with_config(&config);
//!     fixture.command().args(["commits", "-u", "--from", "2019-01-01"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{git_available, repo_entry, SourceRepo, TestFixture};
}

/// Whether a usable `git` binary is on the PATH.
pub fn git_available() -> bool {
    let available = Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if !available {
        eprintln!("git not found, skipping test");
    }
    available
}

/// A non-bare repository standing in for a remote.
pub struct SourceRepo {
    path: PathBuf,
}

impl SourceRepo {
    /// Initialize an empty repository at `path`.
    pub fn init(path: &Path) -> Self {
        std::fs::create_dir_all(path).expect("Failed to create source directory");
        let status = Command::new("git")
            .args(["init", "--quiet"])
            .arg(path)
            .status()
            .expect("Failed to run git init");
        assert!(status.success(), "git init failed for {}", path.display());
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Record an empty commit by `author` (email `<author>@test.te`) at the
    /// RFC 3339 `date`, used both as author and committer date.
    pub fn commit(&self, author: &str, date: &str, message: &str) -> &Self {
        let email = format!("{}@test.te", author);
        let status = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(["-c", "commit.gpgsign=false"])
            .args(["commit", "--allow-empty", "--no-verify", "--quiet", "-m", message])
            .env("GIT_AUTHOR_NAME", author)
            .env("GIT_AUTHOR_EMAIL", &email)
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_NAME", author)
            .env("GIT_COMMITTER_EMAIL", &email)
            .env("GIT_COMMITTER_DATE", date)
            .status()
            .expect("Failed to run git commit");
        assert!(status.success(), "git commit failed in {}", self.path.display());
        self
    }

    /// Location of the repository, usable as a clone URL.
    pub fn url(&self) -> String {
        self.path.display().to_string()
    }
}

/// A temporary home directory plus a place for source repositories.
///
/// ```text
/// <tmp>/home/config.yaml
/// <tmp>/home/git/<name>      mirrors, created by the binary
/// <tmp>/sources/<name>       source repositories
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home directory");
        Self { temp_dir }
    }

    /// Write the configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("home/config.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Create a source repository named `name`.
    pub fn source(&self, name: &str) -> SourceRepo {
        SourceRepo::init(&self.temp_dir.path().join("sources").join(name))
    }

    /// Handle on the already created source repository `name`.
    #[allow(dead_code)]
    pub fn existing_source(&self, name: &str) -> SourceRepo {
        SourceRepo {
            path: self.temp_dir.path().join("sources").join(name),
        }
    }

    /// URL of the source repository named `name`.
    #[allow(dead_code)]
    pub fn source_url(&self, name: &str) -> String {
        self.temp_dir
            .path()
            .join("sources")
            .join(name)
            .display()
            .to_string()
    }

    /// Home directory passed to the binary.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Mirror location of repository `name`.
    #[allow(dead_code)]
    pub fn mirror(&self, name: &str) -> PathBuf {
        self.home().join("git").join(name)
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.home().join("config.yaml")
    }

    /// Path to a file in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A command running the binary against this fixture's home, without
    /// colors and unaffected by the caller's environment.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("git-follow-up");
        cmd.env_remove("GIT_FOLLOW_UP_CONFIG")
            .env_remove("GIT_FOLLOW_UP_HOME")
            .env_remove("RUST_LOG")
            .arg("--home")
            .arg(self.home())
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One `repositories:` entry.
#[allow(dead_code)]
pub fn repo_entry(name: &str, url: &str, labels: &[&str]) -> String {
    format!(
        "  - name: {}\n    url: '{}'\n    labels: [{}]\n",
        name,
        url,
        labels.join(", ")
    )
}
