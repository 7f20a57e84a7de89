//! # Git Backend
//!
//! Synchronization and collection never call git directly. They go through
//! the [`GitBackend`] trait, which exposes exactly the operations they need:
//!
//! - create a bare mirror, or open one that already exists
//! - fetch every ref from the remote
//! - resolve HEAD
//! - list the full history across all refs, in committer-time order
//!
//! [`SystemGit`] implements the trait with the system `git` binary (see
//! [`crate::git`]), which also picks up the user's git configuration. Tests
//! substitute mock backends to simulate failures without touching the
//! network or the filesystem.

use std::path::Path;

use crate::auth::GitAuth;
use crate::commit::RawCommit;
use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitBackend: Send + Sync {
    /// Create a bare mirror of `url` at `target` with no checkout.
    ///
    /// Must return [`crate::error::Error::RepositoryExists`] when `target`
    /// already holds a repository.
    fn clone_bare(&self, url: &str, target: &Path, auth: &GitAuth) -> Result<()>;

    /// Open an existing mirror.
    fn open(&self, path: &Path) -> Result<()>;

    /// Fetch `refs/*:refs/*` from `origin`. Being up to date is a success.
    fn fetch_all(&self, repo: &str, path: &Path, auth: &GitAuth) -> Result<()>;

    /// Hash of the commit HEAD points to.
    fn resolve_head(&self, path: &Path) -> Result<String>;

    /// Every commit reachable from `from` or any ref, ordered by committer
    /// time.
    fn log(&self, path: &Path, from: &str) -> Result<Vec<RawCommit>>;
}

/// The default implementation of `GitBackend`, which uses the system's
/// `git` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitBackend for SystemGit {
    fn clone_bare(&self, url: &str, target: &Path, auth: &GitAuth) -> Result<()> {
        crate::git::clone_bare(url, target, auth)
    }

    fn open(&self, path: &Path) -> Result<()> {
        crate::git::open(path)
    }

    fn fetch_all(&self, repo: &str, path: &Path, auth: &GitAuth) -> Result<()> {
        crate::git::fetch_all(repo, path, auth)
    }

    fn resolve_head(&self, path: &Path) -> Result<String> {
        crate::git::resolve_head(path)
    }

    fn log(&self, path: &Path, from: &str) -> Result<Vec<RawCommit>> {
        crate::git::log(path, from)
    }
}
