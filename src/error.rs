//! # Error Handling
//!
//! This module defines the centralized error type for `git-follow-up`. It uses
//! `thiserror` to build a single `Error` enum covering every failure the
//! library can report, each variant carrying enough context to print a useful
//! diagnostic.
//!
//! ## Scopes
//!
//! Errors fall into three scopes, and callers treat them differently:
//!
//! - **Process-scoped**: `ConfigParse` (plus wrapped `Io` errors raised
//!   while loading configuration). These abort the run before any repository
//!   is touched.
//! - **Repository-scoped**: `Credential`, `GitClone`, `GitFetch`, `GitCommand`,
//!   `Traversal` and `CommitParse`. These are caught at the repository boundary,
//!   reported, and never affect sibling repositories.
//! - **Run-scoped**: `DateToken`, raised when the `--from` value cannot be
//!   resolved.
//!
//! `RepositoryExists` is not a failure in practice: the synchronizer uses it to
//! fall back from cloning to opening an existing mirror.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for git-follow-up operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be parsed into the expected shape.
    #[error("Configuration parsing error: {message}{}", hint_suffix(hint))]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A credential file required by a repository could not be read.
    #[error("{repo}: auth file error: {}: {message}", path.display())]
    Credential {
        repo: String,
        path: PathBuf,
        message: String,
    },

    /// The clone target already holds a repository.
    #[error("Repository already exists at {}", path.display())]
    RepositoryExists { path: PathBuf },

    /// Cloning the remote repository failed.
    #[error("Git clone error for {url}: {message}{}", hint_suffix(hint))]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// Fetching refs into an existing mirror failed.
    #[error("Fetching {repo}: {message}")]
    GitFetch { repo: String, message: String },

    /// A git command could not be executed or exited unsuccessfully.
    #[error("Git command failed in {}: {command} - {stderr}", path.display())]
    GitCommand {
        command: String,
        path: PathBuf,
        stderr: String,
    },

    /// HEAD resolution or history traversal failed for a repository.
    #[error("Listing commits of {repo}: {message}")]
    Traversal { repo: String, message: String },

    /// A raw commit record produced by git could not be decoded.
    #[error("Commit parsing error: {message}")]
    CommitParse { message: String },

    /// The `--from` value is neither a known keyword nor a `yyyy-MM-dd` date.
    #[error("from value not recognized: '{token}'")]
    DateToken { token: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// The worker pool used for synchronization could not be built.
    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Indented `hint:` line appended to an error message, if there is a hint.
fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!("\n  hint: {}", h))
        .unwrap_or_default()
}
