//! Commit records, as produced by the git backend and as collected.

use chrono::{DateTime, FixedOffset};

/// A commit as read from a repository's history, before it is attributed to
/// a configured repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub authored: DateTime<FixedOffset>,
    /// Full commit message
    pub message: String,
}

impl RawCommit {
    /// Author name and email joined by a space, the string author filters
    /// are matched against.
    pub fn author_identity(&self) -> String {
        format!("{} {}", self.author_name, self.author_email)
    }
}

/// A collected commit, tagged with the name of the repository it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub repository: String,
    pub hash: String,
    pub author_name: String,
    pub author_email: String,
    pub authored: DateTime<FixedOffset>,
    /// First line of the message
    pub summary: String,
    pub message: String,
}

impl Commit {
    pub fn new(repository: impl Into<String>, raw: RawCommit) -> Self {
        let summary = raw.message.lines().next().unwrap_or_default().to_string();
        Self {
            repository: repository.into(),
            hash: raw.hash,
            author_name: raw.author_name,
            author_email: raw.author_email,
            authored: raw.authored,
            summary,
            message: raw.message,
        }
    }
}
