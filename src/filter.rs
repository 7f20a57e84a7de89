//! # Commit Filtering
//!
//! A [`Filter`] is built once per invocation from the command-line flags and
//! passed by reference through collection and rendering. It carries:
//!
//! - `from`: commits must be authored strictly after this instant
//! - `labels`: repositories must carry every one of these labels
//! - `authors`: if non-empty, the commit author must match one of them
//! - `display`: which fields the renderer prints
//!
//! Label selection happens per repository, before any git work
//! ([`contains_all`]). The per-commit predicate ([`Filter::matches`]) only
//! looks at the authored time and the author.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset};
use clap::ValueEnum;

use crate::commit::RawCommit;

/// A field the renderer can print.
///
/// The declaration order is the canonical rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum DisplayField {
    /// Repository name
    Repo,
    /// Authored date, to the minute
    Date,
    /// Abbreviated commit hash
    Hash,
    /// First line of the message
    Message,
    /// Author email
    Author,
}

impl DisplayField {
    /// All fields, in canonical order.
    pub const ALL: [DisplayField; 5] = [
        DisplayField::Repo,
        DisplayField::Date,
        DisplayField::Hash,
        DisplayField::Message,
        DisplayField::Author,
    ];
}

/// Ordered set of fields to render. Iteration is always canonical.
pub type DisplayFields = BTreeSet<DisplayField>;

/// The active commit filter.
#[derive(Debug, Clone)]
pub struct Filter {
    pub from: DateTime<FixedOffset>,
    pub labels: Vec<String>,
    /// Lowercased author substrings
    pub authors: Vec<String>,
    pub display: DisplayFields,
}

impl Filter {
    /// Build a filter. Author tokens are normalized to lowercase; an empty
    /// `display` selection means every field.
    pub fn new(
        from: DateTime<FixedOffset>,
        labels: Vec<String>,
        authors: Vec<String>,
        display: impl IntoIterator<Item = DisplayField>,
    ) -> Self {
        let mut display: DisplayFields = display.into_iter().collect();
        if display.is_empty() {
            display.extend(DisplayField::ALL);
        }

        Self {
            from,
            labels,
            authors: authors.iter().map(|a| a.to_lowercase()).collect(),
            display,
        }
    }

    /// Whether `commit` belongs in the output.
    pub fn matches(&self, commit: &RawCommit) -> bool {
        if commit.authored <= self.from {
            return false;
        }
        self.authors.is_empty() || match_any(&commit.author_identity(), &self.authors)
    }
}

/// True when every element of `required` is present in `available`.
pub fn contains_all<S: AsRef<str>>(available: &BTreeSet<String>, required: &[S]) -> bool {
    required
        .iter()
        .all(|label| available.contains(label.as_ref()))
}

/// True when lowercased `haystack` contains any of the (already lowercased)
/// `needles`.
pub fn match_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle.as_str()))
}
