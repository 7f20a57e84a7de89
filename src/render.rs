//! # Commit Rendering
//!
//! Turns a collected commit into one line of output. Only the selected
//! fields are printed, always in the canonical order:
//!
//! ```text
//! [repo][2019-06-25 14:03][1a2b3c4d] First line of the message (author@example.com)
//! ```
//!
//! - the date is the authored time, to the minute, in the author's offset
//! - the hash is abbreviated to its first 8 characters
//! - the message is its first line, cut to 70 characters followed by `...`
//! - the author is shown by email
//!
//! When colours are enabled the bracketed fields are styled; the text itself
//! is identical either way.

use console::style;

use crate::commit::Commit;
use crate::filter::{DisplayField, DisplayFields};
use crate::output::OutputConfig;

/// Characters of the commit hash shown.
pub const HASH_LENGTH: usize = 8;

/// Characters of the message summary shown before truncation.
pub const SUMMARY_WIDTH: usize = 70;

/// Layout of the date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render `commit` as a single line.
pub fn render(commit: &Commit, fields: &DisplayFields, output: &OutputConfig) -> String {
    let mut tags = String::new();
    let mut words: Vec<String> = Vec::new();

    for field in fields {
        match field {
            DisplayField::Repo => {
                let repo = paint(output, &commit.repository, |s| s.cyan());
                tags.push_str(&format!("[{}]", repo));
            }
            DisplayField::Date => {
                let date = commit.authored.format(DATE_FORMAT).to_string();
                tags.push_str(&format!("[{}]", paint(output, &date, |s| s.green())));
            }
            DisplayField::Hash => {
                let hash = abbreviate_hash(&commit.hash);
                tags.push_str(&format!("[{}]", paint(output, hash, |s| s.yellow())));
            }
            DisplayField::Message => words.push(truncate_summary(&commit.summary)),
            DisplayField::Author => words.push(format!(
                "({})",
                paint(output, &commit.author_email, |s| s.dim())
            )),
        }
    }

    if !tags.is_empty() {
        words.insert(0, tags);
    }
    words.join(" ")
}

/// Render every commit, one line each.
pub fn render_all(
    commits: &[Commit],
    fields: &DisplayFields,
    output: &OutputConfig,
) -> Vec<String> {
    commits
        .iter()
        .map(|commit| render(commit, fields, output))
        .collect()
}

fn paint<F>(output: &OutputConfig, text: &str, styler: F) -> String
where
    F: FnOnce(console::StyledObject<&str>) -> console::StyledObject<&str>,
{
    if output.use_color {
        styler(style(text).force_styling(true)).to_string()
    } else {
        text.to_string()
    }
}

fn abbreviate_hash(hash: &str) -> &str {
    hash.get(..HASH_LENGTH).unwrap_or(hash)
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_WIDTH {
        let kept: String = summary.chars().take(SUMMARY_WIDTH).collect();
        format!("{}...", kept)
    } else {
        summary.to_string()
    }
}
