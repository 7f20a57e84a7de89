//! # Error Suggestions
//!
//! Helpers building user-facing errors that say what went wrong and how to
//! fix it.

use std::path::Path;

use crate::date_range::FROM_KEYWORDS;

/// Error for a missing configuration file.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create it with a 'repositories:' list (name, url, labels, authentication)\n\
         hint: Use --config to point at another file\n\
         hint: Set the GIT_FOLLOW_UP_CONFIG environment variable",
        path = path.display()
    )
}

/// Error for a `--from` value that is neither a keyword nor a date.
pub fn unrecognized_from(token: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "from value not recognized: '{token}'\n\n\
         hint: Use one of {keywords}\n\
         hint: Or give a date as yyyy-MM-dd, e.g. 2019-05-05",
        keywords = FROM_KEYWORDS.join(", ")
    )
}
