//! # git-follow-up
//!
//! Keeps track of contributions made across many git repositories described
//! in a YAML configuration file. Repositories can be hosted anywhere and
//! reached over ssh or https, with or without an access token.
//!
//! ## Quick Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use git_follow_up::date_range;
//!
//! let sunday = Utc.with_ymd_and_hms(2019, 6, 30, 18, 0, 0).unwrap();
//! let monday = Utc.with_ymd_and_hms(2019, 6, 24, 0, 0, 0).unwrap();
//! assert_eq!(date_range::resolve("wtd", &sunday).unwrap(), monday);
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Configuration (`config`)**: load the repository list and derive each
//!     repository's local mirror path.
//! 2.  **Selection**: keep the repositories carrying every requested label.
//! 3.  **Synchronization (`sync`)**, optional: update every selected mirror
//!     concurrently, one worker per repository, tolerating failures.
//! 4.  **Collection (`collect`)**: read each mirror's history in turn and keep
//!     the commits accepted by the `filter`.
//! 5.  **Aggregation (`aggregate`)**: merge all commits into one timeline
//!     sorted by authored time.
//! 6.  **Rendering (`render`)**: print one line per commit with the selected
//!     fields.
//!
//! Git itself is reached only through the `repository::GitBackend` trait;
//! the default implementation drives the system `git` binary (`git`).

pub mod aggregate;
pub mod auth;
pub mod collect;
pub mod commit;
pub mod config;
pub mod date_range;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod render;
pub mod repository;
pub mod suggestions;
pub mod sync;
