//! Merging of per-repository commit lists into a single timeline.

use crate::commit::Commit;

/// Flatten `per_repository` into one list sorted by ascending authored time.
///
/// Only the authored instant is compared, so commits from different
/// repositories interleave freely. The relative order of commits authored
/// at the same instant is unspecified.
pub fn merge<I>(per_repository: I) -> Vec<Commit>
where
    I: IntoIterator<Item = Vec<Commit>>,
{
    let mut commits: Vec<Commit> = per_repository.into_iter().flatten().collect();
    commits.sort_by_key(|commit| commit.authored);
    commits
}
