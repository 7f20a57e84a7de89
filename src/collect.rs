//! Commit collection from local mirrors.
//!
//! Repositories are read one after the other. For each one the full history
//! across all refs is listed, passed through the [`Filter`], and the
//! surviving commits are tagged with the repository name. A repository whose
//! mirror cannot be read (never synced, empty remote, corrupt mirror) is
//! reported and contributes nothing; the pass continues with the next one.

use log::{debug, warn};

use crate::commit::Commit;
use crate::config::RepositoryDescriptor;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::repository::GitBackend;

/// Matching commits of one repository, in the backend's committer-time order.
pub fn collect_repository<B>(
    repo: &RepositoryDescriptor,
    backend: &B,
    filter: &Filter,
) -> Result<Vec<Commit>>
where
    B: GitBackend + ?Sized,
{
    let traversal = |e: Error| Error::Traversal {
        repo: repo.name.clone(),
        message: e.to_string(),
    };

    backend.open(&repo.local_path).map_err(traversal)?;
    let head = backend.resolve_head(&repo.local_path).map_err(traversal)?;
    let history = backend.log(&repo.local_path, &head).map_err(traversal)?;

    let total = history.len();
    let commits: Vec<Commit> = history
        .into_iter()
        .filter(|raw| filter.matches(raw))
        .map(|raw| Commit::new(repo.name.as_str(), raw))
        .collect();

    debug!("{}: {} of {} commits match", repo.name, commits.len(), total);
    Ok(commits)
}

/// Collect matching commits from every repository, one list per repository
/// in input order. Failing repositories yield an empty list.
pub fn collect_all<B>(
    repos: &[RepositoryDescriptor],
    backend: &B,
    filter: &Filter,
) -> Vec<Vec<Commit>>
where
    B: GitBackend + ?Sized,
{
    repos
        .iter()
        .map(|repo| {
            collect_repository(repo, backend, filter).unwrap_or_else(|e| {
                warn!("{}", e);
                Vec::new()
            })
        })
        .collect()
}
