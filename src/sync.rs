//! # Mirror Synchronization
//!
//! Brings the local mirror of every selected repository up to date with its
//! remote. Each repository is handled by its own worker:
//!
//! 1.  Resolve the credential declared for the repository.
//! 2.  Create a bare mirror, or open the existing one.
//! 3.  Fetch `refs/*:refs/*`.
//!
//! The worker pool is sized to the number of repositories, so every
//! repository is in flight at the same time and a slow remote only holds up
//! its own worker. A failure at any step ends that repository's task and is
//! recorded in its [`SyncOutcome`]; siblings are unaffected. [`sync_all`]
//! returns once every task has finished, with outcomes in input order.

use log::{info, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::auth;
use crate::config::RepositoryDescriptor;
use crate::error::{Error, Result};
use crate::repository::GitBackend;

/// Result of synchronizing one repository.
#[derive(Debug)]
pub struct SyncOutcome {
    pub name: String,
    pub result: Result<()>,
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Synchronize a single repository's mirror.
pub fn sync_repository<B>(repo: &RepositoryDescriptor, backend: &B) -> Result<()>
where
    B: GitBackend + ?Sized,
{
    info!("Syncing {}...", repo.name);

    let credential = auth::resolve(&repo.name, &repo.authentication)?;

    match backend.clone_bare(&repo.url, &repo.local_path, &credential) {
        Ok(()) => {}
        Err(Error::RepositoryExists { .. }) => backend.open(&repo.local_path)?,
        Err(e) => return Err(e),
    }

    backend.fetch_all(&repo.name, &repo.local_path, &credential)
}

/// Synchronize every repository in `repos` concurrently and wait for all of
/// them.
///
/// Only failing to start the workers is an error; per-repository failures
/// are reported through the returned outcomes.
pub fn sync_all<B>(repos: &[RepositoryDescriptor], backend: &B) -> Result<Vec<SyncOutcome>>
where
    B: GitBackend + ?Sized,
{
    if repos.is_empty() {
        return Ok(Vec::new());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(repos.len())
        .thread_name(|index| format!("sync-{}", index))
        .build()?;

    let outcomes = pool.install(|| {
        repos
            .par_iter()
            .with_max_len(1)
            .map(|repo| {
                let result = sync_repository(repo, backend);
                if let Err(e) = &result {
                    warn!("{}", e);
                }
                SyncOutcome {
                    name: repo.name.clone(),
                    result,
                }
            })
            .collect()
    });

    Ok(outcomes)
}
