//! Library-level integration tests running the whole pipeline (config,
//! synchronization, collection, aggregation, rendering) with the system
//! `git` backend against local repositories.

mod common;

use chrono::{DateTime, FixedOffset};
use common::prelude::*;

use git_follow_up::config;
use git_follow_up::error::Error;
use git_follow_up::filter::{DisplayField, Filter};
use git_follow_up::output::OutputConfig;
use git_follow_up::repository::{GitBackend, SystemGit};
use git_follow_up::{aggregate, collect, render, sync};

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

/// Three sources with interleaved commit dates, plus the parsed config.
fn pipeline_fixture() -> (TestFixture, config::Config) {
    let fixture = TestFixture::new();

    fixture
        .source("api")
        .commit("jean", "2019-06-24T09:00:00+02:00", "api: add login")
        .commit("jack", "2019-06-26T11:00:00+02:00", "api: fix login");
    fixture
        .source("web")
        .commit("jack", "2019-06-25T08:00:00+00:00", "web: login page");
    fixture
        .source("docs")
        .commit("jean", "2019-06-20T08:00:00+00:00", "docs: outline");

    let yaml = format!(
        "repositories:\n{}{}{}",
        repo_entry("api", &fixture.source_url("api"), &["backend"]),
        repo_entry("web", &fixture.source_url("web"), &["frontend"]),
        repo_entry("docs", &fixture.source_url("docs"), &[]),
    );
    let mirror_root = fixture.home().join("git");
    let config = config::parse(&yaml, &mirror_root).unwrap();
    (fixture.with_config(&yaml), config)
}

#[test]
fn test_full_pipeline_orders_commits_across_repositories() {
    if !git_available() {
        return;
    }
    let (_fixture, config) = pipeline_fixture();
    let repos = config.select_by_labels::<&str>(&[]);

    let outcomes = sync::sync_all(&repos, &SystemGit).unwrap();
    assert!(outcomes.iter().all(|o| o.is_success()), "{:?}", outcomes);
    let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["api", "web", "docs"]);

    let filter = Filter::new(
        at("2019-06-21T00:00:00+00:00"),
        vec![],
        vec![],
        [DisplayField::Repo, DisplayField::Message],
    );
    let commits = aggregate::merge(collect::collect_all(&repos, &SystemGit, &filter));

    let plain = OutputConfig::plain();
    let lines = render::render_all(&commits, &filter.display, &plain);
    assert_eq!(
        lines,
        [
            "[api] api: add login",
            "[web] web: login page",
            "[api] api: fix login",
        ]
    );
}

#[test]
fn test_authored_time_keeps_author_offset() {
    if !git_available() {
        return;
    }
    let (_fixture, config) = pipeline_fixture();
    let repos = config.select_by_labels(&["backend"]);
    sync::sync_all(&repos, &SystemGit).unwrap();

    let filter = Filter::new(
        at("2019-01-01T00:00:00+00:00"),
        vec![],
        vec![],
        DisplayField::ALL,
    );
    let commits = collect::collect_repository(&repos[0], &SystemGit, &filter).unwrap();

    assert_eq!(commits.len(), 2);
    assert!(commits
        .iter()
        .all(|c| c.authored.offset().local_minus_utc() == 2 * 3600));
    assert!(commits.iter().all(|c| c.hash.len() == 40));
}

#[test]
fn test_collect_unsynced_repository_is_traversal_error() {
    if !git_available() {
        return;
    }
    let (_fixture, config) = pipeline_fixture();
    let filter = Filter::new(
        at("2019-01-01T00:00:00+00:00"),
        vec![],
        vec![],
        DisplayField::ALL,
    );

    let err = collect::collect_repository(&config.repositories[0], &SystemGit, &filter)
        .unwrap_err();
    assert!(matches!(err, Error::Traversal { ref repo, .. } if repo == "api"));

    let per_repo = collect::collect_all(&config.repositories, &SystemGit, &filter);
    assert_eq!(per_repo.len(), 3);
    assert!(per_repo.iter().all(Vec::is_empty));
}

#[test]
fn test_clone_into_existing_mirror_reports_exists() {
    if !git_available() {
        return;
    }
    let (_fixture, config) = pipeline_fixture();
    let repo = &config.repositories[1];
    let auth = git_follow_up::auth::GitAuth::None;

    SystemGit.clone_bare(&repo.url, &repo.local_path, &auth).unwrap();
    let err = SystemGit
        .clone_bare(&repo.url, &repo.local_path, &auth)
        .unwrap_err();
    assert!(matches!(err, Error::RepositoryExists { .. }));

    SystemGit.open(&repo.local_path).unwrap();
    SystemGit.fetch_all(&repo.name, &repo.local_path, &auth).unwrap();
}

#[test]
fn test_sync_isolates_unreachable_remote() {
    if !git_available() {
        return;
    }
    let (fixture, config) = pipeline_fixture();
    let mut repos = config.repositories.clone();
    repos[1].url = fixture.child("sources/gone").path().display().to_string();

    let outcomes = sync::sync_all(&repos, &SystemGit).unwrap();

    assert!(outcomes[0].is_success());
    assert!(matches!(outcomes[1].result, Err(Error::GitClone { .. })));
    assert!(outcomes[2].is_success());
}

#[test]
fn test_mirror_inside_enclosing_repository_is_never_used() {
    if !git_available() {
        return;
    }
    let (fixture, config) = pipeline_fixture();

    // The whole home is itself a repository, and the mirror of `api` is a
    // plain directory inside it.
    common::SourceRepo::init(&fixture.home()).commit(
        "dot",
        "2019-06-30T12:00:00+00:00",
        "dotfiles",
    );

    let api = &config.repositories[0];
    std::fs::create_dir_all(api.local_path.join("junk")).unwrap();

    let outcomes = sync::sync_all(std::slice::from_ref(api), &SystemGit).unwrap();
    assert!(matches!(outcomes[0].result, Err(Error::GitClone { .. })));

    let filter = Filter::new(
        at("1970-01-02T00:00:00+00:00"),
        vec![],
        vec![],
        DisplayField::ALL,
    );
    let err = collect::collect_repository(api, &SystemGit, &filter).unwrap_err();
    assert!(matches!(err, Error::Traversal { ref repo, .. } if repo == "api"));
    assert!(!api.local_path.join("HEAD").exists());
}
