use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Output};

use chrono::DateTime;
use log::debug;

use crate::auth::GitAuth;
use crate::commit::RawCommit;
use crate::error::{Error, Result};

/// Refspec mirroring every remote ref into the same local ref.
pub const FETCH_REFSPEC: &str = "refs/*:refs/*";

const FIELD_SEPARATOR: char = '\x1f';
const RECORD_SEPARATOR: char = '\x1e';

/// `git log` format producing one record per commit:
/// hash, author name, author email, strict ISO-8601 author date, raw message.
const LOG_FORMAT: &str = "--format=%H%x1f%an%x1f%ae%x1f%aI%x1f%B%x1e";

/// Start a git command carrying `auth`.
///
/// Terminal prompts are disabled so a remote asking for credentials fails
/// instead of blocking on stdin.
fn git(auth: &GitAuth) -> Command {
    let mut cmd = Command::new("git");
    auth.apply(&mut cmd);
    cmd.env("GIT_TERMINAL_PROMPT", "0");
    cmd
}

/// Start a git command operating on the mirror at `path`.
///
/// The git directory is given explicitly, so git never goes looking for a
/// repository in the parent directories of `path`.
fn git_in(path: &Path, auth: &GitAuth) -> Command {
    let mut git_dir = OsString::from("--git-dir=");
    git_dir.push(path);
    let mut cmd = git(auth);
    cmd.arg(git_dir);
    cmd
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Whether `path` exists and has at least one entry.
fn holds_data(path: &Path) -> io::Result<bool> {
    match fs::read_dir(path) {
        Ok(mut entries) => Ok(entries.next().is_some()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Create a bare mirror of `url` at `target`, without a working tree.
///
/// Returns [`Error::RepositoryExists`] when `target` already is a bare
/// repository, so callers can open the existing mirror instead. Any other
/// non-empty `target` is left alone and reported as a clone failure.
pub fn clone_bare(url: &str, target: &Path, auth: &GitAuth) -> Result<()> {
    if holds_data(target)? {
        if open(target).is_ok() {
            return Err(Error::RepositoryExists {
                path: target.to_path_buf(),
            });
        }
        return Err(Error::GitClone {
            url: url.to_string(),
            message: format!(
                "target {} exists and is not a repository",
                target.display()
            ),
            hint: Some("Remove or rename that directory, then synchronize again".to_string()),
        });
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("git clone --bare {} {}", url, target.display());
    let output = git(auth)
        .args(["clone", "--bare", "--quiet", url])
        .arg(target)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on your PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = stderr_of(&output);

        // Provide a hint for common auth failures
        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
            || stderr.contains("could not read Username")
        {
            Some(
                "Check the repository's authentication type and auth_file in the configuration"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr,
            hint,
        });
    }

    Ok(())
}

/// Check that `path` itself is a bare git repository.
pub fn open(path: &Path) -> Result<()> {
    let output = git_in(path, &GitAuth::None)
        .args(["rev-parse", "--is-bare-repository"])
        .output()
        .map_err(|e| command_error("rev-parse --is-bare-repository", path, e))?;

    let failure = |stderr: String| Error::GitCommand {
        command: "rev-parse --is-bare-repository".to_string(),
        path: path.to_path_buf(),
        stderr,
    };

    if !output.status.success() {
        return Err(failure(stderr_of(&output)));
    }
    if String::from_utf8_lossy(&output.stdout).trim() != "true" {
        return Err(failure("not a bare repository".to_string()));
    }

    Ok(())
}

/// Fetch every ref of `origin` into the mirror at `path`.
///
/// Nothing to fetch is a success.
pub fn fetch_all(repo: &str, path: &Path, auth: &GitAuth) -> Result<()> {
    debug!("git fetch origin {} in {}", FETCH_REFSPEC, path.display());
    let output = git_in(path, auth)
        .args(["fetch", "--quiet", "origin", FETCH_REFSPEC])
        .output()
        .map_err(|e| Error::GitFetch {
            repo: repo.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitFetch {
            repo: repo.to_string(),
            message: stderr_of(&output),
        });
    }

    Ok(())
}

/// Hash of the commit HEAD points to.
pub fn resolve_head(path: &Path) -> Result<String> {
    let output = git_in(path, &GitAuth::None)
        .args(["rev-parse", "--verify", "HEAD"])
        .output()
        .map_err(|e| command_error("rev-parse --verify HEAD", path, e))?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: "rev-parse --verify HEAD".to_string(),
            path: path.to_path_buf(),
            stderr: stderr_of(&output),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Every commit reachable from `from` or any ref, newest committer time
/// first.
pub fn log(path: &Path, from: &str) -> Result<Vec<RawCommit>> {
    debug!("git log {} --all --date-order in {}", from, path.display());
    let output = git_in(path, &GitAuth::None)
        .args(["log", from, "--all", "--date-order", LOG_FORMAT])
        .output()
        .map_err(|e| command_error("log", path, e))?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: "log".to_string(),
            path: path.to_path_buf(),
            stderr: stderr_of(&output),
        });
    }

    parse_log(&String::from_utf8_lossy(&output.stdout))
}

fn command_error(command: &str, path: &Path, err: io::Error) -> Error {
    Error::GitCommand {
        command: command.to_string(),
        path: path.to_path_buf(),
        stderr: err.to_string(),
    }
}

/// Decode the output of `git log` run with the record format used by [`log`].
pub fn parse_log(output: &str) -> Result<Vec<RawCommit>> {
    output
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_start_matches('\n'))
        .filter(|record| !record.is_empty())
        .map(parse_record)
        .collect()
}

fn parse_record(record: &str) -> Result<RawCommit> {
    let fields: Vec<&str> = record.splitn(5, FIELD_SEPARATOR).collect();
    let [hash, author_name, author_email, date, message] = fields[..] else {
        return Err(Error::CommitParse {
            message: format!("expected 5 fields, got {} in {:?}", fields.len(), record),
        });
    };

    let authored = DateTime::parse_from_rfc3339(date).map_err(|e| Error::CommitParse {
        message: format!("invalid author date '{}' for {}: {}", date, hash, e),
    })?;

    Ok(RawCommit {
        hash: hash.to_string(),
        author_name: author_name.to_string(),
        author_email: author_email.to_string(),
        authored,
        message: message.trim_end_matches('\n').to_string(),
    })
}
