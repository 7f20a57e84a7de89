//! # Repository Authentication
//!
//! Each configured repository declares how git should authenticate against
//! its remote. The declaration ([`Authentication`]) is resolved into a
//! concrete credential ([`GitAuth`]) once per synchronization, at which point
//! any credential file is read. A missing or unreadable file fails that
//! repository only.
//!
//! `GitAuth` knows how to hand itself to a `git` invocation:
//!
//! - SSH keys are passed through `GIT_SSH_COMMAND`.
//! - Access tokens become an HTTP basic `Authorization` header using a
//!   placeholder user name, which hosting providers ignore for token auth.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User name sent along with access tokens.
pub const TOKEN_USERNAME: &str = "anything";

/// Authentication declared for a repository in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Authentication {
    /// Anonymous access
    #[default]
    None,
    /// SSH private key, `~/.ssh/id_rsa` unless `auth_file` is given
    Ssh {
        #[serde(default)]
        auth_file: Option<PathBuf>,
    },
    /// Access token read from `auth_file`, used as an HTTP password
    AccessToken { auth_file: PathBuf },
}

/// A resolved credential, ready to be applied to a git command.
#[derive(Clone, PartialEq, Eq)]
pub enum GitAuth {
    None,
    SshKey { key_file: PathBuf },
    Basic { username: String, password: String },
}

impl fmt::Debug for GitAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitAuth::None => f.write_str("None"),
            GitAuth::SshKey { key_file } => f
                .debug_struct("SshKey")
                .field("key_file", key_file)
                .finish(),
            GitAuth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

impl GitAuth {
    /// Configure `cmd` to authenticate with this credential.
    ///
    /// Must be called before the git subcommand is added, since token
    /// authentication uses a `-c` option.
    pub fn apply(&self, cmd: &mut Command) {
        match self {
            GitAuth::None => {}
            GitAuth::SshKey { key_file } => {
                cmd.env("GIT_SSH_COMMAND", ssh_command(key_file));
            }
            GitAuth::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                cmd.arg("-c")
                    .arg(format!("http.extraHeader=Authorization: Basic {}", encoded));
            }
        }
    }
}

/// Resolve the credential declared for repository `repo`.
pub fn resolve(repo: &str, authentication: &Authentication) -> Result<GitAuth> {
    match authentication {
        Authentication::None => Ok(GitAuth::None),
        Authentication::Ssh { auth_file } => {
            let key_file = match auth_file {
                Some(path) => path.clone(),
                None => crate::defaults::default_ssh_key().ok_or_else(|| Error::Credential {
                    repo: repo.to_string(),
                    path: PathBuf::from("~/.ssh/id_rsa"),
                    message: "home directory could not be determined".to_string(),
                })?,
            };
            // Key material is only read here to surface unreadable files early;
            // ssh loads it again itself.
            fs::read(&key_file).map_err(|e| credential_error(repo, &key_file, e))?;
            Ok(GitAuth::SshKey { key_file })
        }
        Authentication::AccessToken { auth_file } => {
            let token =
                fs::read_to_string(auth_file).map_err(|e| credential_error(repo, auth_file, e))?;
            let token = token.trim_end();
            if token.is_empty() {
                return Err(Error::Credential {
                    repo: repo.to_string(),
                    path: auth_file.clone(),
                    message: "token file is empty".to_string(),
                });
            }
            Ok(GitAuth::Basic {
                username: TOKEN_USERNAME.to_string(),
                password: token.to_string(),
            })
        }
    }
}

fn credential_error(repo: &str, path: &Path, err: std::io::Error) -> Error {
    Error::Credential {
        repo: repo.to_string(),
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn ssh_command(key_file: &Path) -> String {
    let quoted = key_file.to_string_lossy().replace('\'', r"'\''");
    format!("ssh -i '{}' -o IdentitiesOnly=yes", quoted)
}
