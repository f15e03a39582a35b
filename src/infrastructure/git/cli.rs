//! Git CLI cloner
//!
//! Implements RepoCloner by running `git clone`.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::RepoCloner;
use crate::domain::value_objects::clone_url;
use crate::error::{MdripError, MdripResult};

pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_CLONE_BASE_URL: &str = "https://github.com/";

/// Clones repositories with an external git program.
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Program to run, e.g. "git" or "/usr/local/bin/git"
    program: String,
    /// Prepended to `owner/name` to form the clone url
    base_url: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM, DEFAULT_CLONE_BASE_URL)
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            base_url: base_url.into(),
        }
    }

    /// Check if the git program can be run
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl RepoCloner for GitCli {
    fn clone_into(&self, repo: &str, dest: &Path) -> MdripResult<()> {
        if !self.is_available() {
            return Err(MdripError::RemoteClone {
                repo: repo.to_string(),
                message: format!("maybe no git program? ('{}' did not run)", self.program),
            });
        }
        let url = clone_url(&self.base_url, repo);
        tracing::info!(url = %url, dest = %dest.display(), "cloning");
        let output = Command::new(&self.program)
            .arg("clone")
            .arg("--quiet")
            .arg(&url)
            .arg(dest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| MdripError::RemoteClone {
                repo: repo.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(MdripError::RemoteClone {
                repo: repo.to_string(),
                message: format!(
                    "git clone failure ({}): {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        tracing::info!("clone complete");
        Ok(())
    }
}
