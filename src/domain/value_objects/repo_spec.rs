//! Remote repository specifiers
//!
//! Accepts the forms people paste from a browser or a `git clone` command:
//!
//! - `gh:owner/name`
//! - `git@github.com:owner/name.git`
//! - `https://github.com/owner/name/some/sub/path`

use crate::error::{MdripError, MdripResult};

/// Prefixes stripped before looking for `owner/name`, in this order.
const STRIPPED_PREFIXES: &[&str] = &[
    "gh:",
    "https://",
    "http://",
    "git@",
    "github.com:",
    "github.com/",
];

const GIT_SUFFIX: &str = ".git";

/// Returns true if the argument looks like a GitHub url or `git clone` argument
/// rather than a local path.
pub fn smells_like_github_clone_arg(arg: &str) -> bool {
    let arg = arg.to_lowercase();
    arg.starts_with("gh:")
        || arg.starts_with("git@github.com:")
        || arg.starts_with("https://github.com/")
}

/// A repository and a path of interest inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    repo: String,
    path: String,
}

impl RepoSpec {
    pub fn parse(arg: &str) -> MdripResult<Self> {
        let mut rest = arg;
        for prefix in STRIPPED_PREFIXES {
            if strip_prefix_ignore_case(rest, prefix).is_some() {
                rest = &rest[prefix.len()..];
            }
        }
        let rest = rest.strip_suffix(GIT_SUFFIX).unwrap_or(rest);

        let owner_end = match rest.find('/') {
            Some(i) if i > 0 => i,
            _ => {
                return Err(MdripError::InvalidRepoSpec {
                    arg: arg.to_string(),
                    message: "no separator in github spec".to_string(),
                })
            }
        };
        match rest[owner_end + 1..].find('/') {
            None => Ok(Self {
                repo: rest.to_string(),
                path: String::new(),
            }),
            Some(j) => {
                let repo_end = owner_end + 1 + j;
                Ok(Self {
                    repo: rest[..repo_end].to_string(),
                    path: rest[repo_end + 1..].to_string(),
                })
            }
        }
    }

    /// `owner/name`
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Path inside the repository, empty for the whole repository.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn clone_url(&self, base_url: &str) -> String {
        clone_url(base_url, &self.repo)
    }
}

/// Clone url for `owner/name`, e.g. `https://github.com/owner/name.git`.
pub fn clone_url(base_url: &str, repo: &str) -> String {
    format!("{base_url}{repo}{GIT_SUFFIX}")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
