//! RepoCloner port - fetches a remote repository into a local directory
//!
//! The real implementation shells out to `git`; tests inject a fake.

use std::path::Path;

use crate::error::MdripResult;

pub trait RepoCloner {
    /// Clone `repo` (an `owner/name` pair) into `dest`, which already exists and is empty.
    fn clone_into(&self, repo: &str, dest: &Path) -> MdripResult<()>;
}
