//! Git Integration
//!
//! Clones remote repositories with the git CLI.

mod cli;

pub use cli::{GitCli, DEFAULT_CLONE_BASE_URL, DEFAULT_GIT_PROGRAM};
