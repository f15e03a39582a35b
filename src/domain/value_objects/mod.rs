//! Value Objects
//!
//! Immutable types that are defined by their value, not identity.

mod label;
mod repo_spec;
mod tree_path;

pub use label::Label;
pub use repo_spec::{clone_url, smells_like_github_clone_arg, RepoSpec};
pub use tree_path::{
    clean_path, fsplit, join_names, self_path, TreePath, CURRENT_DIR, ROOT_SLASH, UP_DIR,
};
