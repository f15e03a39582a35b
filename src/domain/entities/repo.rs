//! Repo entity - a tree loaded from a cloned remote repository

use super::{Folder, TreeNode, TreeVisitor};
use crate::domain::value_objects::ROOT_SLASH;

/// A folder tree that came from a remote repository.
///
/// The clone itself is gone by the time a `Repo` exists; only the loaded
/// content remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    /// `owner/name`
    name: String,
    /// Path of interest inside the repository, empty for the whole thing
    path: String,
    folder: Folder,
}

impl Repo {
    pub fn new(name: impl Into<String>, path: impl Into<String>, folder: Folder) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            folder,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }
}

impl TreeNode for Repo {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> String {
        self.name.clone()
    }

    fn dir_name(&self) -> String {
        ROOT_SLASH.to_string()
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        visitor.visit_repo(self);
    }
}

/// What the tree loader hands back: a local folder or a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedTree {
    Folder(Folder),
    Repo(Repo),
}

impl LoadedTree {
    /// The folder holding the documents, whichever way they were loaded.
    pub fn folder(&self) -> &Folder {
        match self {
            LoadedTree::Folder(folder) => folder,
            LoadedTree::Repo(repo) => repo.folder(),
        }
    }

    fn node(&self) -> &dyn TreeNode {
        match self {
            LoadedTree::Folder(folder) => folder,
            LoadedTree::Repo(repo) => repo,
        }
    }
}

impl TreeNode for LoadedTree {
    fn name(&self) -> &str {
        self.node().name()
    }

    fn full_name(&self) -> String {
        self.node().full_name()
    }

    fn dir_name(&self) -> String {
        self.node().dir_name()
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        self.node().accept(visitor);
    }
}
