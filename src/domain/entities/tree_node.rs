//! TreeNode capability shared by files, folders and repositories

use super::{File, Folder, Repo};

/// Something that sits in a loaded tree.
pub trait TreeNode {
    /// Simple name, no separators (the root folder may carry a path).
    fn name(&self) -> &str;

    /// Name joined onto the names of all ancestors.
    fn full_name(&self) -> String;

    /// Full name of the parent, or the root separator for a root node.
    fn dir_name(&self) -> String;

    fn accept(&self, visitor: &mut dyn TreeVisitor);
}

/// Double dispatch over the three kinds of node.
pub trait TreeVisitor {
    fn visit_file(&mut self, file: &File);
    fn visit_folder(&mut self, folder: &Folder);
    fn visit_repo(&mut self, repo: &Repo);
}
