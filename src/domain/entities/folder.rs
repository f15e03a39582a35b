//! Folder entity - an ordered group of files and sub-folders

use super::file::full_name_of;
use super::{File, TreeNode, TreeVisitor};
use crate::domain::policies::{reorder_files, reorder_folders};
use crate::domain::value_objects::ROOT_SLASH;

/// A named group of files and folders.
///
/// Children are owned in display order. A child only remembers its parent's
/// full name, which is refreshed whenever the child is adopted or an ancestor
/// is renamed.
#[derive(Debug, Clone, Default)]
pub struct Folder {
    name: String,
    files: Vec<File>,
    folders: Vec<Folder>,
    parent: Option<String>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: adopt a file
    pub fn with_file(mut self, file: File) -> Self {
        self.add_file(file);
        self
    }

    /// Builder: adopt a sub-folder
    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.add_folder(folder);
        self
    }

    pub fn add_file(&mut self, mut file: File) {
        file.set_parent(self.full_name());
        self.files.push(file);
    }

    pub fn add_folder(&mut self, mut folder: Folder) {
        folder.parent = Some(self.full_name());
        folder.relink();
        self.folders.push(folder);
    }

    /// Rename the folder. Descendants pick up the new full name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.relink();
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// True when this folder stands for the whole file system root.
    pub fn is_root(&self) -> bool {
        self.name == ROOT_SLASH
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name() == name)
    }

    /// Number of files at or below this folder.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(Folder::file_count).sum::<usize>()
    }

    /// Re-permute both child lists according to an ordering manifest.
    pub fn apply_ordering(&mut self, ordering: &[String]) {
        self.files = reorder_files(std::mem::take(&mut self.files), ordering);
        self.folders = reorder_folders(std::mem::take(&mut self.folders), ordering);
    }

    pub fn visit_files(&self, visitor: &mut dyn TreeVisitor) {
        for file in &self.files {
            file.accept(visitor);
        }
    }

    pub fn visit_folders(&self, visitor: &mut dyn TreeVisitor) {
        for folder in &self.folders {
            folder.accept(visitor);
        }
    }

    fn relink(&mut self) {
        let me = self.full_name();
        for file in &mut self.files {
            file.set_parent(me.clone());
        }
        for folder in &mut self.folders {
            folder.parent = Some(me.clone());
            folder.relink();
        }
    }
}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.files == other.files && self.folders == other.folders
    }
}

impl Eq for Folder {}

impl TreeNode for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> String {
        full_name_of(self.parent.as_deref(), &self.name)
    }

    fn dir_name(&self) -> String {
        self.parent
            .clone()
            .unwrap_or_else(|| ROOT_SLASH.to_string())
    }

    fn accept(&self, visitor: &mut dyn TreeVisitor) {
        visitor.visit_folder(self);
    }
}
