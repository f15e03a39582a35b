//! File entity - a named, immutable byte buffer

use super::{TreeNode, TreeVisitor};
use crate::domain::value_objects::{join_names, ROOT_SLASH};

/// A document loaded from disk.
///
/// Equality only looks at the name; content doesn't take part in
/// structural comparison.
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    content: Vec<u8>,
    /// Full name of the owning folder. Set by the folder when it adopts the file.
    parent: Option<String>,
}

impl File {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            parent: None,
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_parent(&mut self, parent_full_name: String) {
        self.parent = Some(parent_full_name);
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for File {}

impl TreeNode for File {
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
        visitor.visit_file(self);
    }
}

/// Shared by files and folders.
pub(crate) fn full_name_of(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(dir) => join_names(dir, name),
        None if name.is_empty() => ROOT_SLASH.to_string(),
        None => name.to_string(),
    }
}
