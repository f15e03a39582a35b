//! Tree Dump
//!
//! A TreeVisitor that renders a loaded tree as indented text:
//!
//! ```text
//! root/
//!   README.md : # Hello...
//!   aaa/
//!     f01.md : # file f01...
//! ```


use crate::domain::entities::{File, Folder, Repo, TreeNode, TreeVisitor};
use crate::domain::value_objects::ROOT_SLASH;

/// Bytes of document content shown next to each file.
pub const DEFAULT_SUMMARY_WIDTH: usize = 60;

const INDENT_STEP: usize = 2;

pub struct DumpVisitor {
    out: String,
    indent: usize,
    summary_width: usize,
}

impl Default for DumpVisitor {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_WIDTH)
    }
}

impl DumpVisitor {
    pub fn new(summary_width: usize) -> Self {
        Self {
            out: String::new(),
            indent: 0,
            summary_width,
        }
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        self.out.extend(std::iter::repeat(' ').take(self.indent));
    }
}

impl TreeVisitor for DumpVisitor {
    fn visit_file(&mut self, file: &File) {
        self.pad();
        self.out.push_str(&format!(
            "{} : {}...\n",
            file.name(),
            summarize(file.content(), self.summary_width)
        ));
    }

    fn visit_folder(&mut self, folder: &Folder) {
        self.pad();
        self.out.push_str(folder.name());
        if !folder.is_root() {
            self.out.push_str(ROOT_SLASH);
        }
        self.out.push('\n');
        self.indent += INDENT_STEP;
        folder.visit_files(self);
        folder.visit_folders(self);
        self.indent -= INDENT_STEP;
    }

    fn visit_repo(&mut self, repo: &Repo) {
        self.pad();
        self.out.push_str(repo.name());
        if !repo.path().is_empty() {
            self.out.push(' ');
            self.out.push_str(repo.path());
        }
        self.out.push('\n');
        self.indent += INDENT_STEP;
        repo.folder().accept(self);
        self.indent -= INDENT_STEP;
    }
}

/// Render any tree node.
pub fn dump(node: &dyn TreeNode, summary_width: usize) -> String {
    let mut visitor = DumpVisitor::new(summary_width);
    node.accept(&mut visitor);
    visitor.into_output()
}

/// The first `width` bytes of `content` with control characters dropped.
pub fn summarize(content: &[u8], width: usize) -> String {
    let head = &content[..content.len().min(width)];
    String::from_utf8_lossy(head)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}
