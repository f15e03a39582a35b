//! Block Accumulator
//!
//! A TreeVisitor that parses every document in a tree and collects the code
//! blocks found in them.

use crate::domain::entities::{CodeBlock, File, Folder, Repo, TreeNode, TreeVisitor};
use crate::domain::ports::DocumentParser;
use crate::domain::value_objects::Label;
use crate::error::{MdripError, MdripResult};

use super::block_extractor::extract_blocks;

pub struct BlockAccumulator<P: DocumentParser> {
    parser: P,
    blocks: Vec<CodeBlock>,
    /// First extraction failure; later documents are skipped once set
    error: Option<MdripError>,
}

impl<P: DocumentParser> BlockAccumulator<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            blocks: Vec::new(),
            error: None,
        }
    }

    /// Blocks carrying `label`, in document order. The wildcard selects all.
    pub fn blocks(&self, label: &Label) -> Vec<&CodeBlock> {
        self.blocks.iter().filter(|b| b.has_label(label)).collect()
    }

    pub fn all_blocks(&self) -> &[CodeBlock] {
        &self.blocks
    }

    /// Take the first failure, if any, leaving the blocks in place.
    pub fn take_error(&mut self) -> Option<MdripError> {
        self.error.take()
    }

    /// Consume the accumulator, surfacing the first failure if there was one.
    pub fn finish(self) -> MdripResult<Vec<CodeBlock>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.blocks),
        }
    }
}

impl<P: DocumentParser> TreeVisitor for BlockAccumulator<P> {
    fn visit_file(&mut self, file: &File) {
        if self.error.is_some() {
            return;
        }
        let name = file.full_name();
        tracing::debug!(file = %name, "scanning");
        let source = String::from_utf8_lossy(file.content());
        let tree = self.parser.parse(&source);
        match extract_blocks(&tree, &source, &name) {
            Ok(found) => self.blocks.extend(found),
            Err(err) => self.error = Some(err),
        }
    }

    fn visit_folder(&mut self, folder: &Folder) {
        folder.visit_files(self);
        folder.visit_folders(self);
    }

    fn visit_repo(&mut self, repo: &Repo) {
        repo.folder().accept(self);
    }
}
