//! Domain Entities
//!
//! The loaded tree (files, folders, repositories), the syntax tree of a
//! parsed document, and the code blocks extracted from it.

mod code_block;
mod file;
mod folder;
mod repo;
mod syntax_tree;
mod tree_node;

pub use code_block::{CodeBlock, ANON_BLOCK_NAME};
pub use file::File;
pub use folder::Folder;
pub use repo::{LoadedTree, Repo};
pub use syntax_tree::{Fence, Node, NodeId, NodeKind, SyntaxTree};
pub use tree_node::{TreeNode, TreeVisitor};
