//! mdrip - loads trees of markdown documents and extracts labeled code blocks
//!
//! A path argument (local file, local directory, or a GitHub repository
//! specifier) becomes an ordered tree of documents. Each document can then be
//! parsed and its fenced code blocks pulled out along with the `@labels` given
//! in an HTML comment just above them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    dump, extract_blocks, parse_labels, BlockAccumulator, DumpVisitor, TreeLoader,
};
pub use config::Config;
pub use domain::entities::{
    CodeBlock, File, Folder, LoadedTree, Repo, SyntaxTree, TreeNode, TreeVisitor,
};
pub use domain::ports::{DocumentParser, FileSystem, RepoCloner};
pub use domain::value_objects::{Label, RepoSpec};
pub use error::{MdripError, MdripResult};
pub use infrastructure::{GitCli, LocalFs, MarkdownParser, MemoryFs};
