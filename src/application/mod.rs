//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TreeLoader` - Turns a path or repository argument into a document tree
//! - `extract_blocks` - Lifts labeled fenced code blocks out of a parsed document
//! - `BlockAccumulator` - Collects blocks from every document in a tree
//! - `DumpVisitor` - Renders a tree as indented text

pub mod block_accumulator;
pub mod block_extractor;
pub mod dump;
pub mod tree_loader;

pub use block_accumulator::BlockAccumulator;
pub use block_extractor::{comment_body, extract_blocks, parse_labels, LABEL_MARKER};
pub use dump::{dump, summarize, DumpVisitor, DEFAULT_SUMMARY_WIDTH};
pub use tree_loader::{TreeLoader, CLONE_DIR_PREFIX};
