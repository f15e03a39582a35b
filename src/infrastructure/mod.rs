//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `git/` - The git CLI cloner
//! - `markdown/` - Document parser over pulldown-cmark

pub mod fs;
pub mod git;
pub mod markdown;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use git::GitCli;
pub use markdown::MarkdownParser;
