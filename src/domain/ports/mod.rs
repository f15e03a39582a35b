//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod document_parser;
pub mod file_system;
pub mod repo_cloner;

pub use document_parser::DocumentParser;
pub use file_system::{EntryInfo, EntryKind, FileSystem, FsError, FsResult};
pub use repo_cloner::RepoCloner;
