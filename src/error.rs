//! Error types for mdrip
//!
//! Uses `thiserror` for library errors. The binary adds context with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::FilterRejection;
use crate::domain::ports::FsError;

/// Result type alias for mdrip operations
pub type MdripResult<T> = Result<T, MdripError>;

/// Main error type for mdrip operations
#[derive(Error, Debug)]
pub enum MdripError {
    /// Argument starts with an ancestor reference, so the root title would be ambiguous
    #[error("path '{path}' escapes the working directory; specify an absolute path or something at or below your working directory")]
    PathEscapesRoot { path: String },

    /// The argument does not exist
    #[error("path not found: {path}")]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// The top-level argument is a file the document filter rejected
    #[error("illegal file '{name}'; {reason}")]
    IllegalFile {
        name: String,
        reason: FilterRejection,
    },

    /// The top-level argument is a folder the folder filter rejected
    #[error("illegal folder '{name}'; {reason}")]
    IllegalFolder {
        name: String,
        reason: FilterRejection,
    },

    /// A directory below the top-level argument could not be listed
    #[error("unable to read folder {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// An ordering manifest exists but could not be read
    #[error("unable to read ordering file {path}")]
    OrderManifestRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A document's bytes could not be read
    #[error("unable to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A remote argument could not be turned into `owner/name`
    #[error("invalid repository spec '{arg}': {message}")]
    InvalidRepoSpec { arg: String, message: String },

    /// The git client is missing or `git clone` failed
    #[error("unable to clone '{repo}': {message}")]
    RemoteClone { repo: String, message: String },

    /// A syntax node claims to be a fenced code block but carries no fence
    #[error("syntax tree node of kind {kind} does not carry fenced code")]
    InconsistentNode { kind: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// `log.level` (or `-v`) produced a directive `EnvFilter` refuses
    #[error("invalid log filter '{directive}': {message}")]
    InvalidLogFilter { directive: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
