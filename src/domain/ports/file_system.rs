//! FileSystem port - read-only abstraction over the file system
//!
//! The tree loader only ever stats, lists and reads. Implementations:
//! - `LocalFs` - standard file I/O
//! - `MemoryFs` - in-memory virtual file system

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path exists but is the wrong kind of entry for the operation
    NotADirectory(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Classify an I/O error, remembering the path it happened on.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "file does not exist: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::NotADirectory(path) => write!(f, "not a directory: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// What kind of thing a directory entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Dir,
    /// Symlink target we can't classify, device, socket, ...
    Other,
}

/// The subset of file metadata the loader looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Base name of the entry. For `.`, `..` and `/` this is the literal path.
    pub name: String,
    pub kind: EntryKind,
}

impl EntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_regular_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Abstract read-only file system interface
pub trait FileSystem {
    /// Describe the entry at `path`
    fn stat(&self, path: &Path) -> FsResult<EntryInfo>;

    /// List a directory, in a stable order
    fn read_dir(&self, path: &Path) -> FsResult<Vec<EntryInfo>>;

    /// Read a file's bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;
}
