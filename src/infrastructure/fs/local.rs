//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use crate::domain::ports::file_system::{EntryInfo, EntryKind, FileSystem, FsError, FsResult};
use std::path::Path;

/// Local file system implementation
///
/// Directory listings are sorted by name so scans are deterministic across
/// platforms. Entries whose names are not valid UTF-8 are left out of
/// listings; tree names are strings and such an entry could not be read back.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn stat(&self, path: &Path) -> FsResult<EntryInfo> {
        let meta = std::fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(EntryInfo::new(entry_name(path), kind_of(meta.file_type())))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<EntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::from_io(path, e))? {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| FsError::from_io(&entry.path(), e))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::debug!(
                        dir = %path.display(),
                        name = ?raw,
                        "skipping non-UTF-8 entry"
                    );
                    continue;
                }
            };
            entries.push(EntryInfo::new(name, kind_of(file_type)));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(path, e))
    }
}

/// Base name, or the whole path for `.`, `..` and `/` which have none.
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// Symlinks listed by read_dir are not followed, so they land in Other.
fn kind_of(file_type: std::fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
