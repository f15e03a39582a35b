//! In-memory File System
//!
//! A virtual file system for injecting into the tree loader. Relative and
//! absolute paths are distinct namespaces: `f.md` and `/f.md` are different
//! files, and there is no working directory to change.
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared, e.g. between
//! a loader and a fake repository cloner.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{EntryInfo, EntryKind, FileSystem, FsError, FsResult};
use crate::domain::value_objects::{clean_path, CURRENT_DIR, ROOT_SLASH};

#[derive(Debug, Clone)]
struct MemEntry {
    kind: EntryKind,
    content: Vec<u8>,
    readable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: Arc<Mutex<BTreeMap<String, MemEntry>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.insert(path.as_ref(), EntryKind::File, content.into(), true);
    }

    /// Create a directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::Dir, Vec::new(), true);
    }

    /// Create a file that exists but can't be read.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::File, Vec::new(), false);
    }

    /// Create a directory that exists but can't be listed.
    pub fn add_unreadable_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::Dir, Vec::new(), false);
    }

    /// Create something that is neither a file nor a directory.
    pub fn add_special(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::Other, Vec::new(), true);
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let key = key_of(path.as_ref());
        is_root_key(&key) || self.lock().contains_key(&key)
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, MemEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert(&self, path: &Path, kind: EntryKind, content: Vec<u8>, readable: bool) {
        let key = key_of(path);
        if is_root_key(&key) {
            return;
        }
        let mut entries = self.lock();
        let mut dir = parent_key(&key);
        while let Some(d) = dir {
            if is_root_key(&d) {
                break;
            }
            entries.entry(d.clone()).or_insert(MemEntry {
                kind: EntryKind::Dir,
                content: Vec::new(),
                readable: true,
            });
            dir = parent_key(&d);
        }
        entries.insert(
            key,
            MemEntry {
                kind,
                content,
                readable,
            },
        );
    }
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &Path) -> FsResult<EntryInfo> {
        let key = key_of(path);
        if is_root_key(&key) {
            return Ok(EntryInfo::new(key, EntryKind::Dir));
        }
        let entries = self.lock();
        let entry = entries
            .get(&key)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        Ok(EntryInfo::new(base_of(&key), entry.kind))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<EntryInfo>> {
        let key = key_of(path);
        let entries = self.lock();
        if !is_root_key(&key) {
            let entry = entries
                .get(&key)
                .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
            if entry.kind != EntryKind::Dir {
                return Err(FsError::NotADirectory(path.to_path_buf()));
            }
            if !entry.readable {
                return Err(FsError::PermissionDenied(path.to_path_buf()));
            }
        }
        let mut children: Vec<EntryInfo> = entries
            .iter()
            .filter(|(k, _)| parent_key(k).as_deref() == Some(key.as_str()))
            .map(|(k, e)| EntryInfo::new(base_of(k), e.kind))
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        let key = key_of(path);
        let entries = self.lock();
        let entry = entries
            .get(&key)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))?;
        if !entry.readable {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if entry.kind == EntryKind::Dir {
            return Err(FsError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            )));
        }
        Ok(entry.content.clone())
    }
}

fn key_of(path: &Path) -> String {
    clean_path(&path.to_string_lossy())
}

fn is_root_key(key: &str) -> bool {
    key == CURRENT_DIR || key == ROOT_SLASH
}

fn parent_key(key: &str) -> Option<String> {
    if is_root_key(key) {
        return None;
    }
    match key.rfind(std::path::MAIN_SEPARATOR) {
        Some(0) => Some(ROOT_SLASH.to_string()),
        Some(i) => Some(key[..i].to_string()),
        None => Some(CURRENT_DIR.to_string()),
    }
}

fn base_of(key: &str) -> String {
    match key.rfind(std::path::MAIN_SEPARATOR) {
        Some(i) => key[i + 1..].to_string(),
        None => key.to_string(),
    }
}
