//! Tree Loader
//!
//! Turns a path argument into a filtered, ordered tree of documents.
//!
//! ## Argument handling
//!
//! - A remote repository specifier (`gh:owner/name/path`) is cloned into a
//!   temporary directory, loaded from there, and the clone is removed.
//! - A directory is scanned recursively. Folders that end up with no
//!   documents are left out, and an empty top-level scan yields `None`.
//! - A single document yields a folder named for its parent holding just
//!   that document.
//!
//! Filter rejections of the top-level argument are errors; rejections met
//! while descending are skipped.

use std::path::Path;

use crate::domain::entities::{File, Folder, LoadedTree, Repo};
use crate::domain::policies::{
    is_descendable, is_document, is_order_manifest, parse_order_manifest, EntryFilter,
};
use crate::domain::ports::{FileSystem, RepoCloner};
use crate::domain::value_objects::{
    clean_path, smells_like_github_clone_arg, RepoSpec, TreePath, ROOT_SLASH,
};
use crate::error::{MdripError, MdripResult};

/// Prefix of the temporary directories remote repositories are cloned into.
pub const CLONE_DIR_PREFIX: &str = "mdrip-git-";

/// What a path denoted, before the caller decides what to call it.
enum Scanned {
    Folder(Folder),
    File(File),
}

/// Loads document trees through a file system port.
pub struct TreeLoader<FS, RC>
where
    FS: FileSystem,
    RC: RepoCloner,
{
    fs: FS,
    cloner: RC,
    is_allowed_file: EntryFilter,
    is_allowed_folder: EntryFilter,
}

impl<FS, RC> TreeLoader<FS, RC>
where
    FS: FileSystem,
    RC: RepoCloner,
{
    /// Create a loader with the default document and folder filters
    pub fn new(fs: FS, cloner: RC) -> Self {
        Self {
            fs,
            cloner,
            is_allowed_file: is_document,
            is_allowed_folder: is_descendable,
        }
    }

    /// Builder: replace the document filter
    pub fn with_file_filter(mut self, filter: EntryFilter) -> Self {
        self.is_allowed_file = filter;
        self
    }

    /// Builder: replace the folder filter
    pub fn with_folder_filter(mut self, filter: EntryFilter) -> Self {
        self.is_allowed_folder = filter;
        self
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Load a local path or a remote repository specifier.
    pub fn load_tree(&self, arg: &str) -> MdripResult<Option<LoadedTree>> {
        if smells_like_github_clone_arg(arg) {
            let spec = RepoSpec::parse(arg)?;
            return Ok(self.load_repo(&spec)?.map(LoadedTree::Repo));
        }
        Ok(self.load_folder(arg)?.map(LoadedTree::Folder))
    }

    /// Load a local path.
    ///
    /// A directory is named by its cleaned path, or the root separator when
    /// the argument means "all of it" (`""`, `.`, `/`). A single document is
    /// wrapped in a folder named for its parent directory, `.` if it has none.
    pub fn load_folder(&self, raw: &str) -> MdripResult<Option<Folder>> {
        let clean = clean_path(raw);
        let tree_path = TreePath::split(&clean)?;
        Ok(match self.load_unnamed(Path::new(&clean))? {
            None => None,
            Some(Scanned::Folder(mut folder)) => {
                folder.set_name(tree_path.folder_title());
                Some(folder)
            }
            Some(Scanned::File(file)) => {
                Some(Folder::new(tree_path.file_parent_title()).with_file(file))
            }
        })
    }

    /// Clone a repository, load from the clone, then remove it.
    ///
    /// The clone directory is removed on every exit path; a panic while
    /// loading still drops (and deletes) it.
    pub fn load_repo(&self, spec: &RepoSpec) -> MdripResult<Option<Repo>> {
        let inner = clean_path(spec.path().trim_start_matches(std::path::MAIN_SEPARATOR));
        let inner_path = TreePath::split(&inner)?;
        let tmp = tempfile::Builder::new()
            .prefix(CLONE_DIR_PREFIX)
            .tempdir()?;
        let tmp_path = tmp.path().to_path_buf();
        let loaded = self.load_clone(spec, &inner, &inner_path, &tmp_path);
        if let Err(e) = tmp.close() {
            tracing::warn!(dir = %tmp_path.display(), error = %e, "unable to delete clone");
        } else {
            tracing::info!(dir = %tmp_path.display(), "deleted clone");
        }
        loaded
    }

    fn load_clone(
        &self,
        spec: &RepoSpec,
        inner: &str,
        inner_path: &TreePath,
        clone_dir: &Path,
    ) -> MdripResult<Option<Repo>> {
        self.cloner.clone_into(spec.repo(), clone_dir)?;
        let folder = match self.load_unnamed(&clone_dir.join(inner))? {
            None => return Ok(None),
            Some(Scanned::Folder(mut folder)) => {
                folder.set_name(inner_path.folder_title());
                folder
            }
            Some(Scanned::File(file)) => {
                let title = if inner_path.parent().is_empty() {
                    ROOT_SLASH.to_string()
                } else {
                    inner_path.parent().to_string()
                };
                Folder::new(title).with_file(file)
            }
        };
        Ok(Some(Repo::new(spec.repo(), spec.path(), folder)))
    }

    /// Stat `path`, apply the top-level filters, and load it.
    fn load_unnamed(&self, path: &Path) -> MdripResult<Option<Scanned>> {
        let info = self
            .fs
            .stat(path)
            .map_err(|source| MdripError::PathNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        if info.is_dir() {
            (self.is_allowed_folder)(&info).map_err(|reason| MdripError::IllegalFolder {
                name: info.name.clone(),
                reason,
            })?;
            return Ok(self.scan_folder(path)?.map(Scanned::Folder));
        }
        (self.is_allowed_file)(&info).map_err(|reason| MdripError::IllegalFile {
            name: info.name.clone(),
            reason,
        })?;
        let content = self.read_file(path)?;
        Ok(Some(Scanned::File(File::new(info.name, content))))
    }

    /// Scan a directory into a provisional, unnamed folder.
    ///
    /// The caller names the result when it decides to keep it. Returns `None`
    /// when nothing under `dir` passed the filters.
    fn scan_folder(&self, dir: &Path) -> MdripResult<Option<Folder>> {
        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|source| MdripError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut folder = Folder::default();
        let mut ordering = Vec::new();
        for entry in entries {
            let path = dir.join(&entry.name);
            if entry.is_dir() {
                if let Err(reason) = (self.is_allowed_folder)(&entry) {
                    tracing::debug!(path = %path.display(), %reason, "skipping folder");
                    continue;
                }
                if let Some(mut child) = self.scan_folder(&path)? {
                    child.set_name(entry.name);
                    folder.add_folder(child);
                }
                continue;
            }
            if is_order_manifest(&entry) {
                let bytes =
                    self.fs
                        .read(&path)
                        .map_err(|source| MdripError::OrderManifestRead {
                            path: path.clone(),
                            source,
                        })?;
                ordering = parse_order_manifest(&bytes);
                continue;
            }
            if let Err(reason) = (self.is_allowed_file)(&entry) {
                tracing::debug!(path = %path.display(), %reason, "skipping file");
                continue;
            }
            let content = self.read_file(&path)?;
            folder.add_file(File::new(entry.name, content));
        }

        if folder.is_empty() {
            tracing::debug!(dir = %dir.display(), "omitting empty directory");
            return Ok(None);
        }
        folder.apply_ordering(&ordering);
        Ok(Some(folder))
    }

    fn read_file(&self, path: &Path) -> MdripResult<Vec<u8>> {
        self.fs.read(path).map_err(|source| MdripError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}
