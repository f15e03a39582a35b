//! Common test utilities for mdrip integration tests.
//!
//! - `NoClone`: a repository cloner that refuses to clone
//! - `MemoryCloner`: a cloner that writes a canned repository into a `MemoryFs`
//! - `loader`: a `TreeLoader` over a `MemoryFs`
//! - Fixtures: reusable document content

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use mdrip::{Folder, MdripError, MdripResult, MemoryFs, RepoCloner, TreeLoader, TreeNode};

pub const DOC_WITH_BLOCKS: &str = r#"# Setup

Install the tools.

<!-- @install @setup -->
```bash
echo installing
```

Then run it.

<!-- @run -->
```sh
./run.sh
```

```text
no labels here
```
"#;

/// Refuses every clone.
pub struct NoClone;

impl RepoCloner for NoClone {
    fn clone_into(&self, repo: &str, _dest: &Path) -> MdripResult<()> {
        Err(MdripError::RemoteClone {
            repo: repo.to_string(),
            message: "no network in tests".to_string(),
        })
    }
}

/// "Clones" by writing files into a shared `MemoryFs` under the destination.
pub struct MemoryCloner {
    fs: MemoryFs,
    files: Vec<(String, String)>,
    pub cloned: Mutex<Vec<(String, PathBuf)>>,
}

impl MemoryCloner {
    pub fn new(fs: MemoryFs, files: &[(&str, &str)]) -> Self {
        Self {
            fs,
            files: files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
            cloned: Mutex::new(Vec::new()),
        }
    }

    pub fn last_dest(&self) -> Option<PathBuf> {
        self.cloned.lock().unwrap().last().map(|(_, d)| d.clone())
    }
}

impl RepoCloner for MemoryCloner {
    fn clone_into(&self, repo: &str, dest: &Path) -> MdripResult<()> {
        self.fs.add_dir(dest);
        for (path, content) in &self.files {
            self.fs.add_file(dest.join(path), content.as_str());
        }
        self.cloned
            .lock()
            .unwrap()
            .push((repo.to_string(), dest.to_path_buf()));
        Ok(())
    }
}

impl RepoCloner for &MemoryCloner {
    fn clone_into(&self, repo: &str, dest: &Path) -> MdripResult<()> {
        (**self).clone_into(repo, dest)
    }
}

pub fn loader(fs: &MemoryFs) -> TreeLoader<MemoryFs, NoClone> {
    TreeLoader::new(fs.clone(), NoClone)
}

pub fn file_names(folder: &Folder) -> Vec<&str> {
    folder.files().iter().map(|f| f.name()).collect()
}

pub fn folder_names(folder: &Folder) -> Vec<&str> {
    folder.folders().iter().map(|f| f.name()).collect()
}
