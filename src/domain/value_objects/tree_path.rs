//! Tree Path Value Object
//!
//! Splits a user supplied path argument into the parent path and leaf name
//! used to title the root of a loaded tree. This is not `Path::parent` /
//! `Path::file_name`: trailing separators and `.` are handled differently.
//!
//! | input               | parent       | leaf     |
//! |---------------------|--------------|----------|
//! | `""`                | `""`         | `""`     |
//! | `.`                 | `""`         | `""`     |
//! | `/`                 | `/`          | `""`     |
//! | `foo.md`            | `""`         | `foo.md` |
//! | `./foo.md`          | `""`         | `foo.md` |
//! | `/usr/local/foo.md` | `/usr/local` | `foo.md` |
//! | `bar/foo.md`        | `bar`        | `foo.md` |
//! | `../anything`       | rejected     |          |

use crate::error::{MdripError, MdripResult};

/// The platform path separator, also used as the title of a whole-root tree.
pub const ROOT_SLASH: &str = std::path::MAIN_SEPARATOR_STR;

/// The literal name meaning "here".
pub const CURRENT_DIR: &str = ".";

/// The literal name meaning "up one level".
pub const UP_DIR: &str = "..";

const SEP: char = std::path::MAIN_SEPARATOR;

/// `./` (or `.\` on Windows)
pub fn self_path() -> String {
    format!("{CURRENT_DIR}{SEP}")
}

/// A path argument split into display-friendly parent and leaf parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    parent: String,
    leaf: String,
}

impl TreePath {
    /// Split `path`. Inputs starting with `..` are rejected.
    pub fn split(path: &str) -> MdripResult<Self> {
        if path.starts_with(UP_DIR) {
            return Err(MdripError::PathEscapesRoot {
                path: path.to_string(),
            });
        }
        let (parent, leaf) = fsplit(path);
        Ok(Self {
            parent: parent.to_string(),
            leaf: leaf.to_string(),
        })
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// True when the argument denoted a whole root rather than something in it.
    pub fn is_whole_root(&self) -> bool {
        self.leaf.is_empty()
    }

    /// Name for the root Folder when the argument is a directory.
    pub fn folder_title(&self) -> String {
        if self.is_whole_root() {
            return ROOT_SLASH.to_string();
        }
        join_names(&self.parent, &self.leaf)
    }

    /// Name for the root Folder when the argument is a single file.
    pub fn file_parent_title(&self) -> String {
        if self.parent.is_empty() {
            return CURRENT_DIR.to_string();
        }
        self.parent.clone()
    }
}

/// Split a path into a parent path and a single name.
///
/// The parent never has a trailing separator unless it is only the separator,
/// and never starts with `./`. An empty parent means the current directory.
pub fn fsplit(path: &str) -> (&str, &str) {
    let (dir, name) = match path.rfind(SEP) {
        Some(i) => (&path[..=i], &path[i + 1..]),
        None => ("", path),
    };
    let dir = dir.strip_prefix(self_path().as_str()).unwrap_or(dir);
    let trimmed = dir.trim_end_matches(SEP);
    if trimmed.is_empty() && !dir.is_empty() {
        return (ROOT_SLASH, name);
    }
    let dir = trimmed;
    if dir.is_empty() && name == CURRENT_DIR {
        return ("", "");
    }
    (dir, name)
}

/// Lexically clean a path: collapse repeated separators, drop `.` segments,
/// resolve `..` against preceding names. Empty input becomes `.`.
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }
    let rooted = path.starts_with(SEP);
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(SEP) {
        match segment {
            "" | CURRENT_DIR => {}
            UP_DIR => {
                if parts.last().is_some_and(|p| *p != UP_DIR) {
                    parts.pop();
                } else if !rooted {
                    parts.push(UP_DIR);
                }
            }
            name => parts.push(name),
        }
    }
    let joined = parts.join(ROOT_SLASH);
    if rooted {
        format!("{SEP}{joined}")
    } else if joined.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        joined
    }
}

/// Join two names with the separator, treating an empty left side as "here".
pub fn join_names(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return name.to_string();
    }
    if name.is_empty() {
        return dir.to_string();
    }
    if dir.ends_with(SEP) {
        return format!("{dir}{name}");
    }
    format!("{dir}{SEP}{name}")
}
