//! Document Filter Policy
//!
//! Decides which directory entries the tree loader cares about. Filters
//! return a typed rejection instead of a bool; the caller decides whether a
//! rejection is fatal (the top-level argument) or skipped (during descent).

use std::path::Path;

use crate::domain::ports::EntryInfo;
use crate::domain::value_objects::{self_path, CURRENT_DIR, UP_DIR};

/// The one extension recognized as a document.
pub const DOCUMENT_EXTENSION: &str = "md";

/// Backup, hidden and editor temp files start with one of these.
pub const DISALLOWED_LEADING_CHARS: &[char] = &['~', '.', '#'];

const HIDDEN_MARKER: char = '.';

/// Signature shared by both filters, so the loader can be given others.
pub type EntryFilter = fn(&EntryInfo) -> Result<(), FilterRejection>;

/// Why a filter rejected an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FilterRejection {
    #[error("not a simple markdown file")]
    NotADocument,

    #[error("not allowed to load from dot folder")]
    HiddenFolder,

    #[error("not a folder")]
    NotAFolder,
}

/// Passes regular `.md` files whose name doesn't start with `~`, `.` or `#`.
pub fn is_document(entry: &EntryInfo) -> Result<(), FilterRejection> {
    if !entry.is_regular_file() {
        return Err(FilterRejection::NotADocument);
    }
    let base = base_name(&entry.name);
    let has_extension = Path::new(base)
        .extension()
        .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
    if !has_extension {
        return Err(FilterRejection::NotADocument);
    }
    if base.starts_with(DISALLOWED_LEADING_CHARS) {
        return Err(FilterRejection::NotADocument);
    }
    Ok(())
}

/// Passes directories that aren't dot folders (`.git`, `.config`, ...).
///
/// `.`, `./` and `..` are never treated as hidden.
pub fn is_descendable(entry: &EntryInfo) -> Result<(), FilterRejection> {
    if !entry.is_dir() {
        return Err(FilterRejection::NotAFolder);
    }
    let name = entry.name.as_str();
    if name == CURRENT_DIR || name == self_path() || name == UP_DIR {
        return Ok(());
    }
    let base = base_name(name);
    if base.len() > 1 && base.starts_with(HIDDEN_MARKER) {
        return Err(FilterRejection::HiddenFolder);
    }
    Ok(())
}

fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches(std::path::MAIN_SEPARATOR);
    match trimmed.rfind(std::path::MAIN_SEPARATOR) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}
