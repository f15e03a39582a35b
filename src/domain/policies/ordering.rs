//! Ordering Policy
//!
//! A directory may hold a manifest (`README_ORDER.txt`) listing child names,
//! one per line. Listed children move to the front in manifest order; the rest
//! keep scan order. A `README` document is always first among files.

use std::path::Path;

use crate::domain::entities::{File, Folder, TreeNode};
use crate::domain::ports::EntryInfo;

/// Name of the per-directory ordering manifest.
pub const ORDERING_FILE_NAME: &str = "README_ORDER.txt";

/// Document stem always sorted first among a directory's files.
pub const README_NAME: &str = "README";

/// True if the entry is the directory's ordering manifest.
pub fn is_order_manifest(entry: &EntryInfo) -> bool {
    entry.is_regular_file() && entry.name == ORDERING_FILE_NAME
}

/// Manifest contents: one name per line, no escaping, no comments.
pub fn parse_order_manifest(contents: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(contents)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Move every item matching `top` to the front, keeping relative order on both sides.
pub fn shift_to_top<T>(items: Vec<T>, top: impl Fn(&T) -> bool) -> Vec<T> {
    let (mut first, remainder): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| top(item));
    first.extend(remainder);
    first
}

/// Apply the manifest, last entry first, so the first entry ends up in front.
pub fn reorder_by_name<T: TreeNode>(mut items: Vec<T>, ordering: &[String]) -> Vec<T> {
    for name in ordering.iter().rev() {
        items = shift_to_top(items, |item| item.name() == name);
    }
    items
}

pub fn reorder_folders(folders: Vec<Folder>, ordering: &[String]) -> Vec<Folder> {
    reorder_by_name(folders, ordering)
}

/// Manifest order, then the read-me-first document ahead of everything.
pub fn reorder_files(files: Vec<File>, ordering: &[String]) -> Vec<File> {
    let files = reorder_by_name(files, ordering);
    shift_to_top(files, |file| is_readme(file.name()))
}

fn is_readme(name: &str) -> bool {
    Path::new(name)
        .file_stem()
        .is_some_and(|stem| stem == README_NAME)
}
