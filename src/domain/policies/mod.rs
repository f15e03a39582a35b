//! Domain Policies
//!
//! Business rules that decide what gets loaded and in which order.

pub mod document_filter;
pub mod ordering;

pub use document_filter::{
    is_descendable, is_document, EntryFilter, FilterRejection, DISALLOWED_LEADING_CHARS,
    DOCUMENT_EXTENSION,
};
pub use ordering::{
    is_order_manifest, parse_order_manifest, reorder_files, reorder_folders, shift_to_top,
    ORDERING_FILE_NAME, README_NAME,
};
