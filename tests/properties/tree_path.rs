//! Property tests for path splitting and cleaning.

use proptest::prelude::*;

use mdrip::domain::value_objects::{clean_path, fsplit, join_names, TreePath, ROOT_SLASH};
use mdrip::MdripError;

fn path_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z./]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: splitting never panics, and only upward paths are refused.
    #[test]
    fn property_split_never_panics(input in any::<String>()) {
        match TreePath::split(&input) {
            Ok(tp) => {
                prop_assert!(!input.starts_with(".."));
                prop_assert!(!tp.leaf().contains('/'));
                prop_assert!(tp.parent() == ROOT_SLASH || !tp.parent().ends_with('/'));
                prop_assert!(!tp.folder_title().is_empty());
                prop_assert!(!tp.file_parent_title().is_empty());
            }
            Err(MdripError::PathEscapesRoot { path }) => {
                prop_assert!(input.starts_with(".."));
                prop_assert_eq!(path, input);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// PROPERTY: cleaning is idempotent and never yields an empty path.
    #[test]
    fn property_clean_is_idempotent(input in path_like()) {
        let once = clean_path(&input);
        prop_assert!(!once.is_empty());
        prop_assert!(!once.contains("//"));
        prop_assert_eq!(clean_path(&once), once.clone());
    }

    /// PROPERTY: a clean path splits into parts that join back to it.
    #[test]
    fn property_split_of_clean_path_rejoins(input in path_like()) {
        let clean = clean_path(&input);
        prop_assume!(clean != "." && clean != ROOT_SLASH);
        let (parent, leaf) = fsplit(&clean);
        prop_assert_eq!(join_names(parent, leaf), clean.clone());
    }
}
