//! Property tests for manifest ordering.

use proptest::prelude::*;

use mdrip::domain::policies::{reorder_files, reorder_folders, README_NAME};
use mdrip::{File, Folder, TreeNode};

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]{1,2}(\\.md)?|README\\.md", 0..10)
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: reordering files is a permutation with README first.
    #[test]
    fn property_reorder_files_is_permutation(children in names(), manifest in names()) {
        let files: Vec<File> = children.iter().map(|n| File::new(n.as_str(), "")).collect();

        let out: Vec<String> = reorder_files(files, &manifest)
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        prop_assert_eq!(sorted(out.clone()), sorted(children.clone()));
        let readme = format!("{README_NAME}.md");
        if children.contains(&readme) {
            prop_assert_eq!(&out[0], &readme);
        }
    }

    /// PROPERTY: listed folders come before unlisted ones; unlisted keep scan order.
    #[test]
    fn property_reorder_folders_keeps_unlisted_order(children in names(), manifest in names()) {
        let folders: Vec<Folder> = children.iter().map(|n| Folder::new(n.as_str())).collect();

        let out: Vec<String> = reorder_folders(folders, &manifest)
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        prop_assert_eq!(sorted(out.clone()), sorted(children.clone()));
        let listed = out.iter().take_while(|n| manifest.contains(n)).count();
        prop_assert!(out[listed..].iter().all(|n| !manifest.contains(n)));
        let unlisted: Vec<&String> = children.iter().filter(|n| !manifest.contains(n)).collect();
        let tail: Vec<&String> = out[listed..].iter().collect();
        prop_assert_eq!(tail, unlisted);
    }
}
