//! Scenario: loading a local tree of documents
//!
//! Journey: a writer points mdrip at a folder of markdown and expects the
//! documents back in a stable, readable order.

use insta::assert_snapshot;
use mdrip::{dump, File, Folder, LocalFs, MemoryFs, TreeLoader, TreeNode};
use tempfile::tempdir;

use crate::common::*;

fn root_fixture() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("root/f00.md", "# file f00\n");
    fs.add_file("root/aaa/f01.md", "# file f01\n");
    fs
}

/// SCENARIO: a folder with one document and one sub-folder
#[test]
fn scenario_load_root_folder() {
    let fs = root_fixture();

    let folder = loader(&fs).load_folder("root").unwrap().unwrap();

    assert_eq!(folder.name(), "root");
    assert_eq!(file_names(&folder), vec!["f00.md"]);
    assert_eq!(folder_names(&folder), vec!["aaa"]);
    let aaa = &folder.folders()[0];
    assert_eq!(file_names(aaa), vec!["f01.md"]);
    assert_eq!(aaa.files()[0].full_name(), "root/aaa/f01.md");
    assert_eq!(aaa.files()[0].content(), b"# file f01\n");
}

#[test]
fn scenario_trailing_separator_and_dot_prefix_name_the_same_folder() {
    let fs = root_fixture();
    let l = loader(&fs);

    let plain = l.load_folder("root").unwrap().unwrap();
    for arg in ["root/", "./root", "./root/", "root//"] {
        let other = l.load_folder(arg).unwrap().unwrap();
        assert_eq!(other, plain, "arg {arg:?}");
        assert_eq!(other.name(), "root", "arg {arg:?}");
    }
}

/// SCENARIO: the same documents sitting at the file system root
#[test]
fn scenario_whole_root_is_named_with_the_separator() {
    let fs = MemoryFs::new();
    fs.add_file("/f00.md", "# file f00\n");
    fs.add_file("/aaa/f01.md", "# file f01\n");

    let folder = loader(&fs).load_folder("/").unwrap().unwrap();

    assert_eq!(folder.name(), "/");
    assert!(folder.is_root());
    assert_eq!(file_names(&folder), vec!["f00.md"]);
    assert_eq!(folder.folders()[0].full_name(), "/aaa");
    assert_eq!(folder.folders()[0].files()[0].full_name(), "/aaa/f01.md");
}

#[test]
fn scenario_current_directory_is_named_with_the_separator() {
    let fs = MemoryFs::new();
    fs.add_file("f00.md", "# file f00\n");

    for arg in ["", ".", "./"] {
        let folder = loader(&fs).load_folder(arg).unwrap().unwrap();
        assert_eq!(folder.name(), "/", "arg {arg:?}");
        assert_eq!(file_names(&folder), vec!["f00.md"]);
    }
}

/// SCENARIO: a single document
#[test]
fn scenario_single_file_is_wrapped_in_its_parent() {
    let fs = root_fixture();

    let folder = loader(&fs).load_folder("root/aaa/f01.md").unwrap().unwrap();

    assert_eq!(folder.name(), "root/aaa");
    assert_eq!(file_names(&folder), vec!["f01.md"]);
    assert!(folder.folders().is_empty());
    assert_eq!(folder.files()[0].full_name(), "root/aaa/f01.md");
}

#[test]
fn scenario_single_file_without_parent_gets_current_dir() {
    let fs = MemoryFs::new();
    fs.add_file("f00.md", "# file f00\n");

    let folder = loader(&fs).load_folder("f00.md").unwrap().unwrap();

    assert_eq!(folder.name(), ".");
    assert_eq!(file_names(&folder), vec!["f00.md"]);
}

/// SCENARIO: nothing interesting below the argument
#[test]
fn scenario_tree_without_documents_is_none() {
    let fs = MemoryFs::new();
    fs.add_dir("empty/a/b");
    fs.add_dir("empty/c");
    fs.add_file("empty/c/notes.txt", "not markdown");
    fs.add_file("empty/.git/HEAD.md", "hidden");
    fs.add_file("empty/~backup.md", "backup");

    let loaded = loader(&fs).load_folder("empty").unwrap();

    assert!(loaded.is_none());
}

#[test]
fn scenario_empty_sub_folders_are_pruned() {
    let fs = root_fixture();
    fs.add_dir("root/bbb/ccc");
    fs.add_file("root/ddd/image.png", "png");

    let folder = loader(&fs).load_folder("root").unwrap().unwrap();

    assert_eq!(folder_names(&folder), vec!["aaa"]);
}

#[test]
fn scenario_hidden_and_odd_entries_are_skipped_while_descending() {
    let fs = root_fixture();
    fs.add_file("root/.git/config.md", "hidden");
    fs.add_file("root/#scratch.md", "editor temp");
    fs.add_file("root/.notes.md", "dotfile");
    fs.add_file("root/notes.txt", "plain");
    fs.add_special("root/pipe.md");

    let folder = loader(&fs).load_folder("root").unwrap().unwrap();

    assert_eq!(file_names(&folder), vec!["f00.md"]);
    assert_eq!(folder_names(&folder), vec!["aaa"]);
}

/// SCENARIO: the author controls display order
#[test]
fn scenario_manifest_and_readme_order_children() {
    let fs = MemoryFs::new();
    for name in ["a.md", "b.md", "c.md", "README.md"] {
        fs.add_file(format!("ord/{name}"), format!("# {name}"));
    }
    fs.add_file("ord/x/z.md", "# x");
    fs.add_file("ord/y/z.md", "# y");
    fs.add_file("ord/README_ORDER.txt", "c.md\nb.md\ny\n");

    let folder = loader(&fs).load_folder("ord").unwrap().unwrap();

    assert_eq!(file_names(&folder), vec!["README.md", "c.md", "b.md", "a.md"]);
    assert_eq!(folder_names(&folder), vec!["y", "x"]);
    assert!(!folder.has_file("README_ORDER.txt"));
}

#[test]
fn scenario_readme_is_first_without_a_manifest() {
    let fs = MemoryFs::new();
    fs.add_file("d/0-intro.md", "");
    fs.add_file("d/README.md", "");
    fs.add_file("d/zeta.md", "");

    let folder = loader(&fs).load_folder("d").unwrap().unwrap();

    assert_eq!(file_names(&folder), vec!["README.md", "0-intro.md", "zeta.md"]);
}

#[test]
fn scenario_manifest_alone_does_not_keep_a_folder() {
    let fs = root_fixture();
    fs.add_file("root/bbb/README_ORDER.txt", "x.md\n");

    let folder = loader(&fs).load_folder("root").unwrap().unwrap();

    assert_eq!(folder_names(&folder), vec!["aaa"]);
}

/// Equality is structural: names and order, never identity or content.
#[test]
fn scenario_loaded_tree_equals_hand_built_tree() {
    let fs = root_fixture();

    let loaded = loader(&fs).load_folder("root").unwrap().unwrap();
    let again = loader(&fs).load_folder("root").unwrap().unwrap();
    let built = Folder::new("root")
        .with_file(File::new("f00.md", "different content"))
        .with_folder(Folder::new("aaa").with_file(File::new("f01.md", "")));
    let reordered = Folder::new("root")
        .with_folder(Folder::new("aaa").with_file(File::new("f01.md", "")))
        .with_file(File::new("f00.md", ""))
        .with_file(File::new("f02.md", ""));

    assert_eq!(loaded, again);
    assert_eq!(loaded, built);
    assert_ne!(loaded, reordered);
}

#[test]
fn scenario_dump_of_loaded_tree() {
    let fs = root_fixture();
    fs.add_file("root/README.md", "# Read me\n\nfirst.\n");
    fs.add_file("root/aaa/bbb/f02.md", "# file f02 has a rather long first line that gets cut\n");

    let folder = loader(&fs).load_folder("root").unwrap().unwrap();

    assert_snapshot!(dump(&folder, 30), @r"
    root/
      README.md : # Read mefirst....
      f00.md : # file f00...
      aaa/
        f01.md : # file f01...
        bbb/
          f02.md : # file f02 has a rather long f...
    ");
}

/// SCENARIO: the same thing on a real disk
#[test]
fn scenario_local_disk() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    std::fs::create_dir_all(root.join("aaa")).unwrap();
    std::fs::create_dir_all(root.join("empty")).unwrap();
    std::fs::write(root.join("f00.md"), "# file f00\n").unwrap();
    std::fs::write(root.join("aaa/f01.md"), "# file f01\n").unwrap();
    std::fs::write(root.join("aaa/notes.txt"), "plain\n").unwrap();

    let local = TreeLoader::new(LocalFs::new(), NoClone);
    let arg = root.to_string_lossy().to_string();
    let folder = local.load_folder(&arg).unwrap().unwrap();

    assert_eq!(folder.name(), arg);
    assert_eq!(file_names(&folder), vec!["f00.md"]);
    assert_eq!(folder_names(&folder), vec!["aaa"]);
    assert_eq!(file_names(&folder.folders()[0]), vec!["f01.md"]);

    let single = local
        .load_folder(&root.join("aaa/f01.md").to_string_lossy())
        .unwrap()
        .unwrap();
    assert_eq!(single.name(), root.join("aaa").to_string_lossy());
}

/// A directory whose name is not UTF-8 does not sink the rest of the tree.
#[cfg(target_os = "linux")]
#[test]
fn scenario_non_utf8_names_are_skipped_on_disk() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    let odd_dir = root.join(OsStr::from_bytes(b"caf\xe9"));
    std::fs::create_dir_all(&odd_dir).unwrap();
    std::fs::write(odd_dir.join("x.txt"), "plain\n").unwrap();
    std::fs::write(root.join(OsStr::from_bytes(b"caf\xe9.md")), "# odd\n").unwrap();
    std::fs::write(root.join("a.md"), "# a\n").unwrap();

    let local = TreeLoader::new(LocalFs::new(), NoClone);
    let folder = local
        .load_folder(&root.to_string_lossy())
        .unwrap()
        .unwrap();

    assert_eq!(file_names(&folder), vec!["a.md"]);
    assert!(folder.folders().is_empty());
}
