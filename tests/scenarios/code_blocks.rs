//! Scenario: pulling labeled code blocks out of a tree
//!
//! Journey: a tutorial author labels the commands in their docs, and a test
//! harness asks for just the blocks carrying one label.

use mdrip::{BlockAccumulator, Label, MarkdownParser, MemoryFs, TreeNode};

use crate::common::*;

const README: &str = r#"# Overview

<!-- @overview -->
```bash
mdrip --help
```

<!-- @orphan -->
This comment is separated from the block below by a paragraph.

```bash
echo unlabeled
```
"#;

const NESTED: &str = r#"# Steps

1. First
   <!-- @nested -->
   ```sh
   echo nested
   ```
"#;

fn docs() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("docs/setup.md", DOC_WITH_BLOCKS);
    fs.add_file("docs/README.md", README);
    fs.add_file("docs/more/steps.md", NESTED);
    fs
}

fn accumulate(fs: &MemoryFs) -> BlockAccumulator<MarkdownParser> {
    let tree = loader(fs).load_tree("docs").unwrap().unwrap();
    let mut acc = BlockAccumulator::new(MarkdownParser::new());
    tree.accept(&mut acc);
    acc
}

/// SCENARIO: every block of every document, in tree order
#[test]
fn scenario_all_blocks_in_tree_order() {
    let blocks = accumulate(&docs()).finish().unwrap();

    let summary: Vec<(&str, &str, &str)> = blocks
        .iter()
        .map(|b| (b.file(), b.name(), b.language()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("docs/README.md", "overview", "bash"),
            ("docs/README.md", "clickToCopy", "bash"),
            ("docs/setup.md", "install", "bash"),
            ("docs/setup.md", "run", "sh"),
            ("docs/setup.md", "clickToCopy", "text"),
            ("docs/more/steps.md", "nested", "sh"),
        ]
    );
    assert_eq!(blocks[2].code(), "echo installing\n");
    assert_eq!(blocks[4].code(), "no labels here\n");
}

/// SCENARIO: select by label
#[test]
fn scenario_select_blocks_by_label() {
    let acc = accumulate(&docs());

    let setup = acc.blocks(&Label::new("setup"));
    let everything = acc.blocks(&Label::wildcard());
    let orphan = acc.blocks(&Label::new("orphan"));

    assert_eq!(setup.len(), 1);
    assert_eq!(setup[0].code(), "echo installing\n");
    let labels: Vec<&str> = setup[0].labels().iter().map(Label::as_str).collect();
    assert_eq!(labels, vec!["install", "setup"]);
    assert_eq!(everything.len(), acc.all_blocks().len());
    assert!(orphan.is_empty());
}

#[test]
fn scenario_blocks_serialize_to_json() {
    let acc = accumulate(&docs());
    let run = acc.blocks(&Label::new("run"));

    let json = serde_json::to_value(&run).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "file": "docs/setup.md",
            "language": "sh",
            "code": "./run.sh\n",
            "labels": ["run"]
        }])
    );
}

#[test]
fn scenario_document_without_blocks() {
    let fs = MemoryFs::new();
    fs.add_file("docs/prose.md", "# Just prose\n\n<!-- @lonely -->\n");

    let acc = accumulate(&fs);

    assert!(acc.all_blocks().is_empty());
    assert!(acc.finish().unwrap().is_empty());
}
