//! Annotated Code-Block Extractor
//!
//! Walks a document's syntax tree in pre-order and lifts out every fenced
//! code block. A block immediately preceded (at the same level) by an HTML
//! comment picks up labels from it:
//!
//! ````markdown
//! <!-- @install @slow -->
//! ```bash
//! make install
//! ```
//! ````
//!
//! Malformed annotations never fail; the block just gets no labels.

use crate::domain::entities::{CodeBlock, Node, NodeId, NodeKind, SyntaxTree};
use crate::domain::value_objects::Label;
use crate::error::{MdripError, MdripResult};

/// Prefix that turns a comment word into a label.
pub const LABEL_MARKER: char = '@';

const COMMENT_BEGIN: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Every fenced code block in `tree`, in document order.
///
/// `source` must be the exact text `tree` was parsed from; `file` is
/// recorded on each block.
pub fn extract_blocks(
    tree: &SyntaxTree,
    source: &str,
    file: &str,
) -> MdripResult<Vec<CodeBlock>> {
    let mut blocks = Vec::new();
    walk(tree, SyntaxTree::ROOT, source, file, &mut blocks)?;
    Ok(blocks)
}

fn walk(
    tree: &SyntaxTree,
    id: NodeId,
    source: &str,
    file: &str,
    blocks: &mut Vec<CodeBlock>,
) -> MdripResult<()> {
    let children = tree.node(id).children();
    for (i, &child_id) in children.iter().enumerate() {
        let child = tree.node(child_id);
        if child.kind == NodeKind::FencedCode {
            let previous = i.checked_sub(1).map(|p| tree.node(children[p]));
            blocks.push(code_block(child, previous, source, file)?);
        }
        walk(tree, child_id, source, file, blocks)?;
    }
    Ok(())
}

fn code_block(
    node: &Node,
    previous: Option<&Node>,
    source: &str,
    file: &str,
) -> MdripResult<CodeBlock> {
    let fence = node.fence.as_ref().ok_or_else(|| MdripError::InconsistentNode {
        kind: node.kind.to_string(),
    })?;
    let mut block = CodeBlock::new(file, node.text(source), fence.language());
    if let Some(prev) = previous.filter(|p| p.kind == NodeKind::HtmlBlock) {
        block.add_labels(parse_labels(comment_body(&prev.text(source))));
    }
    Ok(block)
}

/// The text between `<!--` and `-->`, or `""` if `s` isn't a single comment.
pub fn comment_body(s: &str) -> &str {
    s.trim()
        .strip_prefix(COMMENT_BEGIN)
        .and_then(|rest| rest.strip_suffix(COMMENT_END))
        .unwrap_or("")
}

/// Labels from space separated words of the form `@name`.
///
/// Extra markers (`@@name`) are dropped; a word of only markers is ignored.
pub fn parse_labels(s: &str) -> Vec<Label> {
    s.split(' ')
        .filter_map(|word| {
            let rest = word.trim_start_matches(LABEL_MARKER);
            let has_marker = rest.len() < word.len();
            (has_marker && !rest.is_empty()).then(|| Label::new(rest))
        })
        .collect()
}
