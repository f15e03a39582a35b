//! SyntaxTree - a parsed document reduced to what block extraction needs
//!
//! Nodes keep byte ranges into the source rather than copies of its text, so
//! the source must be kept alongside the tree.

use std::fmt;
use std::ops::Range;

/// Index of a node within its [`SyntaxTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading,
    BlockQuote,
    List,
    Item,
    FencedCode,
    IndentedCode,
    HtmlBlock,
    Table,
    Rule,
    Inline,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading => "Heading",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::List => "List",
            NodeKind::Item => "Item",
            NodeKind::FencedCode => "FencedCode",
            NodeKind::IndentedCode => "IndentedCode",
            NodeKind::HtmlBlock => "HtmlBlock",
            NodeKind::Table => "Table",
            NodeKind::Rule => "Rule",
            NodeKind::Inline => "Inline",
            NodeKind::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// The opening fence of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// Everything after the backticks, e.g. `bash title=x`
    pub info: String,
}

impl Fence {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }

    /// First word of the info string.
    pub fn language(&self) -> &str {
        self.info.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Byte ranges of the raw lines held by code and html blocks
    pub lines: Vec<Range<usize>>,
    pub fence: Option<Fence>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            fence: None,
            children: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: impl IntoIterator<Item = Range<usize>>) -> Self {
        self.lines.extend(lines);
        self
    }

    pub fn with_fence(mut self, fence: Fence) -> Self {
        self.fence = Some(fence);
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Concatenate the node's line ranges out of `source`.
    ///
    /// Ranges that fall outside the source or off a char boundary are skipped.
    pub fn text(&self, source: &str) -> String {
        self.lines
            .iter()
            .filter_map(|r| source.get(r.clone()))
            .collect()
    }
}

/// Arena of nodes; the root is always a `Document` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    /// Append `node` as the last child of `parent`.
    ///
    /// # Panics
    /// If `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        self.nodes[parent].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn root(&self) -> &Node {
        self.node(Self::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }
}
