//! Markdown parsing
//!
//! Implements the DocumentParser port over `pulldown-cmark`, folding its
//! offset event stream into a SyntaxTree.
//!
//! Code block lines come from pulldown-cmark's text ranges, which leave out
//! the `\r` of a `\r\n` line ending. Code pulled from a CRLF document
//! therefore has `\n` line endings.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag};

use crate::domain::entities::{Fence, Node, NodeKind, SyntaxTree};
use crate::domain::ports::DocumentParser;

#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl DocumentParser for MarkdownParser {
    fn parse(&self, source: &str) -> SyntaxTree {
        let mut tree = SyntaxTree::new();
        let mut open = vec![SyntaxTree::ROOT];
        for (event, range) in Parser::new_ext(source, self.options).into_offset_iter() {
            let current = open.last().copied().unwrap_or(SyntaxTree::ROOT);
            match event {
                Event::Start(tag) => {
                    let id = tree.add_child(current, node_for(tag));
                    open.push(id);
                }
                Event::End(_) => {
                    if open.len() > 1 {
                        open.pop();
                    }
                }
                Event::Text(_) | Event::Html(_) => {
                    let node = tree.node_mut(current);
                    if holds_raw_lines(node.kind) {
                        node.lines.push(range);
                    }
                }
                Event::Rule => {
                    tree.add_child(current, Node::new(NodeKind::Rule));
                }
                _ => {}
            }
        }
        tree
    }

    fn render_html(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, Parser::new_ext(source, self.options));
        out
    }
}

fn node_for(tag: Tag<'_>) -> Node {
    match tag {
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
            Node::new(NodeKind::FencedCode).with_fence(Fence::new(info.to_string()))
        }
        Tag::CodeBlock(CodeBlockKind::Indented) => Node::new(NodeKind::IndentedCode),
        Tag::HtmlBlock => Node::new(NodeKind::HtmlBlock),
        Tag::Paragraph => Node::new(NodeKind::Paragraph),
        Tag::Heading { .. } => Node::new(NodeKind::Heading),
        Tag::BlockQuote(_) => Node::new(NodeKind::BlockQuote),
        Tag::List(_) => Node::new(NodeKind::List),
        Tag::Item => Node::new(NodeKind::Item),
        Tag::Table(_) => Node::new(NodeKind::Table),
        Tag::Emphasis
        | Tag::Strong
        | Tag::Strikethrough
        | Tag::Link { .. }
        | Tag::Image { .. } => Node::new(NodeKind::Inline),
        _ => Node::new(NodeKind::Other),
    }
}

fn holds_raw_lines(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::FencedCode | NodeKind::IndentedCode | NodeKind::HtmlBlock
    )
}
