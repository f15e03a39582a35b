//! DocumentParser port - turns document text into a SyntaxTree

use crate::domain::entities::SyntaxTree;

pub trait DocumentParser {
    /// Parse `source`. Never fails; unrecognized input becomes paragraphs.
    fn parse(&self, source: &str) -> SyntaxTree;

    /// Render `source` to HTML.
    fn render_html(&self, source: &str) -> String;
}
