//! CodeBlock entity - a fenced code block plus the labels annotating it

use serde::Serialize;

use crate::domain::value_objects::Label;

/// Display name used for blocks that have no explicit label.
pub const ANON_BLOCK_NAME: &str = "clickToCopy";

/// A fenced code block lifted out of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Full name of the document the block came from
    file: String,
    language: String,
    code: String,
    /// Insertion ordered, no duplicates
    labels: Vec<Label>,
}

impl CodeBlock {
    pub fn new(
        file: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            language: language.into(),
            code: code.into(),
            labels: Vec::new(),
        }
    }

    /// Builder: attach labels
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.add_labels(labels);
        self
    }

    /// Append labels, skipping any already present.
    pub fn add_labels(&mut self, labels: impl IntoIterator<Item = Label>) {
        for label in labels {
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The wildcard matches every block.
    pub fn has_label(&self, label: &Label) -> bool {
        label.is_wildcard() || self.labels.contains(label)
    }

    /// First label that means something, or `clickToCopy`.
    pub fn name(&self) -> &str {
        self.labels
            .iter()
            .find(|l| !l.is_wildcard() && !l.is_anonymous())
            .map(Label::as_str)
            .unwrap_or(ANON_BLOCK_NAME)
    }

    pub fn title(&self) -> &str {
        self.name()
    }
}
