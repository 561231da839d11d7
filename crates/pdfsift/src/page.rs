//! Single-page view.

use pdfsift_core::KeywordFilter;

/// One page of a document: its position and its extracted plain text.
///
/// Pages are produced on demand by [`Pdf::page`](crate::Pdf::page) and are
/// not retained by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    text: String,
}

impl Page {
    pub(crate) fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }

    /// 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number, as shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The page's full plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the page, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns `true` if this page passes `filter`.
    pub fn matches(&self, filter: &KeywordFilter) -> bool {
        filter.matches(&self.text)
    }
}
