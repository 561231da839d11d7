//! Extraction request parameters and page-span resolution.

use std::ops::Range;

use crate::error::PdfError;
use crate::keywords::KeywordFilter;

/// What to extract from a document.
///
/// Page indices are 0-based. `end_page` is exclusive, so the scanned span is
/// `[start_page, min(end_page, page_count))`. Omitted bounds default to the
/// start and end of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionRequest {
    /// Keywords a page must contain (any one of them) to be included.
    pub keywords: Option<KeywordFilter>,
    /// First page to scan (0-indexed).
    pub start_page: Option<usize>,
    /// Page at which scanning stops (0-indexed, exclusive).
    pub end_page: Option<usize>,
}

impl ExtractionRequest {
    /// A request covering every page with no keyword filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the request to pages containing any of `keywords`.
    pub fn with_keywords(mut self, keywords: KeywordFilter) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Restrict the request to pages `[start, end)`.
    pub fn with_pages(mut self, start: usize, end: usize) -> Self {
        self.start_page = Some(start);
        self.end_page = Some(end);
        self
    }

    /// Set only the first page to scan.
    pub fn starting_at(mut self, start: usize) -> Self {
        self.start_page = Some(start);
        self
    }

    /// Set only the page at which scanning stops.
    pub fn ending_at(mut self, end: usize) -> Self {
        self.end_page = Some(end);
        self
    }

    /// Check the bounds without reference to any document.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::RangeError`] if both bounds are set and
    /// `start_page > end_page`.
    pub fn validate(&self) -> Result<(), PdfError> {
        if let (Some(start), Some(end)) = (self.start_page, self.end_page) {
            if start > end {
                return Err(PdfError::RangeError { start, end });
            }
        }
        Ok(())
    }

    /// Resolve the request against a document with `page_count` pages.
    ///
    /// The returned range may be empty, e.g. when `start_page` lies beyond
    /// the last page; that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::RangeError`] if `start_page > end_page`.
    pub fn page_span(&self, page_count: usize) -> Result<Range<usize>, PdfError> {
        self.validate()?;
        let start = self.start_page.unwrap_or(0);
        let end = self.end_page.unwrap_or(page_count).min(page_count);
        // start may exceed the clamped end; collapse to an empty range.
        Ok(start.min(end)..end)
    }

    /// The keyword filter, treating an absent filter as the empty one.
    pub fn filter(&self) -> Option<&KeywordFilter> {
        self.keywords.as_ref().filter(|f| !f.is_empty())
    }
}
