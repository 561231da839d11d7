//! Top-level PDF document type for opening and extracting text.

use pdfsift_core::{DocumentMetadata, ExtractOptions, ExtractionRequest, PdfError, sift_pages};
use pdfsift_parse::{LopdfBackend, LopdfDocument, PdfBackend};

use crate::Page;

/// Iterator over pages of a PDF document, decoding each page on demand.
///
/// Created by [`Pdf::pages_iter()`].
pub struct PagesIter<'a> {
    pdf: &'a Pdf,
    current: usize,
    count: usize,
}

impl Iterator for PagesIter<'_> {
    type Item = Result<Page, PdfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.count {
            return None;
        }
        let result = self.pdf.page(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PagesIter<'_> {}

/// A PDF document opened for text extraction.
///
/// The parsed document is immutable and owned by this handle; dropping the
/// handle discards it. Nothing is shared between handles.
///
/// # Example
///
/// ```ignore
/// let pdf = Pdf::open(&bytes, None)?;
/// let request = ExtractionRequest::new().with_keywords(KeywordFilter::parse("alpha"));
/// let text = pdf.extract(&request)?;
/// ```
pub struct Pdf {
    doc: LopdfDocument,
    /// Cached document metadata from the /Info dictionary.
    metadata: DocumentMetadata,
}

impl Pdf {
    /// Open a PDF document from a file path.
    ///
    /// Reads the whole file into memory, then behaves like [`Pdf::open`].
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::InputError`] if the file cannot be read, and any
    /// error [`Pdf::open`] returns.
    #[cfg(feature = "std")]
    pub fn open_file(
        path: impl AsRef<std::path::Path>,
        options: Option<ExtractOptions>,
    ) -> Result<Self, PdfError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| PdfError::InputError(format!("{}: {e}", path.display())))?;
        Self::open(&bytes, options)
    }

    /// Open a PDF document from bytes.
    ///
    /// # Errors
    ///
    /// - [`PdfError::InputError`] if `bytes` is empty or not a readable PDF.
    /// - [`PdfError::PasswordRequired`] if the PDF is encrypted.
    /// - [`PdfError::ResourceLimitExceeded`] if the input size or page count
    ///   exceeds a limit in `options`.
    pub fn open(bytes: &[u8], options: Option<ExtractOptions>) -> Result<Self, PdfError> {
        let options = options.unwrap_or_default();
        if bytes.is_empty() {
            return Err(PdfError::InputError("document is empty".to_string()));
        }
        options.check_input_bytes(bytes.len())?;

        let doc = LopdfBackend::open(bytes).map_err(PdfError::from)?;
        options.check_page_count(LopdfBackend::page_count(&doc))?;

        let metadata = LopdfBackend::document_metadata(&doc).map_err(PdfError::from)?;
        tracing::debug!(
            bytes = bytes.len(),
            pages = LopdfBackend::page_count(&doc),
            "document opened"
        );

        Ok(Self { doc, metadata })
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        LopdfBackend::page_count(&self.doc)
    }

    /// Return the document metadata from the PDF /Info dictionary.
    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Extract the plain text of the page at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::ParseError`] if the index is out of range or the
    /// page content cannot be decoded.
    pub fn page_text(&self, index: usize) -> Result<String, PdfError> {
        LopdfBackend::page_text(&self.doc, index).map_err(PdfError::from)
    }

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Same as [`Pdf::page_text`].
    pub fn page(&self, index: usize) -> Result<Page, PdfError> {
        self.page_text(index).map(|text| Page::new(index, text))
    }

    /// Iterate over all pages in order, decoding each one lazily.
    pub fn pages_iter(&self) -> PagesIter<'_> {
        PagesIter {
            pdf: self,
            current: 0,
            count: self.page_count(),
        }
    }

    /// Extract the concatenated text of the pages selected by `request`.
    ///
    /// Pages in `[start_page, min(end_page, page_count))` are scanned in
    /// order; a page is kept whole when the request has no keywords or the
    /// page contains any of them, ignoring case.
    ///
    /// # Errors
    ///
    /// - [`PdfError::RangeError`] if `start_page > end_page`.
    /// - [`PdfError::ParseError`] if any scanned page fails to decode; no
    ///   partial text is returned.
    pub fn extract(&self, request: &ExtractionRequest) -> Result<String, PdfError> {
        sift_pages(self.page_count(), request, |index| self.page_text(index))
    }
}

impl std::fmt::Debug for Pdf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pdf")
            .field("page_count", &self.page_count())
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
