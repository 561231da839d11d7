//! PDF parsing backend trait.
//!
//! Defines the [`PdfBackend`] trait that abstracts the handful of parsing
//! operations extraction needs, so the selection logic never touches a
//! specific PDF library.

use pdfsift_core::{DocumentMetadata, PdfError};

/// Trait abstracting PDF parsing operations.
///
/// # Associated Types
///
/// - `Document`: The parsed PDF document representation.
/// - `Error`: Backend-specific error type, convertible to [`PdfError`].
///
/// # Usage
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// for i in 0..MyBackend::page_count(&doc) {
///     let text = MyBackend::page_text(&doc, i)?;
/// }
/// ```
pub trait PdfBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`PdfError`].
    type Error: std::error::Error + Into<PdfError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes do not represent a readable PDF
    /// document, or if the document is encrypted.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Return the number of pages in the document.
    fn page_count(doc: &Self::Document) -> usize;

    /// Extract the plain text of a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page content
    /// cannot be decoded.
    fn page_text(doc: &Self::Document, index: usize) -> Result<String, Self::Error>;

    /// Extract document-level metadata from the PDF /Info dictionary.
    ///
    /// Fields not present in the PDF are returned as `None`; a missing or
    /// malformed dictionary yields empty metadata rather than an error.
    fn document_metadata(doc: &Self::Document) -> Result<DocumentMetadata, Self::Error>;
}
