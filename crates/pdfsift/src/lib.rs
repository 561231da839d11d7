//! pdfsift: extract the text of PDF pages filtered by page range and keywords.
//!
//! This is the public API facade crate. It re-exports types from
//! pdfsift-core and uses pdfsift-parse for PDF reading.
//!
//! # Architecture
//!
//! - **pdfsift-core**: Backend-independent request model, keyword filter, and page selection
//! - **pdfsift-parse**: PDF parsing behind the `PdfBackend` trait (lopdf by default)
//! - **pdfsift** (this crate): Public API that ties everything together
//!
//! # Example
//!
//! ```ignore
//! use pdfsift::{ExtractionRequest, KeywordFilter};
//!
//! let request = ExtractionRequest::new()
//!     .with_pages(0, 10)
//!     .with_keywords(KeywordFilter::parse("catalyst, polymer"));
//! let text = pdfsift::extract(&bytes, &request)?;
//! ```

mod batch;
mod page;
mod pdf;

pub use batch::{extract, extract_batch};
pub use page::Page;
pub use pdf::{PagesIter, Pdf};
pub use pdfsift_core::{
    DEFAULT_TOP_WORDS, DocumentMetadata, ExtractOptions, ExtractionRequest, HighlightOptions,
    KeywordFilter, PdfError, WordCount, count_occurrences, highlight, word_frequencies,
};
pub use pdfsift_core;
pub use pdfsift_parse;
