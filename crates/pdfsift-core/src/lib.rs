//! pdfsift-core: Backend-independent data types and algorithms.
//!
//! This crate provides the extraction request model, the keyword filter,
//! the page-selection algorithm ([`sift_pages`]), error and option types,
//! and the text analysis helpers used by pdfsift. It knows nothing about
//! PDF syntax; page text is supplied by a parsing backend.

pub mod analysis;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod metadata;
pub mod request;
pub mod search;

pub use analysis::{DEFAULT_TOP_WORDS, WordCount, is_stop_word, word_frequencies};
pub use error::{ExtractOptions, PdfError};
pub use extract::sift_pages;
pub use keywords::KeywordFilter;
pub use metadata::DocumentMetadata;
pub use request::ExtractionRequest;
pub use search::{HIGHLIGHT_MARK, HighlightOptions, count_occurrences, highlight};
