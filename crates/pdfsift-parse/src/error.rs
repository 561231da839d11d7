//! Error types for the parsing layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`PdfError`].

use pdfsift_core::PdfError;
use thiserror::Error;

/// Error type for PDF parsing backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The bytes could not be loaded as a PDF document.
    #[error("failed to open PDF: {0}")]
    Open(String),

    /// The text of a single page could not be decoded.
    #[error("page {page}: {message}")]
    PageText {
        /// 0-based index of the failing page.
        page: usize,
        /// Parser-provided description.
        message: String,
    },

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] PdfError),
}

impl From<BackendError> for PdfError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Open(msg) => PdfError::InputError(msg),
            // User-facing page numbers are 1-based.
            BackendError::PageText { page, message } => {
                PdfError::ParseError(format!("page {}: {message}", page + 1))
            }
            BackendError::Io(e) => PdfError::InputError(e.to_string()),
            BackendError::Core(e) => e,
        }
    }
}
