//! Error and option types for pdfsift.
//!
//! Provides [`PdfError`] for failures that stop an extraction, and
//! [`ExtractOptions`] for the caller-imposed resource caps checked before
//! any page is read.

use std::fmt;

/// Fatal error types for PDF text extraction.
///
/// Every failure is surfaced to the caller; nothing is retried or
/// downgraded to a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfError {
    /// The document bytes are missing, empty, or not a readable PDF.
    InputError(String),
    /// The parser could not decode the text of a page.
    ParseError(String),
    /// The requested start page lies after the requested end page.
    RangeError {
        /// Requested start page (0-indexed).
        start: usize,
        /// Requested end page (0-indexed, exclusive).
        end: usize,
    },
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
    /// The PDF is encrypted and cannot be read without a password.
    PasswordRequired,
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::InputError(msg) => write!(f, "input error: {msg}"),
            PdfError::ParseError(msg) => write!(f, "parse error: {msg}"),
            PdfError::RangeError { start, end } => {
                write!(f, "invalid page range: start page {start} is after end page {end}")
            }
            PdfError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
            PdfError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
        }
    }
}

impl std::error::Error for PdfError {}

impl From<std::io::Error> for PdfError {
    fn from(err: std::io::Error) -> Self {
        PdfError::InputError(err.to_string())
    }
}

/// Caller-imposed bounds on the documents an extraction will accept.
///
/// Both limits are off by default. They are checked once when the document
/// is opened, before any page text is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOptions {
    /// Maximum input PDF size in bytes (default: None = no limit).
    pub max_input_bytes: Option<usize>,
    /// Maximum number of pages in the document (default: None = no limit).
    pub max_pages: Option<usize>,
}

impl ExtractOptions {
    /// Fail if `len` input bytes exceeds `max_input_bytes`.
    pub fn check_input_bytes(&self, len: usize) -> Result<(), PdfError> {
        check_limit("max_input_bytes", self.max_input_bytes, len)
    }

    /// Fail if `page_count` exceeds `max_pages`.
    pub fn check_page_count(&self, page_count: usize) -> Result<(), PdfError> {
        check_limit("max_pages", self.max_pages, page_count)
    }
}

fn check_limit(name: &str, limit: Option<usize>, actual: usize) -> Result<(), PdfError> {
    match limit {
        Some(limit) if actual > limit => Err(PdfError::ResourceLimitExceeded {
            limit_name: name.to_string(),
            limit_value: limit,
            actual_value: actual,
        }),
        _ => Ok(()),
    }
}
