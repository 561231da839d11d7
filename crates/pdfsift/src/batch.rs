//! One-shot and multi-document extraction.

use pdfsift_core::{ExtractionRequest, PdfError};

use crate::Pdf;

/// Open `bytes` with default options and extract the pages selected by `request`.
///
/// # Errors
///
/// Any error from [`Pdf::open`] or [`Pdf::extract`].
pub fn extract(bytes: &[u8], request: &ExtractionRequest) -> Result<String, PdfError> {
    Pdf::open(bytes, None)?.extract(request)
}

/// Apply the same request to several independent documents.
///
/// Returns one result per document, in input order. A failure in one
/// document does not affect the others. With the `parallel` feature the
/// documents are processed concurrently on the rayon pool.
pub fn extract_batch(
    documents: &[&[u8]],
    request: &ExtractionRequest,
) -> Vec<Result<String, PdfError>> {
    tracing::debug!(documents = documents.len(), "batch extraction");

    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|bytes| extract(bytes, request))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = documents
        .iter()
        .map(|bytes| extract(bytes, request))
        .collect();

    results
}
