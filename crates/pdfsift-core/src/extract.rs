//! Page selection and text accumulation.
//!
//! [`sift_pages`] is the backend-independent core of extraction: it resolves
//! the requested span, pulls each page's text through a caller-supplied
//! closure, applies the keyword filter to the whole page, and concatenates
//! the survivors in page order.

use crate::error::PdfError;
use crate::request::ExtractionRequest;

/// Extract the text of all selected pages of a `page_count`-page document.
///
/// `page_text` is called once per page in the resolved span, in ascending
/// order, and must return that page's full text. A page is included when
/// the request has no keywords or its text contains any keyword
/// (case-insensitively); included pages are appended whole, with no
/// separator.
///
/// # Errors
///
/// Returns [`PdfError::RangeError`] for inverted bounds, before `page_text`
/// is ever called. Any error from `page_text` aborts the extraction and is
/// returned unchanged; no partial text is produced.
pub fn sift_pages<F>(
    page_count: usize,
    request: &ExtractionRequest,
    mut page_text: F,
) -> Result<String, PdfError>
where
    F: FnMut(usize) -> Result<String, PdfError>,
{
    let span = request.page_span(page_count)?;
    let filter = request.filter();
    tracing::debug!(
        page_count,
        start = span.start,
        end = span.end,
        keywords = filter.map_or(0, |f| f.keywords().len()),
        "sifting pages"
    );

    let mut out = String::new();
    let mut included = 0usize;
    for index in span {
        let text = page_text(index)?;
        if filter.is_none_or(|f| f.matches(&text)) {
            tracing::trace!(page = index, "page included");
            out.push_str(&text);
            included += 1;
        } else {
            tracing::trace!(page = index, "page skipped: no keyword match");
        }
    }

    tracing::debug!(included, bytes = out.len(), "extraction finished");
    Ok(out)
}
