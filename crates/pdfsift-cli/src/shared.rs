use std::path::Path;

use pdfsift::{ExtractOptions, ExtractionRequest, KeywordFilter, Pdf, PdfError};

use crate::cli::ExtractArgs;
use crate::page_range::parse_page_range;

/// Print an extraction error to stderr and return the process exit code.
///
/// Range errors are reported with 1-based page numbers, matching `--pages`.
pub fn report(err: &PdfError) -> i32 {
    match err {
        PdfError::RangeError { start, end } => eprintln!(
            "Error: invalid page range: start page {} is after end page {end}",
            start + 1
        ),
        other => eprintln!("Error: {other}"),
    }
    1
}

/// Open a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or cannot be parsed as a valid PDF.
pub fn open_pdf(file: &Path, options: Option<ExtractOptions>) -> Result<Pdf, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    Pdf::open_file(file, options).map_err(|e| report(&e))
}

/// Translate the shared extraction flags into an [`ExtractionRequest`].
pub fn build_request(args: &ExtractArgs) -> Result<ExtractionRequest, i32> {
    let mut request = ExtractionRequest::new();

    if let Some(ref range) = args.pages {
        let (start, end) = parse_page_range(range).map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
        request = request.with_pages(start, end);
    }

    if let Some(ref keywords) = args.keywords {
        request = request.with_keywords(KeywordFilter::parse(keywords));
    }

    Ok(request)
}

/// Resource limits requested on the command line.
pub fn extract_options(args: &ExtractArgs) -> ExtractOptions {
    ExtractOptions {
        max_input_bytes: args.max_bytes,
        max_pages: args.max_pages,
    }
}

/// Open the file named by `args` and extract the selected text.
pub fn run_extraction(args: &ExtractArgs) -> Result<(Pdf, ExtractionRequest, String), i32> {
    let request = build_request(args)?;
    let pdf = open_pdf(&args.file, Some(extract_options(args)))?;
    let text = pdf.extract(&request).map_err(|e| report(&e))?;
    if text.is_empty() {
        tracing::warn!(file = %args.file.display(), "no text selected");
    }
    Ok((pdf, request, text))
}
