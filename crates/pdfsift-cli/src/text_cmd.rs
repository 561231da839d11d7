use std::path::Path;

use pdfsift::{HighlightOptions, count_occurrences, highlight};

use crate::cli::{ExtractArgs, TextFormat};
use crate::shared::run_extraction;

pub fn run(
    args: &ExtractArgs,
    format: &TextFormat,
    output: Option<&Path>,
    highlight_term: Option<&str>,
    ignore_case: bool,
) -> Result<(), i32> {
    let (pdf, request, text) = run_extraction(args)?;

    let hl_opts = HighlightOptions {
        case_sensitive: !ignore_case,
    };
    let (text, highlights) = match highlight_term {
        Some(term) => (
            highlight(&text, term, &hl_opts),
            Some(count_occurrences(&text, term, &hl_opts)),
        ),
        None => (text, None),
    };

    let rendered = match format {
        TextFormat::Text => text,
        TextFormat::Json => {
            let keywords = request
                .keywords
                .as_ref()
                .map(|k| k.keywords().to_vec())
                .unwrap_or_default();
            let mut obj = serde_json::json!({
                "file": args.file.display().to_string(),
                "page_count": pdf.page_count(),
                "start_page": request.start_page.map(|p| p + 1),
                "end_page": request.end_page,
                "keywords": keywords,
                "text": text,
            });
            if let Some(count) = highlights {
                obj["highlights"] = serde_json::json!(count);
            }
            serde_json::to_string_pretty(&obj).map_err(|e| {
                eprintln!("Error: failed to encode JSON: {e}");
                1
            })?
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes()).map_err(|e| {
                eprintln!("Error: failed to write {}: {e}", path.display());
                1
            })?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "wrote extracted text");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
