use std::path::Path;

use crate::cli::TextFormat;
use crate::shared::open_pdf;

/// Human-readable labels for metadata fields, in display order.
fn label(field: &str) -> &'static str {
    match field {
        "title" => "Title",
        "author" => "Author",
        "subject" => "Subject",
        "keywords" => "Keywords",
        "creator" => "Creator",
        "producer" => "Producer",
        "creation_date" => "Creation Date",
        "mod_date" => "Modification Date",
        _ => "Other",
    }
}

pub fn run(file: &Path, format: &TextFormat) -> Result<(), i32> {
    let pdf = open_pdf(file, None)?;
    let metadata = pdf.metadata();

    match format {
        TextFormat::Text => {
            for (field, value) in metadata.fields() {
                println!("{}: {}", label(field), value.unwrap_or("N/A"));
            }
            println!("Pages: {}", pdf.page_count());
        }
        TextFormat::Json => {
            let output = serde_json::json!({
                "metadata": metadata,
                "pages": pdf.page_count(),
            });
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                eprintln!("Error: failed to encode JSON: {e}");
                1
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
