use pdfsift::word_frequencies;

use crate::cli::{ExtractArgs, TextFormat};
use crate::shared::run_extraction;

pub fn run(args: &ExtractArgs, top: usize, format: &TextFormat) -> Result<(), i32> {
    let (_, _, text) = run_extraction(args)?;
    let words = word_frequencies(&text, top);

    match format {
        TextFormat::Text => {
            println!("word\tcount");
            for w in &words {
                println!("{}\t{}", w.word, w.count);
            }
        }
        TextFormat::Json => {
            let json = serde_json::to_string(&words).map_err(|e| {
                eprintln!("Error: failed to encode JSON: {e}");
                1
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
