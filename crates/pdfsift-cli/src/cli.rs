use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Extract keyword-filtered text, metadata, and word frequencies from PDF documents.
#[derive(Debug, Parser)]
#[command(name = "pdfsift", about, version)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the text of pages matching the keywords
    Text {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,

        /// Write the extracted text to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Wrap every occurrence of this term in ** markers
        #[arg(long, value_name = "TERM")]
        highlight: Option<String>,

        /// Match the highlight term regardless of case
        #[arg(long, requires = "highlight")]
        ignore_case: bool,
    },

    /// Display PDF metadata and page count
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// Show the most frequent words in the extracted text
    Words {
        #[command(flatten)]
        extract: ExtractArgs,

        /// Number of words to show
        #[arg(long, default_value_t = pdfsift::DEFAULT_TOP_WORDS)]
        top: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },
}

/// Arguments shared by every subcommand that extracts text.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Page range, 1-based and inclusive (e.g. '1-3' or '2'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Comma-separated keywords; only pages containing one of them are kept
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Refuse PDFs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<usize>,

    /// Refuse PDFs with more than this many pages
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,
}

/// Output format.
#[derive(Debug, Clone, ValueEnum)]
pub enum TextFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}
