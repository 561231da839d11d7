mod cli;
mod info_cmd;
mod logging;
mod page_range;
mod shared;
mod text_cmd;
mod words_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        cli::Commands::Text {
            ref extract,
            ref format,
            ref output,
            ref highlight,
            ignore_case,
        } => text_cmd::run(
            extract,
            format,
            output.as_deref(),
            highlight.as_deref(),
            ignore_case,
        ),
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
        cli::Commands::Words {
            ref extract,
            top,
            ref format,
        } => words_cmd::run(extract, top, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
