//! readtime CLI - Reading time estimates for HTML documents.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "readtime")]
#[command(about = "Estimate how long a document takes to read", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress and log output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate reading time for a raw word count
    Calc {
        /// Number of words
        #[arg(allow_negative_numbers = true)]
        words: f64,

        /// Reading speed in words per minute (values below 1 use the default of 200)
        #[arg(short, long, env = "READTIME_WPM")]
        wpm: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Count the words in the elements matched by each selector
    Words {
        /// HTML file to read (`-` for stdin)
        input: PathBuf,

        /// CSS selector; only the first matching element is counted
        #[arg(short, long = "selector", required = true)]
        selectors: Vec<String>,
    },

    /// Estimate reading time for one or more HTML documents
    Page {
        /// HTML files to read (`-` for stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// CSS selectors whose text is read. Defaults to the options file, then `body`
        #[arg(short, long = "selector")]
        selectors: Vec<String>,

        /// JSON options file: {"selectors": [...], "wordsPerMinute": 200}
        #[arg(long)]
        options: Option<PathBuf>,

        /// Reading speed in words per minute (overrides the options file)
        #[arg(short, long, env = "READTIME_WPM")]
        wpm: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Calc { words, wpm, format } => commands::calc::calc(words, wpm, format),
        Commands::Words { input, selectors } => commands::words::words(&input, &selectors),
        Commands::Page {
            inputs,
            selectors,
            options,
            wpm,
            format,
            output,
        } => commands::page::page(
            &inputs,
            selectors,
            options.as_deref(),
            wpm,
            format,
            output.as_deref(),
            cli.quiet,
        ),
    }
}
