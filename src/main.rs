//! Wordle Cover - CLI
//!
//! Scans a word list for five-word sequences covering the alphabet minus the
//! excluded letters, and writes every sequence found with its variants.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_cover::{
    commands::{SearchOptions, encode_words, run_search},
    config::{DEFAULT_EXCLUDED, SearchConfig},
    core::{ExcludedLetters, LetterCodec},
    output::{print_encode_results, print_search_summary},
};

#[derive(Parser)]
#[command(
    name = "wordle_cover",
    about = "Find five-word sequences covering the alphabet minus excluded letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters no word may contain (at least one, e.g. "q" or "qx")
    #[arg(short = 'x', long, global = true, default_value = DEFAULT_EXCLUDED)]
    exclude: String,

    /// Word list: whitespace-separated words
    #[arg(short, long, global = true, default_value = "words5.txt")]
    input: PathBuf,

    /// Results file
    #[arg(short, long, global = true, default_value = "results.txt")]
    output: PathBuf,

    /// Maximum variants kept per state for rounds 0..4, comma-separated
    #[arg(short = 'c', long, global = true, default_value = "10,10,10,10,100")]
    variant_caps: String,

    /// Print a table sample every N words (0 to disable)
    #[arg(short, long, global = true, default_value = "100")]
    sample_every: usize,

    /// Hide progress and samples
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the word list and write results (default)
    Search,

    /// Show the letter signature of words
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Search if no command given
    match &cli.command {
        Some(Commands::Encode { words }) => run_encode_command(&cli.exclude, words),
        Some(Commands::Search) | None => run_search_command(&cli),
    }
}

fn run_search_command(cli: &Cli) -> Result<()> {
    // Validate before touching any file
    let config = SearchConfig::new(&cli.exclude, &cli.variant_caps)?;

    if !cli.quiet {
        println!(
            "Searching {} excluding '{}' (variant caps {})...",
            cli.input.display(),
            config.excluded,
            config.variant_caps
        );
    }

    let options = SearchOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        config,
        sample_every: cli.sample_every,
        quiet: cli.quiet,
    };
    let report = run_search(&options)?;

    print_search_summary(&report);
    Ok(())
}

fn run_encode_command(exclude: &str, words: &[String]) -> Result<()> {
    let codec = LetterCodec::new(ExcludedLetters::new(exclude)?);

    let results = encode_words(words, &codec);
    print_encode_results(&results, codec.alphabet_size());
    Ok(())
}
