//! Cover search command
//!
//! Loads a word list, runs the scan with a progress bar and periodic table samples,
//! and writes the results file.

use crate::config::SearchConfig;
use crate::core::{ExcludedLetters, Signature};
use crate::output::display::{format_complete, format_sample};
use crate::output::formatters::format_signature;
use crate::output::report::{ReportSummary, write_results};
use crate::search::{CoverageStateTable, ScanStats, SearchEngine, sample_states};
use crate::wordlists::WordList;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Words between progress message updates
const MESSAGE_EVERY: usize = 10;

/// Options for a search run
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: SearchConfig,
    /// Words between table samples; 0 disables sampling
    pub sample_every: usize,
    pub quiet: bool,
}

/// A finished scan, before anything is written
pub struct ScanResult {
    pub words: WordList,
    pub table: CoverageStateTable,
    pub stats: ScanStats,
}

/// Result of a full search run
#[derive(Debug)]
pub struct SearchReport {
    pub stats: ScanStats,
    pub summary: ReportSummary,
    pub length_histogram: FxHashMap<usize, usize>,
    pub table_size: usize,
    pub excluded: ExcludedLetters,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Scan `words` under `config`
///
/// The progress bar advances once per word. Every `sample_every` words, and once
/// at the end, a table sample is printed through the bar unless it is hidden. The
/// final sample also lists every complete sequence.
pub fn search_words(
    words: Vec<String>,
    config: &SearchConfig,
    sample_every: usize,
    progress: &ProgressBar,
) -> ScanResult {
    let codec = config.codec();
    let words = WordList::encode(words, &codec);
    let mut table = CoverageStateTable::for_codec(&codec);
    let sampling = sample_every > 0 && !progress.is_hidden();
    let mut rng = rand::rng();

    let mut engine = SearchEngine::new(&codec, config.variant_caps, &mut table);
    for (wi, &signature) in (0u32..).zip(words.signatures()) {
        let index = wi as usize;
        if index % MESSAGE_EVERY == 0 {
            progress.set_message(progress_message(words.word(wi), signature));
        }

        engine.process_word(wi, signature);
        progress.inc(1);

        if sampling && index % sample_every == 0 {
            let sample = sample_states(engine.table(), &mut rng);
            progress.println(format_sample(&sample, engine.table(), &words));
        }
    }
    let stats = *engine.stats();

    if sampling {
        let sample = sample_states(&table, &mut rng);
        let mut text = format_sample(&sample, &table, &words);
        text.push_str(&format_complete(&table, &words));
        progress.println(text);
    }

    ScanResult {
        words,
        table,
        stats,
    }
}

fn progress_message(word: &str, signature: Signature) -> String {
    format!("{word} {}", format_signature(signature))
}

/// Run a complete search: load, scan, write
///
/// # Errors
///
/// Returns an error if the word list cannot be read or the results file cannot be
/// written.
pub fn run_search(options: &SearchOptions) -> Result<SearchReport> {
    let start = Instant::now();

    let words = load_from_file(&options.input)
        .with_context(|| format!("Failed to read word list {}", options.input.display()))?;

    let progress = if options.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(words.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )?
            .progress_chars("█▓▒░"),
        );
        bar
    };

    let scan = search_words(words, &options.config, options.sample_every, &progress);
    progress.finish_with_message("Scan complete");

    let file = File::create(&options.output)
        .with_context(|| format!("Failed to create {}", options.output.display()))?;
    let mut out = BufWriter::new(file);
    let summary = write_results(&mut out, &scan.table, &scan.words)
        .and_then(|summary| out.flush().map(|()| summary))
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    Ok(SearchReport {
        stats: scan.stats,
        summary,
        length_histogram: scan.table.length_histogram(),
        table_size: scan.table.size(),
        excluded: options.config.excluded.clone(),
        output: options.output.clone(),
        duration: start.elapsed(),
    })
}
