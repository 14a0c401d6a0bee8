//! Display functions for command results

use super::formatters::{coverage_bar, format_signature, join_words};
use crate::commands::{EncodeResult, SearchReport};
use crate::core::Signature;
use crate::search::{CoverageStateTable, StateSample};
use crate::wordlists::WordList;
use colored::Colorize;

/// Render a table sample as terminal lines
///
/// While no sequence is complete, the sampled longest state is shown with its
/// words and any variants stored for it.
#[must_use]
pub fn format_sample(
    sample: &StateSample,
    table: &CoverageStateTable,
    words: &WordList,
) -> String {
    let mut text = format!(
        "{} complete: {}, longest: {} word(s) x {}",
        "Sample".bright_cyan().bold(),
        sample.complete.to_string().bright_yellow(),
        sample.longest_len,
        sample.longest_count
    );

    if let (0, Some(si)) = (sample.complete, sample.longest) {
        push_state(&mut text, table, words, si);
    }

    text
}

/// Render every complete state with its variants
#[must_use]
pub fn format_complete(table: &CoverageStateTable, words: &WordList) -> String {
    let mut text = String::new();
    for (si, state) in table.reached() {
        if state.sequence().is_complete() {
            push_state(&mut text, table, words, si);
        }
    }
    text
}

fn push_state(text: &mut String, table: &CoverageStateTable, words: &WordList, si: Signature) {
    let state = table.get(si);
    text.push_str(&format!(
        "\n  {} {}",
        format_signature(si).bright_black(),
        join_words(words, state.sequence().as_slice(), " ").green()
    ));
    for variant in table.variants(si) {
        text.push_str(&format!(
            "\n    = {}",
            join_words(words, variant.as_slice(), " ")
        ));
    }
}

/// Print the summary of a finished search
pub fn print_search_summary(report: &SearchReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "COVER SEARCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &report.stats;
    println!("\n📊 {}", "Scan:".bright_cyan().bold());
    println!("   Words read:        {}", stats.words);
    println!("   Invalid skipped:   {}", stats.invalid);
    println!(
        "   Permutations:      {} ({} discarded)",
        stats.permutations, stats.discarded
    );
    println!("   States created:    {}", stats.states_created);
    println!("   Variants stored:   {}", stats.variants);
    println!(
        "   Table size:        {} slots (excluding '{}')",
        report.table_size, report.excluded
    );
    println!(
        "   Time taken:        {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n📈 {}", "States by length:".bright_cyan().bold());
    let total: usize = report.length_histogram.values().sum();
    for len in 1..=5 {
        if let Some(&count) = report.length_histogram.get(&len) {
            let pct = count as f64 / total as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {len}: {bar} {count:8} ({pct:5.1}%)");
        }
    }

    println!();
    let summary = &report.summary;
    if summary.sequences == 0 {
        println!("{}", "❌ No four- or five-word sequences found".red().bold());
    } else {
        let message = format!(
            "✅ Wrote {} {}-word sequence(s) and {} variant line(s) to {}",
            summary.sequences,
            summary.length,
            summary.variant_lines,
            report.output.display()
        );
        if summary.length == 5 {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message.yellow().bold());
        }
    }
}

/// Print the signatures of encoded words
pub fn print_encode_results(results: &[EncodeResult], alphabet_size: u32) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} ({alphabet_size} letters)",
        "LETTER SIGNATURES".bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for result in results {
        if result.valid {
            println!(
                "  {:<10} {:>10}  [{}] {}",
                result.word.bright_yellow(),
                format_signature(result.signature),
                coverage_bar(result.signature, alphabet_size, 25).green(),
                result.letters
            );
        } else {
            println!(
                "  {:<10}    invalid  {}",
                result.word.red(),
                result.reason.as_deref().unwrap_or_default().bright_black()
            );
        }
    }
}
