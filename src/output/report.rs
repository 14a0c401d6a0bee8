//! Result file writer
//!
//! Renders the finished table as text. Each complete sequence gets a line of its
//! words, followed by one `- <part> = <variant>` line for every variant stored at
//! the coverage of every part of the sequence, largest parts first. When no
//! sequence is complete, the four-word sequences are listed instead.

use super::formatters::join_words;
use crate::core::{MAX_WORDS, combinations};
use crate::search::{CoverageStateTable, WordSequence};
use crate::wordlists::WordList;
use std::io::{self, Write};

/// What a report contained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Sequence length that was reported (5, 4, or 0 when nothing qualified)
    pub length: usize,
    pub sequences: usize,
    pub variant_lines: usize,
}

/// Write all results for `table` to `out`
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_results<W: Write>(
    out: &mut W,
    table: &CoverageStateTable,
    words: &WordList,
) -> io::Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    for (_, state) in table.reached() {
        let sequence = state.sequence();
        if sequence.is_complete() {
            summary.length = MAX_WORDS;
            summary.sequences += 1;
            summary.variant_lines += write_sequence(out, table, words, sequence)?;
        }
    }

    if summary.sequences == 0 {
        for (_, state) in table.reached() {
            let sequence = state.sequence();
            if sequence.len() == MAX_WORDS - 1 {
                summary.length = MAX_WORDS - 1;
                summary.sequences += 1;
                writeln!(out, "{}", join_words(words, sequence.as_slice(), " "))?;
            }
        }
    }

    Ok(summary)
}

/// Write one complete sequence and its variants, returning the variant line count
fn write_sequence<W: Write>(
    out: &mut W,
    table: &CoverageStateTable,
    words: &WordList,
    sequence: &WordSequence,
) -> io::Result<usize> {
    writeln!(out, "{}", join_words(words, sequence.as_slice(), " "))?;

    let mut lines = 0;
    for size in (1..=MAX_WORDS).rev() {
        for part in combinations(sequence.as_slice(), size) {
            for variant in table.variants(words.coverage(&part)) {
                writeln!(
                    out,
                    "- {} = {}",
                    join_words(words, &part, ", "),
                    join_words(words, variant.as_slice(), ", ")
                )?;
                lines += 1;
            }
        }
    }

    Ok(lines)
}
