//! Formatting utilities for terminal and file output

use crate::core::Signature;
use crate::wordlists::WordList;

/// Words at `indices`, joined by `separator`
#[must_use]
pub fn join_words(words: &WordList, indices: &[u32], separator: &str) -> String {
    indices
        .iter()
        .map(|&wi| words.word(wi))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Signature as a hex literal
#[must_use]
pub fn format_signature(signature: Signature) -> String {
    format!("{signature:#x}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters covered out of the retained alphabet, as a bar
#[must_use]
pub fn coverage_bar(signature: Signature, alphabet_size: u32, width: usize) -> String {
    create_progress_bar(
        f64::from(signature.count_ones()),
        f64::from(alphabet_size),
        width,
    )
}
