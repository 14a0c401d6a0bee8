//! Word encoding command
//!
//! Shows how the codec sees each word, and why a word is rejected.

use crate::core::{INVALID, LetterCodec, Signature};

/// Result of encoding one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeResult {
    pub word: String,
    pub signature: Signature,
    pub valid: bool,
    /// Covered letters, alphabetically
    pub letters: String,
    /// Why the word was rejected
    pub reason: Option<String>,
}

/// Encode each word and explain rejections
#[must_use]
pub fn encode_words(words: &[String], codec: &LetterCodec) -> Vec<EncodeResult> {
    words.iter().map(|word| encode_word(word, codec)).collect()
}

fn encode_word(word: &str, codec: &LetterCodec) -> EncodeResult {
    let word = word.to_lowercase();
    let signature = codec.encode(&word);

    EncodeResult {
        letters: codec.letters(signature),
        valid: signature != INVALID,
        reason: (signature == INVALID).then(|| rejection_reason(&word, codec)),
        signature,
        word,
    }
}

fn rejection_reason(word: &str, codec: &LetterCodec) -> String {
    if let Some(c) = word.chars().find(|c| !c.is_ascii_lowercase()) {
        return format!("contains non-letter '{c}'");
    }
    if let Some(b) = word.bytes().find(|&b| codec.excluded().contains(b)) {
        return format!("contains excluded letter '{}'", b as char);
    }

    let mut distinct: Vec<u8> = word.bytes().collect();
    distinct.sort_unstable();
    distinct.dedup();
    format!(
        "only {} distinct letter(s), needs {}",
        distinct.len(),
        codec.min_distinct_letters()
    )
}
