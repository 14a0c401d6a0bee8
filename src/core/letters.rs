//! Letter signatures
//!
//! A signature packs the distinct letters of a word into one bit per letter of the
//! retained alphabet, i.e. `a`-`z` with the excluded letters removed. The lowest
//! surviving letter is bit 0.

use std::fmt;

/// Bitmask over the retained alphabet
///
/// `INVALID` (zero) is never produced for a valid word.
pub type Signature = u32;

/// Sentinel signature for words that can never take part in a sequence
pub const INVALID: Signature = 0;

/// Nominal letters per word
pub const WORD_LEN: u32 = 5;

/// Longest sequence the search builds
pub const MAX_WORDS: usize = 5;

const ALPHABET_LEN: usize = 26;
const NO_RANK: u8 = u8::MAX;

/// Error type for an invalid exclusion set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    Empty,
    NotALetter(char),
    WholeAlphabet,
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "At least one letter must be excluded"),
            Self::NotALetter(c) => write!(f, "Excluded set contains non-letter '{c}'"),
            Self::WholeAlphabet => write!(f, "Cannot exclude every letter of the alphabet"),
        }
    }
}

impl std::error::Error for LetterError {}

/// The sorted, deduplicated set of letters no word may contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedLetters(Vec<u8>);

impl ExcludedLetters {
    /// Parse an exclusion set such as `"q"`, `"qz"` or `"q, z"`
    ///
    /// Letters are lowercased; commas and whitespace are ignored.
    ///
    /// # Errors
    /// Returns `LetterError` if the set is empty, contains a non-letter, or names
    /// all 26 letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::ExcludedLetters;
    ///
    /// let excluded = ExcludedLetters::new("ZQ").unwrap();
    /// assert_eq!(excluded.as_bytes(), b"qz");
    /// assert!(ExcludedLetters::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, LetterError> {
        let mut letters = Vec::new();
        for c in text.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(LetterError::NotALetter(c));
            }
            letters.push(lower as u8);
        }

        letters.sort_unstable();
        letters.dedup();

        if letters.is_empty() {
            return Err(LetterError::Empty);
        }
        if letters.len() >= ALPHABET_LEN {
            return Err(LetterError::WholeAlphabet);
        }

        Ok(Self(letters))
    }

    /// Number of excluded letters (k)
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.0.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.binary_search(&letter).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for ExcludedLetters {
    /// The classic puzzle: only `q` is excluded
    fn default() -> Self {
        Self(vec![b'q'])
    }
}

impl fmt::Display for ExcludedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Maps words to signatures for one exclusion set
#[derive(Debug, Clone)]
pub struct LetterCodec {
    excluded: ExcludedLetters,
    ranks: [u8; ALPHABET_LEN],
}

impl LetterCodec {
    #[must_use]
    pub fn new(excluded: ExcludedLetters) -> Self {
        let mut ranks = [NO_RANK; ALPHABET_LEN];
        let mut next = 0u8;
        for (slot, letter) in ranks.iter_mut().zip(b'a'..=b'z') {
            if !excluded.contains(letter) {
                *slot = next;
                next += 1;
            }
        }

        Self { excluded, ranks }
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &ExcludedLetters {
        &self.excluded
    }

    /// Letters left after exclusion, i.e. the signature width
    #[inline]
    #[must_use]
    pub fn alphabet_size(&self) -> u32 {
        ALPHABET_LEN as u32 - self.excluded.count()
    }

    /// Letters a full sequence may repeat: k - 1
    #[inline]
    #[must_use]
    pub fn overlap_tolerance(&self) -> u32 {
        self.excluded.count() - 1
    }

    /// Fewest distinct letters a single valid word can have
    #[inline]
    #[must_use]
    pub fn min_distinct_letters(&self) -> u32 {
        self.required_coverage(1)
    }

    /// Fewest covered letters a sequence of `words` words may have
    ///
    /// Each word brings five letters and the whole sequence may overlap by at most
    /// the tolerance, whichever letters the overlap falls on.
    #[inline]
    #[must_use]
    pub fn required_coverage(&self, words: usize) -> u32 {
        (WORD_LEN * words as u32).saturating_sub(self.overlap_tolerance())
    }

    /// Encode a lowercase word
    ///
    /// Returns `INVALID` if the word contains an excluded letter or any byte outside
    /// `a`-`z`, or has fewer distinct letters than `min_distinct_letters`.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::{ExcludedLetters, LetterCodec, INVALID};
    ///
    /// let codec = LetterCodec::new(ExcludedLetters::new("q").unwrap());
    /// assert_eq!(codec.encode("abcde"), 0b11111);
    /// assert_eq!(codec.encode("quick"), INVALID);
    /// assert_eq!(codec.encode("geese"), INVALID);
    /// ```
    #[must_use]
    pub fn encode(&self, word: &str) -> Signature {
        let mut bits: Signature = 0;
        for byte in word.bytes() {
            if !byte.is_ascii_lowercase() {
                return INVALID;
            }
            let rank = self.ranks[usize::from(byte - b'a')];
            if rank == NO_RANK {
                return INVALID;
            }
            bits |= 1 << rank;
        }

        if bits.count_ones() < self.min_distinct_letters() {
            return INVALID;
        }
        bits
    }

    /// Letters set in `signature`, alphabetically
    #[must_use]
    pub fn letters(&self, signature: Signature) -> String {
        (b'a'..=b'z')
            .zip(self.ranks)
            .filter(|&(_, rank)| rank != NO_RANK && signature & (1 << rank) != 0)
            .map(|(letter, _)| letter as char)
            .collect()
    }
}
