//! Word lists for covering search
//!
//! A `WordList` keeps the words in input order next to their signatures, so the
//! word index used by the search addresses both.

pub mod loader;

use crate::core::{LetterCodec, Signature};
use rayon::prelude::*;

/// Words in scan order with their signatures
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    signatures: Vec<Signature>,
}

impl WordList {
    /// Encode `words` with `codec`
    ///
    /// Encoding runs in parallel; the order of `words` is preserved.
    ///
    /// # Examples
    /// ```
    /// use wordle_cover::core::{ExcludedLetters, LetterCodec};
    /// use wordle_cover::wordlists::WordList;
    ///
    /// let codec = LetterCodec::new(ExcludedLetters::new("q").unwrap());
    /// let list = WordList::encode(vec!["crane".into(), "quick".into()], &codec);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.coverage(&[0]), codec.encode("crane"));
    /// ```
    #[must_use]
    pub fn encode(words: Vec<String>, codec: &LetterCodec) -> Self {
        let signatures = words.par_iter().map(|w| codec.encode(w)).collect();
        Self { words, signatures }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Word at index `wi`
    ///
    /// # Panics
    /// Panics if `wi` is out of range
    #[inline]
    #[must_use]
    pub fn word(&self, wi: u32) -> &str {
        &self.words[wi as usize]
    }

    /// Union of the signatures of the words at `indices`
    #[must_use]
    pub fn coverage(&self, indices: &[u32]) -> Signature {
        indices
            .iter()
            .fold(0, |acc, &wi| acc | self.signatures[wi as usize])
    }
}
