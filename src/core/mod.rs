//! Core domain types for letter covering
//!
//! Word signatures and the combination helper used by reporting. Everything here
//! is pure and independent of the search table.

mod combination;
mod letters;

pub use combination::combinations;
pub use letters::{
    ExcludedLetters, INVALID, LetterCodec, LetterError, MAX_WORDS, Signature, WORD_LEN,
};
