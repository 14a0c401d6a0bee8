//! Wordle Cover
//!
//! Finds sequences of five words whose letters cover the alphabet minus a set of
//! excluded letters, e.g. 25 distinct letters with `q` forbidden.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cover::config::VariantCaps;
//! use wordle_cover::core::{ExcludedLetters, LetterCodec};
//! use wordle_cover::search::{CoverageStateTable, SearchEngine};
//!
//! // Seven excluded letters keep the table small and allow six repeated letters
//! let codec = LetterCodec::new(ExcludedLetters::new("jqvwxyz").unwrap());
//! let words = ["crane", "spilt", "hound"];
//! let signatures: Vec<_> = words.iter().map(|w| codec.encode(w)).collect();
//!
//! let mut table = CoverageStateTable::for_codec(&codec);
//! SearchEngine::new(&codec, VariantCaps::default(), &mut table).run(&signatures);
//!
//! let all = signatures.iter().fold(0, |acc, s| acc | s);
//! assert_eq!(table.get(all).sequence().as_slice(), &[0, 1, 2]);
//! ```

// Core domain types
pub mod core;

// Search configuration
pub mod config;

// State table and search engine
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Results file and terminal output
pub mod output;
