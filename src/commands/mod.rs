//! Command implementations

pub mod encode;
pub mod search;

pub use encode::{EncodeResult, encode_words};
pub use search::{SearchOptions, SearchReport, run_search, search_words};
