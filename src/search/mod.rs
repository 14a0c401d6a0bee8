//! Covering search
//!
//! The state table, the incremental engine that fills it, and read-only sampling
//! for progress display.

mod engine;
pub mod sampler;
mod table;

pub use engine::{ScanStats, SearchEngine, WordOutcome};
pub use sampler::{StateSample, sample_states};
pub use table::{CoverageStateTable, SequenceState, WordSequence};
