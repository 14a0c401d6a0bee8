//! Table samples for progress display
//!
//! A sample counts the complete states and picks one of the longest sequences
//! uniformly at random with reservoir sampling. Sampling only reads the table.

use super::table::CoverageStateTable;
use crate::core::{MAX_WORDS, Signature};
use rand::Rng;

/// Snapshot of search progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSample {
    /// States whose sequence has five words
    pub complete: usize,
    /// Length of the longest sequence found so far
    pub longest_len: usize,
    /// How many states share that length
    pub longest_count: usize,
    /// One of those states, if any state is reached
    pub longest: Option<Signature>,
}

/// Sample the table
pub fn sample_states<R: Rng>(table: &CoverageStateTable, rng: &mut R) -> StateSample {
    let mut sample = StateSample::default();

    for (si, state) in table.reached() {
        let len = state.sequence().len();
        if len >= MAX_WORDS {
            sample.complete += 1;
        }

        if len > sample.longest_len {
            sample.longest_len = len;
            sample.longest_count = 1;
            sample.longest = Some(si);
        } else if len == sample.longest_len {
            sample.longest_count += 1;
            if rng.random_range(0..sample.longest_count) == 0 {
                sample.longest = Some(si);
            }
        }
    }

    sample
}
