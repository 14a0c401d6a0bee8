//! Coverage state table
//!
//! One fixed-shape record per possible coverage signature, addressed directly by
//! the signature value. The records are plain old data and the whole array is
//! allocated zeroed in one block, so slots that are never written cost no
//! resident memory even though the table has `2^(26-k)` entries.

// Pod/Zeroable derives emit unsafe impls
#![allow(unsafe_code)]

use crate::core::{LetterCodec, MAX_WORDS, Signature};
use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Up to five word indices, in the order they were added
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct WordSequence {
    len: u32,
    indices: [u32; MAX_WORDS],
}

impl WordSequence {
    pub const EMPTY: Self = Self {
        len: 0,
        indices: [0; MAX_WORDS],
    };

    #[must_use]
    pub const fn single(word_index: u32) -> Self {
        let mut indices = [0; MAX_WORDS];
        indices[0] = word_index;
        Self { len: 1, indices }
    }

    /// Build from a slice of word indices
    ///
    /// Returns `None` if `indices` holds more than five entries.
    #[must_use]
    pub fn from_slice(indices: &[u32]) -> Option<Self> {
        if indices.len() > MAX_WORDS {
            return None;
        }
        let mut sequence = Self::EMPTY;
        sequence.indices[..indices.len()].copy_from_slice(indices);
        sequence.len = indices.len() as u32;
        Some(sequence)
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A complete sequence can no longer be extended
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.len() >= MAX_WORDS
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices[..self.len()]
    }

    /// Copy of this sequence with `word_index` appended, or `None` if complete
    #[must_use]
    pub fn extended(&self, word_index: u32) -> Option<Self> {
        if self.is_complete() {
            return None;
        }
        let mut next = *self;
        next.indices[self.len()] = word_index;
        next.len += 1;
        Some(next)
    }
}

/// Search state for one coverage signature
///
/// `watermark` is one past the word index that first reached this coverage; zero
/// means no sequence has reached it yet. `variant_slot` is zero when there are no
/// variants, otherwise one past the slot in the table's variant arena.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct SequenceState {
    watermark: u32,
    sequence: WordSequence,
    variant_slot: u32,
}

impl SequenceState {
    #[inline]
    #[must_use]
    pub const fn watermark(&self) -> u32 {
        self.watermark
    }

    #[inline]
    #[must_use]
    pub const fn is_reached(&self) -> bool {
        self.watermark > 0
    }

    /// The canonical (first discovered) sequence for this coverage
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &WordSequence {
        &self.sequence
    }
}

/// Dense table of search states indexed by coverage signature
pub struct CoverageStateTable {
    states: Vec<SequenceState>,
    variants: Vec<Vec<WordSequence>>,
}

impl CoverageStateTable {
    /// Allocate a table for signatures `alphabet_size` bits wide
    ///
    /// # Panics
    /// Panics if `alphabet_size` is 32 or more
    #[must_use]
    pub fn new(alphabet_size: u32) -> Self {
        assert!(alphabet_size < 32, "signature width must fit in a u32");
        Self {
            states: bytemuck::allocation::zeroed_vec(1usize << alphabet_size),
            variants: Vec::new(),
        }
    }

    /// Table sized for every coverage `codec` can produce
    #[must_use]
    pub fn for_codec(codec: &LetterCodec) -> Self {
        Self::new(codec.alphabet_size())
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.states.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, signature: Signature) -> &SequenceState {
        &self.states[signature as usize]
    }

    /// Variants registered at `signature`, in discovery order
    #[must_use]
    pub fn variants(&self, signature: Signature) -> &[WordSequence] {
        match self.get(signature).variant_slot {
            0 => &[],
            slot => self.variants[slot as usize - 1].as_slice(),
        }
    }

    /// Make `sequence` the canonical owner of an unreached coverage
    ///
    /// # Panics
    /// Panics in debug mode if the state was already reached
    pub fn claim(&mut self, signature: Signature, watermark: u32, sequence: WordSequence) {
        let state = &mut self.states[signature as usize];
        debug_assert!(!state.is_reached(), "canonical sequence already claimed");
        state.watermark = watermark;
        state.sequence = sequence;
    }

    /// Record an alternative way of reaching `signature`
    ///
    /// Returns `false` and drops the variant if `cap` variants are already stored.
    pub fn push_variant(
        &mut self,
        signature: Signature,
        variant: WordSequence,
        cap: usize,
    ) -> bool {
        let state = &mut self.states[signature as usize];
        if state.variant_slot == 0 {
            if cap == 0 {
                return false;
            }
            self.variants.push(Vec::new());
            state.variant_slot = self.variants.len() as u32;
        }

        let list = &mut self.variants[state.variant_slot as usize - 1];
        if list.len() >= cap {
            return false;
        }
        list.push(variant);
        true
    }

    /// Reached states in ascending signature order
    pub fn reached(&self) -> impl Iterator<Item = (Signature, &SequenceState)> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_reached())
            .map(|(si, state)| (si as Signature, state))
    }

    /// Number of reached states per canonical sequence length
    #[must_use]
    pub fn length_histogram(&self) -> FxHashMap<usize, usize> {
        self.states
            .par_iter()
            .filter(|state| state.is_reached())
            .fold(FxHashMap::default, |mut counts, state| {
                *counts.entry(state.sequence.len()).or_insert(0) += 1;
                counts
            })
            .reduce(FxHashMap::default, |mut left, right| {
                for (len, count) in right {
                    *left.entry(len).or_insert(0) += count;
                }
                left
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_compact() {
        assert_eq!(std::mem::size_of::<WordSequence>(), 24);
        assert_eq!(std::mem::size_of::<SequenceState>(), 32);
    }

    #[test]
    fn new_table_is_empty() {
        let table = CoverageStateTable::new(10);
        assert_eq!(table.size(), 1024);
        assert!(table.reached().next().is_none());
        assert!(!table.get(1023).is_reached());
        assert!(table.get(5).sequence().is_empty());
        assert!(table.variants(5).is_empty());
    }

    #[test]
    fn sequence_extension_stops_at_five() {
        let mut seq = WordSequence::single(0);
        for wi in 1..5 {
            seq = seq.extended(wi).unwrap();
        }
        assert!(seq.is_complete());
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 4]);
        assert!(seq.extended(5).is_none());
    }

    #[test]
    fn sequence_from_slice() {
        let seq = WordSequence::from_slice(&[3, 9]).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq, WordSequence::single(3).extended(9).unwrap());
        assert!(WordSequence::from_slice(&[0, 1, 2, 3, 4, 5]).is_none());
    }

    #[test]
    fn claim_marks_state_reached() {
        let mut table = CoverageStateTable::new(8);
        table.claim(0b101, 3, WordSequence::single(2));

        let state = table.get(0b101);
        assert!(state.is_reached());
        assert_eq!(state.watermark(), 3);
        assert_eq!(state.sequence().as_slice(), &[2]);

        let reached: Vec<Signature> = table.reached().map(|(si, _)| si).collect();
        assert_eq!(reached, vec![0b101]);
    }

    #[test]
    fn variants_respect_cap() {
        let mut table = CoverageStateTable::new(8);
        table.claim(7, 1, WordSequence::single(0));

        assert!(table.push_variant(7, WordSequence::single(1), 2));
        assert!(table.push_variant(7, WordSequence::single(2), 2));
        assert!(!table.push_variant(7, WordSequence::single(3), 2));

        let variants: Vec<&[u32]> = table
            .variants(7)
            .iter()
            .map(WordSequence::as_slice)
            .collect();
        assert_eq!(variants, vec![&[1][..], &[2][..]]);
    }

    #[test]
    fn zero_cap_stores_nothing() {
        let mut table = CoverageStateTable::new(8);
        table.claim(7, 1, WordSequence::single(0));
        assert!(!table.push_variant(7, WordSequence::single(1), 0));
        assert!(table.variants(7).is_empty());
    }

    #[test]
    fn variant_lists_are_per_state() {
        let mut table = CoverageStateTable::new(8);
        table.claim(1, 1, WordSequence::single(0));
        table.claim(2, 2, WordSequence::single(1));
        table.push_variant(2, WordSequence::single(5), 10);
        table.push_variant(1, WordSequence::single(4), 10);

        assert_eq!(table.variants(1), &[WordSequence::single(4)]);
        assert_eq!(table.variants(2), &[WordSequence::single(5)]);
    }

    #[test]
    fn histogram_counts_lengths() {
        let mut table = CoverageStateTable::new(8);
        table.claim(1, 1, WordSequence::single(0));
        table.claim(2, 2, WordSequence::single(1));
        table.claim(3, 2, WordSequence::from_slice(&[0, 1]).unwrap());

        let histogram = table.length_histogram();
        assert_eq!(histogram.get(&1), Some(&2));
        assert_eq!(histogram.get(&2), Some(&1));
        assert_eq!(histogram.get(&3), None);
    }
}
