//! Incremental state search
//!
//! Words are processed strictly in input order. Each valid word first registers
//! itself as a one-word sequence, then tries to extend every state reached before
//! it. The first sequence to reach a coverage owns it; later ones are kept as
//! capped variants.

use super::table::{CoverageStateTable, WordSequence};
use crate::config::VariantCaps;
use crate::core::{INVALID, LetterCodec, Signature};

/// What processing one word did to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    /// The word encodes to the invalid signature and was skipped
    Invalid,
    /// A letter-permutation of an earlier word, stored as a round-0 variant
    Variant,
    /// A letter-permutation of an earlier word, dropped because the cap was reached
    Discarded,
    /// The word owns its own signature and was tried against every earlier state
    Canonical { created: usize, variants: usize },
}

/// Running totals for a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub words: usize,
    pub invalid: usize,
    pub canonical_words: usize,
    pub permutations: usize,
    pub discarded: usize,
    pub states_created: usize,
    pub variants: usize,
}

impl ScanStats {
    fn record(&mut self, outcome: WordOutcome) {
        self.words += 1;
        match outcome {
            WordOutcome::Invalid => self.invalid += 1,
            WordOutcome::Variant => {
                self.permutations += 1;
                self.variants += 1;
            }
            WordOutcome::Discarded => {
                self.permutations += 1;
                self.discarded += 1;
            }
            WordOutcome::Canonical { created, variants } => {
                self.canonical_words += 1;
                // The word's own one-word state counts as created too
                self.states_created += created + 1;
                self.variants += variants;
            }
        }
    }
}

/// Drives the scan over a borrowed state table
///
/// # Examples
/// ```
/// use wordle_cover::config::VariantCaps;
/// use wordle_cover::core::{ExcludedLetters, LetterCodec};
/// use wordle_cover::search::{CoverageStateTable, SearchEngine};
///
/// let codec = LetterCodec::new(ExcludedLetters::new("jqvwxyz").unwrap());
/// let mut table = CoverageStateTable::for_codec(&codec);
/// let signatures: Vec<_> = ["fjord", "bumps", "ghost"].iter().map(|w| codec.encode(w)).collect();
///
/// let mut engine = SearchEngine::new(&codec, VariantCaps::default(), &mut table);
/// let stats = engine.run(&signatures);
/// assert_eq!(stats.invalid, 1); // "fjord" contains an excluded letter
/// ```
pub struct SearchEngine<'a> {
    codec: &'a LetterCodec,
    caps: VariantCaps,
    table: &'a mut CoverageStateTable,
    stats: ScanStats,
}

impl<'a> SearchEngine<'a> {
    pub fn new(
        codec: &'a LetterCodec,
        caps: VariantCaps,
        table: &'a mut CoverageStateTable,
    ) -> Self {
        Self {
            codec,
            caps,
            table,
            stats: ScanStats::default(),
        }
    }

    /// Read-only view of the table between steps
    #[must_use]
    pub fn table(&self) -> &CoverageStateTable {
        self.table
    }

    #[must_use]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Process every signature in order, starting at word index 0
    pub fn run(&mut self, signatures: &[Signature]) -> ScanStats {
        for (wi, &signature) in (0u32..).zip(signatures) {
            self.process_word(wi, signature);
        }
        self.stats
    }

    /// Process word `wi` with signature `signature`
    ///
    /// Word indices must be passed in strictly increasing order.
    pub fn process_word(&mut self, wi: u32, signature: Signature) -> WordOutcome {
        let outcome = self.register(wi, signature);
        self.stats.record(outcome);
        outcome
    }

    fn register(&mut self, wi: u32, signature: Signature) -> WordOutcome {
        if signature == INVALID {
            return WordOutcome::Invalid;
        }

        // An earlier word with the same letters already owns this signature
        if self.table.get(signature).is_reached() {
            let variant = WordSequence::single(wi);
            let cap = self.caps.round(0);
            return if self.table.push_variant(signature, variant, cap) {
                WordOutcome::Variant
            } else {
                WordOutcome::Discarded
            };
        }

        let sequence = WordSequence::single(wi);
        self.table.claim(signature, wi + 1, sequence);
        let (created, variants) = self.extend_all(wi, signature);
        WordOutcome::Canonical { created, variants }
    }

    /// Try word `wi` as the next word of every earlier state
    ///
    /// States claimed during this pass carry watermark `wi + 1`, so the sweep only
    /// ever extends states that existed before the word was seen.
    fn extend_all(&mut self, wi: u32, bw: Signature) -> (usize, usize) {
        let mut created = 0;
        let mut variants = 0;

        for index in 0..self.table.size() {
            let si = index as Signature;
            let state = *self.table.get(si);
            if !state.is_reached() || state.watermark() > wi {
                continue;
            }

            let sequence = state.sequence();
            let new_si = si | bw;
            if new_si.count_ones() < self.codec.required_coverage(sequence.len() + 1) {
                continue;
            }
            let Some(extended) = sequence.extended(wi) else {
                continue;
            };

            let target = self.table.get(new_si);
            if target.is_reached() {
                let cap = self.caps.round(target.sequence().len() - 1);
                if self.table.push_variant(new_si, extended, cap) {
                    variants += 1;
                }
            } else {
                self.table.claim(new_si, wi + 1, extended);
                created += 1;
            }
        }

        (created, variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExcludedLetters;

    fn codec(excluded: &str) -> LetterCodec {
        LetterCodec::new(ExcludedLetters::new(excluded).unwrap())
    }

    fn scan(
        codec: &LetterCodec,
        caps: VariantCaps,
        words: &[&str],
    ) -> (CoverageStateTable, Vec<Signature>, ScanStats) {
        let signatures: Vec<Signature> = words.iter().map(|w| codec.encode(w)).collect();
        let mut table = CoverageStateTable::for_codec(codec);
        let stats = SearchEngine::new(codec, caps, &mut table).run(&signatures);
        (table, signatures, stats)
    }

    fn indices(sequences: &[WordSequence]) -> Vec<Vec<u32>> {
        sequences.iter().map(|s| s.as_slice().to_vec()).collect()
    }

    #[test]
    fn invalid_word_leaves_table_untouched() {
        let codec = codec("q");
        let (table, _, stats) = scan(&codec, VariantCaps::default(), &["quick", "geese"]);

        assert_eq!(stats.words, 2);
        assert_eq!(stats.invalid, 2);
        assert!(table.reached().next().is_none());
    }

    #[test]
    fn first_word_owns_its_signature() {
        let codec = codec("q");
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &["crane"]);

        let state = table.get(sigs[0]);
        assert_eq!(state.watermark(), 1);
        assert_eq!(state.sequence().as_slice(), &[0]);
        assert!(table.variants(sigs[0]).is_empty());
    }

    #[test]
    fn permutation_becomes_round_zero_variant() {
        let codec = codec("q");
        let (table, sigs, stats) =
            scan(&codec, VariantCaps::default(), &["stare", "crane", "tears"]);

        assert_eq!(sigs[0], sigs[2]);
        assert_eq!(table.get(sigs[0]).sequence().as_slice(), &[0]);
        assert_eq!(indices(table.variants(sigs[0])), vec![vec![2]]);
        assert_eq!(stats.permutations, 1);
        assert_eq!(stats.canonical_words, 2);
    }

    #[test]
    fn permutation_over_cap_is_discarded() {
        let codec = codec("q");
        let caps = VariantCaps::new([1, 10, 10, 10, 100]);
        let mut table = CoverageStateTable::for_codec(&codec);
        let mut engine = SearchEngine::new(&codec, caps, &mut table);

        let sig = codec.encode("stare");
        assert!(matches!(
            engine.process_word(0, sig),
            WordOutcome::Canonical { .. }
        ));
        assert_eq!(
            engine.process_word(1, codec.encode("tears")),
            WordOutcome::Variant
        );
        assert_eq!(
            engine.process_word(2, codec.encode("rates")),
            WordOutcome::Discarded
        );
        assert_eq!(engine.stats().discarded, 1);
        assert_eq!(indices(engine.table().variants(sig)), vec![vec![1]]);
    }

    #[test]
    fn disjoint_words_extend() {
        let codec = codec("q");
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &["fjord", "gucks"]);

        let pair = table.get(sigs[0] | sigs[1]);
        assert_eq!(pair.sequence().as_slice(), &[0, 1]);
        assert_eq!(pair.watermark(), 2);
    }

    #[test]
    fn overlapping_words_rejected_without_tolerance() {
        let codec = codec("q");
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &["crane", "tails"]);

        assert!(!table.get(sigs[0] | sigs[1]).is_reached());
    }

    #[test]
    fn overlap_allowed_within_tolerance() {
        // Two excluded letters allow one shared letter ('a')
        let codec = codec("jq");
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &["crane", "tails"]);

        let pair = table.get(sigs[0] | sigs[1]);
        assert_eq!(pair.sequence().as_slice(), &[0, 1]);
        assert_eq!((sigs[0] | sigs[1]).count_ones(), 9);
    }

    #[test]
    fn later_route_to_same_coverage_is_a_variant() {
        let codec = codec("q");
        let words = ["abcde", "fghij", "abcfg", "dehij"];
        let (table, sigs, stats) = scan(&codec, VariantCaps::default(), &words);

        let coverage = sigs[0] | sigs[1];
        assert_eq!(coverage, sigs[2] | sigs[3]);
        assert_eq!(table.get(coverage).sequence().as_slice(), &[0, 1]);
        assert_eq!(indices(table.variants(coverage)), vec![vec![2, 3]]);
        assert_eq!(stats.variants, 1);
    }

    #[test]
    fn variant_cap_uses_target_round() {
        let codec = codec("q");
        let caps = VariantCaps::new([10, 0, 10, 10, 100]);
        let words = ["abcde", "fghij", "abcfg", "dehij"];
        let (table, sigs, stats) = scan(&codec, caps, &words);

        assert!(table.variants(sigs[0] | sigs[1]).is_empty());
        assert_eq!(stats.variants, 0);
    }

    #[test]
    fn states_claimed_in_a_step_are_not_extended_by_it() {
        // Seven excluded letters let a word overlap itself and still pass the threshold
        let codec = codec("jqvwxyz");
        let words = ["crane", "spilt", "hound"];
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &words);

        let all = sigs[0] | sigs[1] | sigs[2];
        assert_eq!(table.get(all).sequence().as_slice(), &[0, 1, 2]);
        assert!(table.variants(all).is_empty());

        for (si, state) in table.reached() {
            assert!(table.variants(si).is_empty());
            let sequence = state.sequence().as_slice();
            assert!(sequence.windows(2).all(|w| w[0] < w[1]), "{sequence:?}");
        }
    }

    #[test]
    fn sequences_follow_scan_order() {
        let codec = codec("q");
        let words = ["fjord", "crane", "gucks", "nymph", "vibex", "waltz"];
        let (table, sigs, _) = scan(&codec, VariantCaps::default(), &words);

        let full = sigs[0] | sigs[2] | sigs[3] | sigs[4] | sigs[5];
        assert_eq!(full.count_ones(), 25);
        assert_eq!(table.get(full).sequence().as_slice(), &[0, 2, 3, 4, 5]);
        assert_eq!(table.get(full).watermark(), 6);
    }

    #[test]
    fn complete_sequences_are_frozen() {
        let codec = codec("q");
        let words = ["fjord", "gucks", "nymph", "vibex", "waltz"];
        let signatures: Vec<Signature> = words.iter().map(|w| codec.encode(w)).collect();
        let mut table = CoverageStateTable::for_codec(&codec);
        let mut engine = SearchEngine::new(&codec, VariantCaps::default(), &mut table);
        engine.run(&signatures);

        let full = signatures.iter().fold(0, |acc, s| acc | s);
        let before = *engine.table().get(full);
        assert!(before.sequence().is_complete());

        // More words cannot change a complete state
        for (wi, word) in (5u32..).zip(["zlatw", "bexiv", "crane"]) {
            engine.process_word(wi, codec.encode(word));
        }
        assert_eq!(*engine.table().get(full), before);
    }

    #[test]
    fn stats_account_for_every_word() {
        let codec = codec("q");
        let words = ["stare", "tears", "quick", "fjord", "gucks"];
        let (_, _, stats) = scan(&codec, VariantCaps::default(), &words);

        assert_eq!(stats.words, 5);
        assert_eq!(
            stats.invalid + stats.permutations + stats.canonical_words,
            stats.words
        );
        // stare, fjord, gucks, fjord+gucks
        assert_eq!(stats.states_created, 4);
    }
}
