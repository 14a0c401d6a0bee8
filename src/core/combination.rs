//! Ordered sub-selections of a sequence
//!
//! Used when reporting, to look up the variants registered for every part of a
//! complete sequence.

use itertools::Itertools;

/// All size-`size` sub-sequences of `items`, keeping relative order
///
/// Combinations come out in lexicographic index order. A size of zero, or larger
/// than `items`, yields nothing.
///
/// # Examples
/// ```
/// use wordle_cover::core::combinations;
///
/// assert_eq!(
///     combinations(&[1, 2, 3], 2),
///     vec![vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
#[must_use]
pub fn combinations<T: Copy>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.iter().copied().combinations(size).collect()
}
