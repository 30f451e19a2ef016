//! Permutations of a sequence, generated by counting.
//!
//! The default engine treats an association array as a base-N number and counts through all
//! N^N values, keeping only those that are bijections on `0..N`. That is wasteful but has no
//! recursion and no guesswork; [`PermutationStrategy::Tree`] produces the same permutations by
//! fixing prefixes on an explicit work-list.
use serde::{Deserialize, Serialize};

use crate::{
    config::EnumerationLimits,
    counter::{factorial, increment_radix},
    error::{Engine, EnumerationError},
};

pub mod tree;
use tree::TreeEnumerator;

///An association array: digit `i` is the position of the sequence item placed at output
///position `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermutationState(Vec<usize>);

impl PermutationState {
    ///The smallest valid state, `[0, 1, ..., len - 1]`.
    ///
    ///Starting here rather than at all zeros skips every counter value below the first
    ///bijection.
    #[must_use]
    pub fn create(len: usize) -> Self {
        PermutationState((0..len).collect())
    }

    ///Whether every position `0..len` appears exactly once.
    ///
    ///```
    ///# use exhaustive_enum::permutation::PermutationState;
    ///let mut state = PermutationState::create(3);
    ///assert!(state.is_valid());
    ///state.increment();
    ///assert_eq!(state.digits(), &[0, 2, 0]);
    ///assert!(!state.is_valid());
    ///```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let base = self.0.len();
        let mut counts = vec![0usize; base];
        let mut distinct = 0;
        for &digit in &self.0 {
            let Some(count) = counts.get_mut(digit) else {
                return false;
            };
            *count += 1;
            if *count > 1 {
                return false;
            }
            distinct += 1;
        }
        distinct == base
    }

    ///Adds one to the least significant digit, carrying leftwards.
    ///
    ///Returns `false` once the counter wraps around to all zeros, which ends the enumeration.
    pub fn increment(&mut self) -> bool {
        let base = self.0.len();
        increment_radix(&mut self.0, base)
    }

    #[must_use]
    pub fn digits(&self) -> &[usize] {
        &self.0
    }

    ///Lays the items of `sequence` out in the order this state describes, or `None` if a digit
    ///is out of bounds for `sequence`.
    #[must_use]
    pub fn reorder<T: Clone>(&self, sequence: &[T]) -> Option<Vec<T>> {
        self.0.iter().map(|&i| sequence.get(i).cloned()).collect()
    }
}

///Which engine walks the permutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermutationStrategy {
    ///Count through all N^N association arrays, keeping the bijections.
    #[default]
    Counter,
    ///Fix each item as a prefix and expand the remainder.
    Tree,
}

impl PermutationStrategy {
    pub(crate) fn engine(self) -> Engine {
        match self {
            PermutationStrategy::Counter => Engine::PermutationCounter,
            PermutationStrategy::Tree => Engine::PermutationTree,
        }
    }
}

///Lazily yields every reordering of a sequence by filtering a mixed-radix counter.
#[derive(Debug, Clone)]
pub struct PermutationEnumerator<'a, T> {
    sequence: &'a [T],
    state: PermutationState,
    started: bool,
    exhausted: bool,
    remaining: u64,
}

impl<'a, T> PermutationEnumerator<'a, T> {
    fn new(sequence: &'a [T]) -> Self {
        PermutationEnumerator {
            sequence,
            state: PermutationState::create(sequence.len()),
            started: false,
            exhausted: false,
            remaining: factorial(sequence.len()).unwrap_or(u64::MAX),
        }
    }

    ///The counter value the enumerator is currently at.
    #[must_use]
    pub fn state(&self) -> &PermutationState {
        &self.state
    }
}

impl<T: Clone> Iterator for PermutationEnumerator<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            if !self.started {
                self.started = true;
            } else if !self.state.increment() {
                self.exhausted = true;
                log::debug!(
                    "Permutation counter over {} items wrapped around",
                    self.sequence.len()
                );
                return None;
            }

            if self.state.is_valid() {
                self.remaining = self.remaining.saturating_sub(1);
                return self.state.reorder(self.sequence);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted { 0 } else { self.remaining };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

///The permutations of a sequence, produced by either engine.
#[derive(Debug, Clone)]
pub enum Permutations<'a, T> {
    Counter(PermutationEnumerator<'a, T>),
    Tree(TreeEnumerator<'a, T>),
}

impl<T: Clone> Iterator for Permutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Permutations::Counter(c) => c.next(),
            Permutations::Tree(t) => t.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Permutations::Counter(c) => c.size_hint(),
            Permutations::Tree(t) => t.size_hint(),
        }
    }
}

///Every permutation of `sequence`, using the counter engine and default limits.
///
///```
///# use exhaustive_enum::permutation::enumerate;
///let orderings = enumerate(&['a', 'b', 'c'])?.collect::<Vec<_>>();
///assert_eq!(orderings.len(), 6);
///assert_eq!(orderings[0], vec!['a', 'b', 'c']);
///assert_eq!(orderings[5], vec!['c', 'b', 'a']);
///# Ok::<(), anyhow::Error>(())
///```
///
///# Errors
///Returns an [`EnumerationError`] if `sequence` is empty or too long.
pub fn enumerate<T: Clone>(sequence: &[T]) -> Result<Permutations<'_, T>, EnumerationError> {
    enumerate_with(
        sequence,
        PermutationStrategy::default(),
        &EnumerationLimits::default(),
    )
}

///Every permutation of `sequence`, using the given engine.
///
///Items are permuted by position, so equal items produce repeated orderings.
///
///# Errors
///Returns [`EnumerationError::EmptySequence`] for an empty sequence and
///[`EnumerationError::TooLong`] if `limits` rule out its length for this engine.
pub fn enumerate_with<'a, T: Clone>(
    sequence: &'a [T],
    strategy: PermutationStrategy,
    limits: &EnumerationLimits,
) -> Result<Permutations<'a, T>, EnumerationError> {
    limits.check_permutation(sequence.len(), strategy.engine())?;
    log::debug!(
        "Enumerating permutations of {} items with the {}",
        sequence.len(),
        strategy.engine()
    );

    Ok(match strategy {
        PermutationStrategy::Counter => Permutations::Counter(PermutationEnumerator::new(sequence)),
        PermutationStrategy::Tree => Permutations::Tree(TreeEnumerator::new(sequence)),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ahash::HashSet;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn starts_at_identity() {
        let state = PermutationState::create(4);
        assert_eq!(state.digits(), &[0, 1, 2, 3]);
        assert!(state.is_valid());
    }

    #[test]
    fn validity() {
        assert!(PermutationState(vec![2, 0, 1]).is_valid());
        assert!(!PermutationState(vec![0, 0, 1]).is_valid());
        assert!(!PermutationState(vec![2, 2, 2]).is_valid());
        assert!(!PermutationState(vec![0, 3, 1]).is_valid());

        let state = PermutationState(vec![1, 0, 1]);
        assert_eq!(state.is_valid(), state.is_valid());
        assert_eq!(state.digits(), &[1, 0, 1]);
    }

    #[test]
    fn increment_wraps() {
        let mut state = PermutationState(vec![2, 2, 1]);
        assert!(state.increment());
        assert_eq!(state.digits(), &[2, 2, 2]);
        assert!(!state.increment());
        assert_eq!(state.digits(), &[0, 0, 0]);
    }

    #[test]
    fn reorder_checks_bounds() {
        let state = PermutationState(vec![2, 0, 1]);
        assert_eq!(state.reorder(&['a', 'b', 'c']), Some(vec!['c', 'a', 'b']));
        assert_eq!(state.reorder(&['a', 'b']), None);
        assert_eq!(state.reorder(&['a', 'b', 'c', 'd']), Some(vec!['c', 'a', 'b']));
    }

    #[test]
    fn single_item() -> anyhow::Result<()> {
        let orderings = enumerate(&["only"])?.collect::<Vec<_>>();
        assert_eq!(orderings, vec![vec!["only"]]);
        Ok(())
    }

    #[test]
    fn empty_is_rejected() {
        let empty: [u8; 0] = [];
        assert!(matches!(
            enumerate(&empty),
            Err(EnumerationError::EmptySequence)
        ));
    }

    #[test]
    fn counter_order_is_lexicographic() -> anyhow::Result<()> {
        let orderings = enumerate(&[1, 2, 3])?.collect::<Vec<_>>();
        assert_eq!(
            orderings,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
        Ok(())
    }

    #[test]
    fn size_hint_counts_down() -> anyhow::Result<()> {
        let mut orderings = enumerate(&[0, 1, 2, 3])?;
        assert_eq!(orderings.size_hint(), (24, Some(24)));
        orderings.next();
        assert_eq!(orderings.size_hint(), (23, Some(23)));
        assert_eq!(orderings.count(), 23);
        Ok(())
    }

    #[test]
    fn duplicates_are_permuted_by_position() -> anyhow::Result<()> {
        let orderings = enumerate(&['x', 'x', 'y'])?.collect::<Vec<_>>();
        assert_eq!(orderings.len(), 6);
        let distinct: HashSet<_> = orderings.into_iter().collect();
        assert_eq!(distinct.len(), 3);
        Ok(())
    }

    #[test]
    fn too_long_for_counter() {
        let sequence = (0..16).collect::<Vec<u8>>();
        assert!(matches!(
            enumerate(&sequence),
            Err(EnumerationError::TooLong {
                len: 16,
                max: 15,
                engine: Engine::PermutationCounter
            })
        ));
        assert!(
            enumerate_with(
                &sequence,
                PermutationStrategy::Tree,
                &EnumerationLimits::default()
            )
            .is_ok()
        );
    }

    #[quickcheck]
    fn validity_matches_sorting(digits: Vec<u8>) -> bool {
        let digits = digits
            .into_iter()
            .take(8)
            .map(usize::from)
            .collect::<Vec<_>>();
        let mut sorted = digits.clone();
        sorted.sort_unstable();
        let expected = sorted.iter().copied().eq(0..digits.len());
        PermutationState(digits).is_valid() == expected
    }
}
