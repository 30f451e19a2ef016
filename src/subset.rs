//! Subsets of a sequence whose values add up to a target.
//!
//! The primary engine walks an array mask through all 2^N states in binary order and sums the
//! selected values. With pruning enabled a sum is abandoned as soon as it passes the target,
//! which is only sound when no value is negative; that precondition is checked before the walk
//! starts.
use std::{fmt::Debug, hash::Hash};

use ahash::HashSet;
use num::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

use crate::{
    config::EnumerationLimits,
    error::EnumerationError,
    permutation::PermutationStrategy,
};

pub mod prefix;

///A value that can be summed and compared against a target.
pub trait SubsetValue: Copy + Ord + Hash + Debug + Zero + CheckedAdd {}

impl<T> SubsetValue for T where T: Copy + Ord + Hash + Debug + Zero + CheckedAdd {}

///One inclusion flag per sequence position; position 0 is the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubsetMask(Vec<bool>);

///The outcome of summing the values a mask selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskedSum<T> {
    ///Every selected value was added.
    Total(T),
    ///The running sum passed the target and the scan was abandoned.
    ExceedsTarget,
}

impl SubsetMask {
    ///The empty selection.
    #[must_use]
    pub fn create(len: usize) -> Self {
        SubsetMask(vec![false; len])
    }

    ///Binary +1: flips flags from the right until one goes from unset to set.
    pub fn increment(&mut self) {
        for flag in self.0.iter_mut().rev() {
            *flag = !*flag;
            if *flag {
                break;
            }
        }
    }

    ///Whether every flag is set, so that another increment would wrap to the empty selection.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|&flag| flag)
    }

    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.0
    }

    ///Selected positions in ascending order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
    }

    ///Sums the selected values of `sequence` in ascending position order.
    ///
    ///When `prune_above` is given the scan stops with [`MaskedSum::ExceedsTarget`] the moment
    ///the running sum is larger than it. Callers must only prune non-negative sequences; a
    ///non-negative value that overflows the running sum has passed the target as well.
    ///
    ///```
    ///# use exhaustive_enum::subset::{MaskedSum, SubsetMask};
    ///let mut mask = SubsetMask::create(3);
    ///mask.increment();
    ///mask.increment();
    ///mask.increment();
    ///assert_eq!(mask.flags(), &[false, true, true]);
    ///assert_eq!(mask.masked_sum(&[4, 5, 6], None)?, MaskedSum::Total(11));
    ///assert_eq!(mask.masked_sum(&[4, 5, 6], Some(10))?, MaskedSum::ExceedsTarget);
    ///# Ok::<(), anyhow::Error>(())
    ///```
    ///
    ///# Errors
    ///Returns [`EnumerationError::MaskMismatch`] if the mask and `sequence` differ in length,
    ///and [`EnumerationError::SumOverflow`] if the sum overflows without having passed a
    ///pruning target.
    pub fn masked_sum<T>(
        &self,
        sequence: &[T],
        prune_above: Option<T>,
    ) -> Result<MaskedSum<T>, EnumerationError>
    where
        T: Copy + PartialOrd + Zero + CheckedAdd,
    {
        if self.0.len() != sequence.len() {
            return Err(EnumerationError::MaskMismatch {
                mask: self.0.len(),
                sequence: sequence.len(),
            });
        }
        let mut total = T::zero();
        for value in self.selected().filter_map(|i| sequence.get(i)) {
            total = match total.checked_add(value) {
                Some(total) => total,
                None if prune_above.is_some() && *value >= T::zero() => {
                    return Ok(MaskedSum::ExceedsTarget);
                }
                None => return Err(EnumerationError::SumOverflow),
            };
            if prune_above.is_some_and(|target| total > target) {
                return Ok(MaskedSum::ExceedsTarget);
            }
        }
        Ok(MaskedSum::Total(total))
    }
}

///A subset that reached the target: its positions and values, in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubsetMatch<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy> SubsetMatch<T> {
    pub(crate) fn from_indices(sequence: &[T], indices: Vec<usize>) -> Self {
        let values = indices.iter().map(|&i| sequence[i]).collect();
        SubsetMatch { indices, values }
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    ///The values sorted ascending; two matches with the same signature are the same result.
    #[must_use]
    pub fn signature(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut values = self.values.clone();
        values.sort_unstable();
        values
    }
}

///Keeps the first match for each signature, in discovery order.
#[derive(Debug)]
pub(crate) struct DistinctMatches<T> {
    seen: HashSet<Vec<T>>,
    matches: Vec<SubsetMatch<T>>,
}

impl<T: SubsetValue> DistinctMatches<T> {
    pub(crate) fn new() -> Self {
        DistinctMatches {
            seen: HashSet::default(),
            matches: vec![],
        }
    }

    pub(crate) fn insert(&mut self, subset: SubsetMatch<T>) -> bool {
        if self.seen.insert(subset.signature()) {
            log::trace!("Found subset {:?}", subset.values());
            self.matches.push(subset);
            true
        } else {
            false
        }
    }

    pub(crate) fn into_vec(self) -> Vec<SubsetMatch<T>> {
        self.matches
    }
}

///Lazily walks every non-empty mask, yielding those whose sum equals the target.
///
///Matches are not deduplicated; equal values at different positions are reported separately.
#[derive(Debug, Clone)]
pub struct MaskedMatches<'a, T> {
    sequence: &'a [T],
    target: T,
    pruning: bool,
    mask: SubsetMask,
}

impl<'a, T: SubsetValue> MaskedMatches<'a, T> {
    fn new(sequence: &'a [T], target: T, pruning: bool) -> Self {
        MaskedMatches {
            sequence,
            target,
            pruning,
            mask: SubsetMask::create(sequence.len()),
        }
    }

    ///The mask most recently tested.
    #[must_use]
    pub fn mask(&self) -> &SubsetMask {
        &self.mask
    }
}

impl<T: SubsetValue> Iterator for MaskedMatches<'_, T> {
    type Item = SubsetMatch<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let prune_above = self.pruning.then_some(self.target);
        while !self.mask.is_full() {
            self.mask.increment();
            match self.mask.masked_sum(self.sequence, prune_above) {
                Ok(MaskedSum::Total(total)) if total == self.target => {
                    let indices = self.mask.selected().collect();
                    return Some(SubsetMatch::from_indices(self.sequence, indices));
                }
                _ => (),
            }
        }
        None
    }
}

///How subsets are searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsetStrategy {
    ///Walk the 2^N array mask.
    #[default]
    Mask,
    ///Scan the prefix sums of every permutation. Much slower, kept as an alternative.
    PermutationPrefix(PermutationStrategy),
}

///Settings for a subset-sum search.
///
///```
///# use exhaustive_enum::subset::SubsetSearch;
///let found = SubsetSearch::default().find(&[1, 2, 3, 4, 5], 12)?;
///assert_eq!(found.len(), 2);
///assert_eq!(found[0].values(), &[3, 4, 5]);
///assert_eq!(found[0].indices(), &[2, 3, 4]);
///assert_eq!(found[1].values(), &[1, 2, 4, 5]);
///# Ok::<(), anyhow::Error>(())
///```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetSearch {
    strategy: SubsetStrategy,
    pruning: bool,
    limits: EnumerationLimits,
}

impl Default for SubsetSearch {
    fn default() -> Self {
        SubsetSearch {
            strategy: SubsetStrategy::Mask,
            pruning: true,
            limits: EnumerationLimits::default(),
        }
    }
}

impl SubsetSearch {
    #[must_use]
    pub fn with_strategy(mut self, strategy: SubsetStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    ///Turning pruning off allows negative values.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn strategy(&self) -> SubsetStrategy {
        self.strategy
    }

    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    ///The mask walk as a lazy iterator, regardless of the configured strategy.
    ///
    ///# Errors
    ///Returns an [`EnumerationError`] if the sequence is empty or too long, if a value is
    ///negative while pruning, or if the values can overflow when summed.
    pub fn matches<'a, T: SubsetValue>(
        &self,
        sequence: &'a [T],
        target: T,
    ) -> Result<MaskedMatches<'a, T>, EnumerationError> {
        self.limits.check_subset(sequence.len())?;
        self.check_values(sequence)?;
        Ok(MaskedMatches::new(sequence, target, self.pruning))
    }

    ///Every distinct subset of `sequence` summing to `target`, in discovery order.
    ///
    ///Results are deduplicated by their sorted values. The empty subset is never reported.
    ///
    ///# Errors
    ///Returns an [`EnumerationError`] if the sequence is empty or too long for the strategy,
    ///if a value is negative while pruning, or if the values can overflow when summed.
    pub fn find<T: SubsetValue>(
        &self,
        sequence: &[T],
        target: T,
    ) -> Result<Vec<SubsetMatch<T>>, EnumerationError> {
        let found = match self.strategy {
            SubsetStrategy::Mask => {
                let matches = self.matches(sequence, target)?;
                log::debug!(
                    "Searching {} masks for subsets summing to {target:?}",
                    crate::counter::mask_states(sequence.len()).unwrap_or(u64::MAX)
                );
                let mut distinct = DistinctMatches::new();
                for subset in matches {
                    distinct.insert(subset);
                }
                distinct.into_vec()
            }
            SubsetStrategy::PermutationPrefix(strategy) => {
                self.check_values(sequence)?;
                prefix::find_prefix_subsets(sequence, target, strategy, self.pruning, &self.limits)?
            }
        };
        log::debug!("Found {} distinct subsets summing to {target:?}", found.len());
        Ok(found)
    }

    ///Rejects negative values when pruning, and sequences whose positive or negative values
    ///overflow when added up. Past this check no partial sum can overflow.
    fn check_values<T: SubsetValue>(&self, sequence: &[T]) -> Result<(), EnumerationError> {
        let zero = T::zero();
        let (mut positive, mut negative) = (zero, zero);
        for (index, &value) in sequence.iter().enumerate() {
            let total = if value < zero {
                if self.pruning {
                    return Err(EnumerationError::NegativeValue { index });
                }
                &mut negative
            } else {
                &mut positive
            };
            *total = total
                .checked_add(&value)
                .ok_or(EnumerationError::SumOverflow)?;
        }
        Ok(())
    }
}

///Every distinct subset of `sequence` summing to `target`, using the pruned mask walk.
///
///# Errors
///See [`SubsetSearch::find`].
pub fn find_matching_subsets<T: SubsetValue>(
    sequence: &[T],
    target: T,
) -> Result<Vec<SubsetMatch<T>>, EnumerationError> {
    SubsetSearch::default().find(sequence, target)
}
