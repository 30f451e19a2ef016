//! Subset sums read off the prefixes of every permutation.
//!
//! Every subset is the prefix of some ordering of the sequence, so scanning the running sum of
//! each of the N! orderings finds them all at O(N!·N) cost. Many orderings share a prefix, so
//! the candidates are deduplicated by their sorted values.
use crate::{
    config::EnumerationLimits,
    error::EnumerationError,
    permutation::{PermutationStrategy, enumerate_with},
};

use super::{DistinctMatches, SubsetMatch, SubsetValue};

///Length of the first prefix of `ordering` whose sum equals `target`.
fn matching_prefix<T: SubsetValue>(
    sequence: &[T],
    ordering: &[usize],
    target: T,
    pruning: bool,
) -> Option<usize> {
    let mut total = T::zero();
    for (i, &position) in ordering.iter().enumerate() {
        total = total + sequence[position];
        if total == target {
            return Some(i + 1);
        }
        if pruning && total > target {
            return None;
        }
    }
    None
}

pub(crate) fn find_prefix_subsets<T: SubsetValue>(
    sequence: &[T],
    target: T,
    strategy: PermutationStrategy,
    pruning: bool,
    limits: &EnumerationLimits,
) -> Result<Vec<SubsetMatch<T>>, EnumerationError> {
    let positions = (0..sequence.len()).collect::<Vec<_>>();
    let orderings = enumerate_with(&positions, strategy, limits)?;

    let mut distinct = DistinctMatches::new();
    for ordering in orderings {
        if let Some(len) = matching_prefix(sequence, &ordering, target, pruning) {
            let mut indices = ordering[..len].to_vec();
            indices.sort_unstable();
            distinct.insert(SubsetMatch::from_indices(sequence, indices));
        }
    }
    Ok(distinct.into_vec())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::subset::{SubsetSearch, SubsetStrategy};

    fn sorted_sets<T: SubsetValue>(found: &[SubsetMatch<T>]) -> Vec<Vec<T>> {
        let mut sets = found
            .iter()
            .map(SubsetMatch::signature)
            .collect::<Vec<_>>();
        sets.sort();
        sets
    }

    #[test]
    fn first_matching_prefix() {
        let sequence = [1, 2, 3, 4];
        assert_eq!(matching_prefix(&sequence, &[0, 1, 2, 3], 3, true), Some(2));
        assert_eq!(matching_prefix(&sequence, &[2, 0, 1, 3], 3, true), Some(1));
        assert_eq!(matching_prefix(&sequence, &[3, 0, 1, 2], 3, true), None);
        assert_eq!(matching_prefix(&[5, -2, 0], &[0, 1, 2], 3, false), Some(2));
    }

    #[test]
    fn agrees_with_mask_search() -> anyhow::Result<()> {
        let sequence = [1, 2, 3, 4, 5, 6];
        let masked = SubsetSearch::default().find(&sequence, 6)?;
        for strategy in [PermutationStrategy::Counter, PermutationStrategy::Tree] {
            let prefixed = SubsetSearch::default()
                .with_strategy(SubsetStrategy::PermutationPrefix(strategy))
                .find(&sequence, 6)?;
            assert_eq!(sorted_sets(&masked), sorted_sets(&prefixed));
        }
        Ok(())
    }

    #[test]
    fn results_are_in_sequence_order() -> anyhow::Result<()> {
        let found = find_prefix_subsets(
            &[5, 1, 4],
            5,
            PermutationStrategy::Counter,
            true,
            &EnumerationLimits::default(),
        )?;
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].indices(), &[0]);
        assert_eq!(found[1].indices(), &[1, 2]);
        assert_eq!(found[1].values(), &[1, 4]);
        Ok(())
    }

    #[test]
    fn shared_prefixes_collapse() -> anyhow::Result<()> {
        let found = find_prefix_subsets(
            &[2, 2, 2],
            4,
            PermutationStrategy::Tree,
            true,
            &EnumerationLimits::default(),
        )?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].values(), &[2, 2]);
        Ok(())
    }
}
