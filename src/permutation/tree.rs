//! Prefix-tree permutations on an explicit work-list.
//!
//! Each branch fixes one more item of the prefix and owns its own copy of what is left to
//! place, so siblings never see each other's choices.
use crate::counter::factorial;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Branch {
    prefix: Vec<usize>,
    remainder: Vec<usize>,
}

impl Branch {
    fn children(&self) -> impl DoubleEndedIterator<Item = Branch> + '_ {
        self.remainder.iter().enumerate().map(|(i, &item)| {
            let mut prefix = Vec::with_capacity(self.prefix.len() + 1);
            prefix.extend_from_slice(&self.prefix);
            prefix.push(item);

            let remainder = self
                .remainder
                .iter()
                .enumerate()
                .filter_map(|(j, &x)| (i != j).then_some(x))
                .collect();
            Branch { prefix, remainder }
        })
    }
}

///Lazily yields every reordering of a sequence, in the same order as the counter engine.
#[derive(Debug, Clone)]
pub struct TreeEnumerator<'a, T> {
    sequence: &'a [T],
    work: Vec<Branch>,
    remaining: u64,
}

impl<'a, T> TreeEnumerator<'a, T> {
    pub(crate) fn new(sequence: &'a [T]) -> Self {
        TreeEnumerator {
            sequence,
            work: vec![Branch {
                prefix: Vec::with_capacity(sequence.len()),
                remainder: (0..sequence.len()).collect(),
            }],
            remaining: factorial(sequence.len()).unwrap_or(u64::MAX),
        }
    }
}

impl<T: Clone> Iterator for TreeEnumerator<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(branch) = self.work.pop() {
            //One item left: it completes the prefix, no need to expand an empty remainder.
            if let [last] = branch.remainder.as_slice() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(
                    branch
                        .prefix
                        .iter()
                        .chain(std::iter::once(last))
                        .map(|&i| self.sequence[i].clone())
                        .collect(),
                );
            }
            //Reversed so the smallest item is popped first.
            self.work.extend(branch.children().rev());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::permutation::{PermutationStrategy, enumerate, enumerate_with};
    use crate::EnumerationLimits;

    #[test]
    fn branches_own_their_prefix() {
        let root = Branch {
            prefix: vec![3],
            remainder: vec![0, 1, 2],
        };
        let children = root.children().collect::<Vec<_>>();
        assert_eq!(
            children,
            vec![
                Branch {
                    prefix: vec![3, 0],
                    remainder: vec![1, 2]
                },
                Branch {
                    prefix: vec![3, 1],
                    remainder: vec![0, 2]
                },
                Branch {
                    prefix: vec![3, 2],
                    remainder: vec![0, 1]
                },
            ]
        );
        assert_eq!(root.prefix, vec![3]);
    }

    #[test]
    fn single_item_is_emitted_directly() {
        let mut tree = TreeEnumerator::new(&['z']);
        assert_eq!(tree.next(), Some(vec!['z']));
        assert_eq!(tree.next(), None);
    }

    #[test]
    fn matches_counter_engine() -> anyhow::Result<()> {
        for n in 1..=6 {
            let sequence = (0..n).map(|x| x * 10).collect::<Vec<_>>();
            let counter = enumerate(&sequence)?.collect::<Vec<_>>();
            let tree = enumerate_with(
                &sequence,
                PermutationStrategy::Tree,
                &EnumerationLimits::default(),
            )?
            .collect::<Vec<_>>();
            assert_eq!(counter, tree);
        }
        Ok(())
    }

    #[test]
    fn stops_early_without_expanding_everything() {
        let sequence = (0..12).collect::<Vec<u32>>();
        let mut tree = TreeEnumerator::new(&sequence);
        let first = tree.by_ref().take(3).collect::<Vec<_>>();
        assert_eq!(first[0], sequence);
        assert!(tree.work.len() < 100);
    }
}
