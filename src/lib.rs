//! Exhaustive enumeration of permutations and target-sum subsets, driven by plain counters.
//!
//! Both engines advance an integer-valued counter through every state it can represent and keep
//! the states that pass a validity check: a mixed-radix association array for permutations
//! ([`permutation`]) and a binary array mask for subsets ([`subset`]). Nothing recurses and
//! nothing needs a depth limit; running out of counter states is the normal way to finish.
//!
//!```
//!# use exhaustive_enum::{find_matching_subsets, permutation};
//!let orderings = permutation::enumerate(&['a', 'b', 'c', 'd'])?.count();
//!assert_eq!(orderings, 24);
//!
//!let subsets = find_matching_subsets(&[1, 2, 3, 4, 5], 5)?
//!    .into_iter()
//!    .map(|s| s.into_values())
//!    .collect::<Vec<_>>();
//!assert_eq!(subsets, vec![vec![5], vec![2, 3], vec![1, 4]]);
//!# Ok::<(), anyhow::Error>(())
//!```
pub mod config;
pub mod counter;
pub mod error;
pub mod parser;
pub mod permutation;
pub mod subset;

pub use config::EnumerationLimits;
pub use error::{Engine, EnumerationError};
pub use permutation::{PermutationState, PermutationStrategy, Permutations};
pub use subset::{
    SubsetMask, SubsetMatch, SubsetSearch, SubsetStrategy, SubsetValue, find_matching_subsets,
};
