//! Errors reported before any enumeration work begins.
use thiserror::Error;

///Which engine a length limit was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    ///The mixed-radix generate-and-filter permutation counter.
    PermutationCounter,
    ///The prefix-tree permutation work-list.
    PermutationTree,
    ///The binary subset mask.
    SubsetMask,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::PermutationCounter => write!(f, "permutation counter"),
            Engine::PermutationTree => write!(f, "permutation tree"),
            Engine::SubsetMask => write!(f, "subset mask"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
///A precondition of an enumeration was violated.
pub enum EnumerationError {
    ///There is nothing to enumerate.
    #[error("Cannot enumerate an empty sequence")]
    EmptySequence,

    ///Pruning a subset sum is only sound when no value is negative.
    #[error("Item {index} is negative, which is not allowed when subset pruning is enabled")]
    NegativeValue { index: usize },

    ///The sequence is longer than the engine can (or is configured to) handle.
    #[error("A sequence of length {len} exceeds the {engine} limit of {max}")]
    TooLong {
        len: usize,
        max: usize,
        engine: Engine,
    },

    ///The totals of the sequence's values don't fit in the value type.
    #[error("The values of the sequence can overflow when summed")]
    SumOverflow,

    ///A mask was applied to a sequence of a different length.
    #[error("A mask over {mask} items cannot select from a sequence of {sequence} items")]
    MaskMismatch { mask: usize, sequence: usize },

    ///The configured limits themselves are not representable.
    #[error("A subset limit of {0} is larger than the 63 items a mask count can represent")]
    InvalidLimits(usize),
}
