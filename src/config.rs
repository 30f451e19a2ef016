//! Ceilings on how large an enumeration is allowed to get.
use serde::{Deserialize, Serialize};

use crate::{
    counter::{counter_states, factorial, mask_states},
    error::{Engine, EnumerationError},
};

///The largest mask whose state count still fits in a `u64`.
pub const MAX_REPRESENTABLE_SUBSET_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LimitSettings")]
///Upper bounds on sequence length, checked before any enumeration work begins.
pub struct EnumerationLimits {
    max_permutation_len: usize,
    max_subset_len: usize,
}

impl EnumerationLimits {
    ///# Errors
    ///Returns [`EnumerationError::InvalidLimits`] if `max_subset_len` is above
    ///[`MAX_REPRESENTABLE_SUBSET_LEN`].
    pub fn new(max_permutation_len: usize, max_subset_len: usize) -> Result<Self, EnumerationError> {
        if max_subset_len > MAX_REPRESENTABLE_SUBSET_LEN {
            return Err(EnumerationError::InvalidLimits(max_subset_len));
        }
        Ok(Self {
            max_permutation_len,
            max_subset_len,
        })
    }

    #[must_use]
    pub fn max_permutation_len(&self) -> usize {
        self.max_permutation_len
    }

    #[must_use]
    pub fn max_subset_len(&self) -> usize {
        self.max_subset_len
    }

    ///Checks a permutation of `len` items can be walked by `engine`.
    ///
    ///Besides the configured ceiling, the counter engine needs `len^len` and the tree engine
    ///needs `len!` to fit in a `u64`.
    ///
    ///# Errors
    ///Returns [`EnumerationError::EmptySequence`] or [`EnumerationError::TooLong`].
    pub fn check_permutation(&self, len: usize, engine: Engine) -> Result<(), EnumerationError> {
        if len == 0 {
            return Err(EnumerationError::EmptySequence);
        }
        let representable = match engine {
            Engine::PermutationCounter => counter_states(len, len).is_some(),
            _ => factorial(len).is_some(),
        };
        if len > self.max_permutation_len || !representable {
            return Err(EnumerationError::TooLong {
                len,
                max: self.largest_permutation(engine),
                engine,
            });
        }
        Ok(())
    }

    ///Checks a mask over `len` items fits.
    ///
    ///# Errors
    ///Returns [`EnumerationError::EmptySequence`] or [`EnumerationError::TooLong`].
    pub fn check_subset(&self, len: usize) -> Result<(), EnumerationError> {
        if len == 0 {
            return Err(EnumerationError::EmptySequence);
        }
        if len > self.max_subset_len || mask_states(len).is_none() {
            return Err(EnumerationError::TooLong {
                len,
                max: self.max_subset_len,
                engine: Engine::SubsetMask,
            });
        }
        Ok(())
    }

    fn largest_permutation(&self, engine: Engine) -> usize {
        (1..=self.max_permutation_len)
            .take_while(|&n| match engine {
                Engine::PermutationCounter => counter_states(n, n).is_some(),
                _ => factorial(n).is_some(),
            })
            .last()
            .unwrap_or(0)
    }
}

impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            max_permutation_len: 20,
            max_subset_len: 62,
        }
    }
}

///Deserialized limits, validated through [`EnumerationLimits::new`].
#[derive(Deserialize)]
#[serde(default)]
struct LimitSettings {
    max_permutation_len: usize,
    max_subset_len: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        let limits = EnumerationLimits::default();
        LimitSettings {
            max_permutation_len: limits.max_permutation_len,
            max_subset_len: limits.max_subset_len,
        }
    }
}

impl TryFrom<LimitSettings> for EnumerationLimits {
    type Error = EnumerationError;

    fn try_from(settings: LimitSettings) -> Result<Self, Self::Error> {
        EnumerationLimits::new(settings.max_permutation_len, settings.max_subset_len)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_ceilings() {
        let limits = EnumerationLimits::default();
        assert_eq!(limits.check_permutation(20, Engine::PermutationTree), Ok(()));
        assert_eq!(
            limits.check_permutation(21, Engine::PermutationTree),
            Err(EnumerationError::TooLong {
                len: 21,
                max: 20,
                engine: Engine::PermutationTree
            })
        );
        assert_eq!(limits.check_permutation(15, Engine::PermutationCounter), Ok(()));
        assert_eq!(
            limits.check_permutation(16, Engine::PermutationCounter),
            Err(EnumerationError::TooLong {
                len: 16,
                max: 15,
                engine: Engine::PermutationCounter
            })
        );
        assert_eq!(limits.check_subset(62), Ok(()));
        assert!(limits.check_subset(63).is_err());
    }

    #[test]
    fn empty_is_rejected_first() {
        let limits = EnumerationLimits::default();
        assert_eq!(
            limits.check_permutation(0, Engine::PermutationCounter),
            Err(EnumerationError::EmptySequence)
        );
        assert_eq!(limits.check_subset(0), Err(EnumerationError::EmptySequence));
    }

    #[test]
    fn custom_limits() -> anyhow::Result<()> {
        let limits = EnumerationLimits::new(4, 63)?;
        assert!(limits.check_permutation(5, Engine::PermutationCounter).is_err());
        assert_eq!(limits.check_subset(63), Ok(()));
        assert_eq!(
            EnumerationLimits::new(4, 64),
            Err(EnumerationError::InvalidLimits(64))
        );
        Ok(())
    }

    #[test]
    fn deserializing_validates() -> anyhow::Result<()> {
        let limits: EnumerationLimits =
            serde_json::from_str(r#"{"max_permutation_len":8,"max_subset_len":63}"#)?;
        assert_eq!(limits, EnumerationLimits::new(8, 63)?);

        let partial: EnumerationLimits = serde_json::from_str(r#"{"max_subset_len":10}"#)?;
        assert_eq!(partial, EnumerationLimits::new(20, 10)?);

        let err = serde_json::from_str::<EnumerationLimits>(r#"{"max_subset_len":64}"#)
            .expect_err("64 is past the mask ceiling");
        assert!(err.to_string().contains("64"));

        let round_trip: EnumerationLimits =
            serde_json::from_str(&serde_json::to_string(&EnumerationLimits::default())?)?;
        assert_eq!(round_trip, EnumerationLimits::default());
        Ok(())
    }
}
