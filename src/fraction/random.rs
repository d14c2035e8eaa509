//! Random order fractions drawn from a configured set of denominators.

use serde::{Deserialize, Serialize};

use super::Fraction;
use crate::core::error::FractionError;
use crate::core::KitchenRng;

/// The denominators an order may use.
///
/// Never empty, and every entry is at least 2 so a proper fraction exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct DenominatorSet(Vec<u64>);

impl DenominatorSet {
    /// Validate and build a set. Duplicates are kept, which weights the draw.
    pub fn new(denominators: impl Into<Vec<u64>>) -> Result<Self, FractionError> {
        let denominators = denominators.into();
        if denominators.is_empty() {
            return Err(FractionError::EmptyDenominatorSet);
        }
        if let Some(&d) = denominators.iter().find(|&&d| d < 2) {
            return Err(FractionError::DenominatorTooSmall(d));
        }
        Ok(Self(denominators))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl Default for DenominatorSet {
    fn default() -> Self {
        Self(vec![2, 3, 4, 5, 8, 10])
    }
}

impl TryFrom<Vec<u64>> for DenominatorSet {
    type Error = FractionError;

    fn try_from(value: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DenominatorSet> for Vec<u64> {
    fn from(set: DenominatorSet) -> Self {
        set.0
    }
}

/// Draw a proper fraction: a denominator uniformly from `choices`, then a
/// numerator uniformly from `1..=denominator - 1`.
pub fn random_fraction(rng: &mut KitchenRng, choices: &DenominatorSet) -> Fraction {
    let denominator = choices.0[rng.gen_index(choices.0.len())];
    let numerator = rng.gen_range_inclusive(1..=denominator - 1);
    Fraction::from_parts(numerator, denominator)
}
