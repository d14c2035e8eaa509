//! The `Fraction` value type and its arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::core::error::FractionError;

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
///
/// ```
/// use fraction_kitchen::fraction::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// A non-negative fraction with a non-zero denominator.
///
/// Fractions are not kept in lowest terms: `2/4` and `1/2` are different
/// values under `==` and display differently. Use [`Fraction::equivalent`]
/// to compare portions.
///
/// ```
/// use fraction_kitchen::Fraction;
///
/// let half = Fraction::new(1, 2).unwrap();
/// let two_quarters = Fraction::new(2, 4).unwrap();
///
/// assert_ne!(half, two_quarters);
/// assert!(half.equivalent(two_quarters));
/// assert_eq!(two_quarters.to_string(), "2/4");
/// assert_eq!((half + half).to_string(), "1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFraction")]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

/// Unvalidated wire form, checked on deserialize.
#[derive(Deserialize)]
struct RawFraction {
    numerator: u64,
    denominator: u64,
}

impl TryFrom<RawFraction> for Fraction {
    type Error = FractionError;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Fraction::new(raw.numerator, raw.denominator)
    }
}

impl Fraction {
    /// The empty portion, `0/1`.
    pub const ZERO: Fraction = Fraction::from_parts(0, 1);

    /// A whole item, `1/1`.
    pub const ONE: Fraction = Fraction::from_parts(1, 1);

    /// Create a fraction. Fails if the denominator is zero.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// A whole number `n/1`.
    #[must_use]
    pub const fn whole(n: u64) -> Self {
        Self::from_parts(n, 1)
    }

    /// Construct without the zero check. Callers guarantee `denominator != 0`.
    pub(crate) const fn from_parts(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    #[must_use]
    pub const fn numerator(self) -> u64 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(self) -> u64 {
        self.denominator
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// True for fractions strictly between 0 and 1.
    #[must_use]
    pub const fn is_proper(self) -> bool {
        self.numerator > 0 && self.numerator < self.denominator
    }

    /// Reduce to lowest terms. Zero always reduces to `0/1`.
    #[must_use]
    pub const fn simplify(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let divisor = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / divisor,
            denominator: self.denominator / divisor,
        }
    }

    /// Add two fractions over the common denominator `d1 * d2`, then
    /// simplify.
    ///
    /// Fails with [`FractionError::Overflow`] only if the reduced sum does
    /// not fit in `u64`.
    pub fn checked_add(self, other: Self) -> Result<Self, FractionError> {
        let d1 = u128::from(self.denominator);
        let d2 = u128::from(other.denominator);
        let numerator = (u128::from(self.numerator) * d2)
            .checked_add(u128::from(other.numerator) * d1)
            .ok_or(FractionError::Overflow)?;
        let denominator = d1 * d2;

        let (numerator, denominator) = if numerator == 0 {
            (0, 1)
        } else {
            let divisor = gcd_wide(numerator, denominator);
            (numerator / divisor, denominator / divisor)
        };

        match (u64::try_from(numerator), u64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Self {
                numerator,
                denominator,
            }),
            _ => Err(FractionError::Overflow),
        }
    }

    /// True if both fractions reduce to the same numerator and denominator.
    #[must_use]
    pub fn equivalent(self, other: Self) -> bool {
        self.simplify() == other.simplify()
    }

    /// Player-facing text: `"0"`, a bare whole number, or `"n/d"`.
    ///
    /// The fraction is shown as stored; `2/4` stays `"2/4"`.
    #[must_use]
    pub fn to_display_string(self) -> String {
        self.to_string()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Fraction {
    type Output = Fraction;

    /// # Panics
    ///
    /// Panics if the reduced sum overflows `u64`. Use
    /// [`Fraction::checked_add`] for untrusted inputs.
    fn add(self, other: Self) -> Self::Output {
        match self.checked_add(other) {
            Ok(sum) => sum,
            Err(_) => panic!("fraction sum overflows u64: {} + {}", self, other),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            write!(f, "0")
        } else if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
