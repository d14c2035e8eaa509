//! Fraction engine: exact arithmetic on `{numerator, denominator}` pairs.
//!
//! - `Fraction`: value type with simplify, add, equivalence and display
//! - `random_fraction`: proper fractions over a `DenominatorSet`
//! - `parse_fraction`: the free-text input contract

mod parse;
mod random;
mod value;

pub use parse::parse_fraction;
pub use random::{random_fraction, DenominatorSet};
pub use value::{gcd, Fraction};
