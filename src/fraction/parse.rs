//! Free-text fraction input: `"N/D"` or a bare whole number `"N"`.

use std::num::IntErrorKind;
use std::str::FromStr;

use super::Fraction;
use crate::core::error::ParseFractionError;

/// Parse player input into a fraction.
///
/// The input is trimmed and split on `/`. One part is a whole number, two
/// parts are numerator and denominator. Each part may carry surrounding
/// whitespace.
///
/// ```
/// use fraction_kitchen::fraction::parse_fraction;
///
/// assert_eq!(parse_fraction(" 3 / 4 ").unwrap().to_string(), "3/4");
/// assert_eq!(parse_fraction("2").unwrap().to_string(), "2");
/// assert!(parse_fraction("1/0").is_err());
/// ```
pub fn parse_fraction(input: &str) -> Result<Fraction, ParseFractionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseFractionError::Empty);
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    let (numerator, denominator) = match parts.as_slice() {
        [n] => (parse_part(n)?, 1),
        [n, d] => (parse_part(n)?, parse_part(d)?),
        _ => return Err(ParseFractionError::WrongShape(trimmed.to_string())),
    };

    if denominator == 0 {
        return Err(ParseFractionError::ZeroDenominator);
    }
    if numerator < 0 {
        return Err(ParseFractionError::NegativeNumerator);
    }
    if denominator < 0 {
        return Err(ParseFractionError::NegativeDenominator);
    }

    Ok(Fraction::from_parts(numerator.unsigned_abs(), denominator.unsigned_abs()))
}

fn parse_part(part: &str) -> Result<i64, ParseFractionError> {
    let part = part.trim();
    part.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFractionError::TooLarge(part.to_string()),
        _ => ParseFractionError::NotANumber(part.to_string()),
    })
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fraction(s)
    }
}
