//! Error taxonomy.
//!
//! Rejected input never changes game state. An incorrect serving is not an
//! error: it is a normal `EvaluationResult`.

use thiserror::Error;

/// Invalid fraction construction or arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("a fraction cannot have a zero denominator")]
    ZeroDenominator,

    #[error("fraction arithmetic overflowed")]
    Overflow,

    #[error("at least one denominator is required to generate a fraction")]
    EmptyDenominatorSet,

    #[error("denominator {0} is too small to generate a proper fraction")]
    DenominatorTooSmall(u64),
}

/// Rejected free-text fraction input.
///
/// The messages are meant to be shown to the player as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("please enter a fraction like 3/4 or a whole number")]
    Empty,

    #[error("'{0}' is not a fraction; use the form N/D")]
    WrongShape(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is too large")]
    TooLarge(String),

    #[error("the denominator cannot be zero")]
    ZeroDenominator,

    #[error("the numerator cannot be negative")]
    NegativeNumerator,

    #[error("the denominator cannot be negative")]
    NegativeDenominator,
}

/// Invalid game configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the item catalog is empty")]
    EmptyCatalog,

    #[error("item '{0}' appears more than once in the catalog")]
    DuplicateItem(String),

    #[error("items per order must satisfy 1 <= min ({min}) <= max ({max})")]
    InvalidItemRange { min: usize, max: usize },

    #[error("unknown cut preset '{0}'")]
    UnknownPreset(String),

    #[error("cut preset '{0}' is defined more than once")]
    DuplicatePreset(String),

    #[error("invalid denominator configuration: {0}")]
    Fraction(#[from] FractionError),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error surfaced by the kitchen engine.
#[derive(Error, Debug)]
pub enum KitchenError {
    #[error(transparent)]
    Fraction(#[from] FractionError),

    #[error(transparent)]
    Parse(#[from] ParseFractionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
