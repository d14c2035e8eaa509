//! # fraction-kitchen
//!
//! Fraction arithmetic and order matching for a pizza-counter game that
//! teaches fractions. A customer orders fractions of food items; the player
//! builds a serving out of cut pieces; the serving is judged by fraction
//! equivalence, so `2/4` of a pizza satisfies an order for `1/2`.
//!
//! ## Design Principles
//!
//! 1. **Exact**: Fractions are integer pairs. Nothing is rounded.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `KitchenRng`,
//!    so a seed replays the same customers.
//!
//! 3. **Explicit state**: One `OrderSession` owns the order and the serving.
//!    The pure functions underneath are usable on their own.
//!
//! ## Modules
//!
//! - `core`: Item IDs, RNG, configuration, errors
//! - `fraction`: `Fraction`, random generation, free-text parsing
//! - `session`: Orders, servings, evaluation, feedback text
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod fraction;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, CutPreset, FractionError, ItemId, KitchenConfig, KitchenError,
    KitchenRng, KitchenRngState, ParseFractionError,
};

pub use crate::fraction::{gcd, parse_fraction, random_fraction, DenominatorSet, Fraction};

pub use crate::session::{
    evaluate, generate_order, record_cut, reset_serving, CutReceipt, EvaluationResult,
    ItemOutcome, ItemStatus, Order, OrderSession, Portion, RoundPhase, Serving,
};
