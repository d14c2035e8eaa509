//! Core types: item IDs, RNG, configuration, errors.
//!
//! These are shared by the fraction engine and the order session.

pub mod config;
pub mod error;
pub mod item;
pub mod rng;

pub use config::{CutPreset, KitchenConfig};
pub use error::{ConfigError, FractionError, KitchenError, ParseFractionError, Result};
pub use item::ItemId;
pub use rng::{KitchenRng, KitchenRngState};
