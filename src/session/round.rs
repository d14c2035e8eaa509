//! The game session: one active order and one active serving.
//!
//! ## Round lifecycle
//!
//! ```text
//! AwaitingServing --record_cut--> AwaitingServing --evaluate--> Evaluated
//!        ^                                                          |
//!        +------------- record_cut / new_round ---------------------+
//! ```
//!
//! A failed evaluation leaves the round open; the player keeps cutting and
//! serves again. A successful one waits for the front end to call
//! [`OrderSession::new_round`] once [`OrderSession::success_delay`] has
//! elapsed. Starting a round twice is harmless.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::evaluate::{evaluate, record_cut, reset_serving, EvaluationResult};
use super::portion::{Order, Portion, Serving};
use crate::core::error::{ConfigError, FractionError, KitchenError};
use crate::core::{ItemId, KitchenConfig, KitchenRng, KitchenRngState};
use crate::fraction::{parse_fraction, random_fraction, Fraction};

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// The player is assembling the serving.
    AwaitingServing,
    /// The serving was judged and not changed since.
    Evaluated { success: bool },
}

/// Confirmation of one recorded cut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutReceipt {
    pub item: ItemId,
    /// The piece just added.
    pub piece: Fraction,
    /// The item's accumulated fraction after the cut.
    pub total: Fraction,
}

impl fmt::Display for CutReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added {} of a {} to serving.", self.piece, self.item)
    }
}

/// Draw a fresh order: between `min_items` and `max_items` distinct catalog
/// items, each with a random proper fraction.
pub fn generate_order(rng: &mut KitchenRng, config: &KitchenConfig) -> Order {
    let max = config.effective_max_items();
    let min = config.min_items.min(max);
    let count = rng.gen_range_inclusive(min as u64..=max as u64) as usize;

    let items: Vec<ItemId> = rng
        .choose_distinct(&config.catalog, count)
        .into_iter()
        .cloned()
        .collect();

    Order::from_portions(
        items
            .into_iter()
            .map(|item| Portion::new(item, random_fraction(rng, &config.denominators))),
    )
}

/// A single-player game session.
///
/// Owns the configuration, the seeded RNG, the current order and the current
/// serving. Every mutation goes through a method here.
#[derive(Clone, Debug)]
pub struct OrderSession {
    config: KitchenConfig,
    rng: KitchenRng,
    order: Order,
    serving: Serving,
    phase: RoundPhase,
    round: u64,
}

impl OrderSession {
    /// Validate the config and open the first round.
    pub fn new(config: KitchenConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, KitchenRng::new(seed))
    }

    /// Like [`OrderSession::new`], with a caller-supplied RNG.
    pub fn with_rng(config: KitchenConfig, rng: KitchenRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            config,
            rng,
            order: Order::default(),
            serving: Serving::new(),
            phase: RoundPhase::AwaitingServing,
            round: 0,
        };
        session.new_round();
        Ok(session)
    }

    /// Resume from a saved RNG position and open a round.
    ///
    /// The first order is the one the saved session would have drawn on its
    /// next [`OrderSession::new_round`]. The round counter restarts at 1.
    pub fn from_rng_state(config: KitchenConfig, state: &KitchenRngState) -> Result<Self, ConfigError> {
        Self::with_rng(config, KitchenRng::from_state(state))
    }

    /// Replace the order with a fresh one and clear the serving.
    pub fn new_round(&mut self) -> &Order {
        self.order = generate_order(&mut self.rng, &self.config);
        self.serving = reset_serving();
        self.phase = RoundPhase::AwaitingServing;
        self.round += 1;
        info!(round = self.round, order = %self.order, "new customer");
        &self.order
    }

    /// Add a piece of `item` to the serving.
    ///
    /// On error the serving is unchanged.
    pub fn record_cut(&mut self, item: impl Into<ItemId>, piece: Fraction) -> Result<CutReceipt, FractionError> {
        let item = item.into();
        let serving = record_cut(&self.serving, item.clone(), piece).inspect_err(|e| {
            warn!(item = %item, piece = %piece, error = %e, "cut rejected");
        })?;
        self.serving = serving;
        self.phase = RoundPhase::AwaitingServing;

        let total = self.serving.get(item.as_str()).unwrap_or(piece);
        debug!(item = %item, piece = %piece, total = %total, "cut recorded");
        Ok(CutReceipt { item, piece, total })
    }

    /// Apply a named cut preset to `item`.
    pub fn apply_preset(&mut self, item: impl Into<ItemId>, preset: &str) -> Result<CutReceipt, KitchenError> {
        let piece = self
            .config
            .preset(preset)
            .inspect_err(|e| warn!(preset, error = %e, "unknown preset"))?
            .piece;
        Ok(self.record_cut(item, piece)?)
    }

    /// Parse free-text input such as `"3/8"` and add it to `item`.
    pub fn record_cut_text(&mut self, item: impl Into<ItemId>, input: &str) -> Result<CutReceipt, KitchenError> {
        let piece = parse_fraction(input).inspect_err(|e| {
            warn!(input, error = %e, "fraction input rejected");
        })?;
        Ok(self.record_cut(item, piece)?)
    }

    /// Judge the current serving against the current order.
    ///
    /// Does not end the round; see the module docs.
    pub fn evaluate(&mut self) -> EvaluationResult {
        let result = evaluate(&self.order, &self.serving);
        let success = result.is_success();
        self.phase = RoundPhase::Evaluated { success };
        info!(round = self.round, success, verdict = %result, "serving evaluated");
        result
    }

    /// Empty the serving, keeping the order.
    pub fn reset_serving(&mut self) {
        self.serving = reset_serving();
        self.phase = RoundPhase::AwaitingServing;
        debug!(round = self.round, "serving cleared");
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub fn serving(&self) -> &Serving {
        &self.serving
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Rounds started so far, counting the current one.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Pause the front end should wait after a success before calling
    /// [`OrderSession::new_round`].
    #[must_use]
    pub fn success_delay(&self) -> Duration {
        self.config.success_delay()
    }

    /// Whether the last evaluation succeeded and no new round has started.
    #[must_use]
    pub fn awaiting_next_customer(&self) -> bool {
        self.phase == RoundPhase::Evaluated { success: true }
    }

    /// RNG position, enough to reproduce every future order.
    #[must_use]
    pub fn rng_state(&self) -> KitchenRngState {
        self.rng.state()
    }
}
