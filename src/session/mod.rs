//! Order session: customer orders, player servings and their judgement.
//!
//! - `portion`: `Order`, `Serving` and the `Portion` entries they hold
//! - `evaluate`: pure `record_cut`, `reset_serving` and `evaluate`
//! - `round`: `OrderSession`, which owns one order and one serving
//! - `feedback`: the text shown to the player

mod evaluate;
mod feedback;
mod portion;
mod round;

pub use evaluate::{evaluate, record_cut, reset_serving, EvaluationResult, ItemOutcome, ItemStatus};
pub use portion::{Order, Portion, Serving};
pub use round::{generate_order, CutReceipt, OrderSession, RoundPhase};
