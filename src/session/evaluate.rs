//! Pure round operations: cutting, resetting and judging a serving.

use serde::{Deserialize, Serialize};

use super::portion::{Order, Portion, Serving};
use crate::core::error::FractionError;
use crate::core::ItemId;
use crate::fraction::Fraction;

/// Add a cut piece of `item` to a serving, returning the new serving.
///
/// The source supply is unlimited: any number of cuts of any item may be
/// added, including items the customer did not order.
pub fn record_cut(serving: &Serving, item: impl Into<ItemId>, piece: Fraction) -> Result<Serving, FractionError> {
    serving.with_cut(item.into(), piece)
}

/// An empty serving.
#[must_use]
pub fn reset_serving() -> Serving {
    Serving::new()
}

/// How one ordered item was served.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Served an equivalent fraction.
    Matched { served: Fraction },
    /// Not served at all.
    Missing,
    /// Served, but not equivalent to the order.
    Mismatched { served: Fraction },
}

/// Verdict for one ordered item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub item: ItemId,
    pub expected: Fraction,
    pub status: ItemStatus,
}

impl ItemOutcome {
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self.status, ItemStatus::Matched { .. })
    }
}

/// Itemized result of judging a serving against an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// One entry per ordered item, in order.
    pub outcomes: Vec<ItemOutcome>,
    /// Served items the customer never asked for, in serving order.
    pub extras: Vec<Portion>,
}

impl EvaluationResult {
    /// True iff every ordered item matched and nothing extra was served.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.extras.is_empty() && self.outcomes.iter().all(ItemOutcome::is_matched)
    }

    pub fn matched(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| o.is_matched())
    }

    pub fn missing(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Missing))
    }

    pub fn mismatched(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Mismatched { .. }))
    }
}

/// Judge a serving against an order using fraction equivalence.
pub fn evaluate(order: &Order, serving: &Serving) -> EvaluationResult {
    let outcomes = order
        .iter()
        .map(|ordered| {
            let status = match serving.get(ordered.item.as_str()) {
                None => ItemStatus::Missing,
                Some(served) if served.equivalent(ordered.amount) => ItemStatus::Matched { served },
                Some(served) => ItemStatus::Mismatched { served },
            };
            ItemOutcome {
                item: ordered.item.clone(),
                expected: ordered.amount,
                status,
            }
        })
        .collect();

    let extras = serving
        .iter()
        .filter(|p| !order.contains(p.item.as_str()))
        .cloned()
        .collect();

    EvaluationResult { outcomes, extras }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    fn pizza_half() -> Order {
        Order::from_portions([Portion::new("pizza", frac(1, 2))])
    }

    #[test]
    fn test_two_quarters_then_two_more_is_mismatched() {
        let order = pizza_half();
        let serving = record_cut(&reset_serving(), "pizza", frac(1, 4)).unwrap();
        let serving = record_cut(&serving, "pizza", frac(1, 4)).unwrap();
        assert!(evaluate(&order, &serving).is_success());

        let serving = record_cut(&serving, "pizza", frac(1, 4)).unwrap();
        let serving = record_cut(&serving, "pizza", frac(1, 4)).unwrap();
        assert_eq!(serving.get("pizza"), Some(frac(1, 1)));

        let result = evaluate(&order, &serving);
        assert!(!result.is_success());
        assert_eq!(
            result.outcomes[0].status,
            ItemStatus::Mismatched { served: frac(1, 1) }
        );
        assert_eq!(result.outcomes[0].expected, frac(1, 2));
    }

    #[test]
    fn test_equivalent_representation_matches() {
        let serving = record_cut(&reset_serving(), "pizza", frac(2, 4)).unwrap();
        let result = evaluate(&pizza_half(), &serving);

        assert!(result.is_success());
        assert_eq!(result.outcomes[0].status, ItemStatus::Matched { served: frac(2, 4) });
    }

    #[test]
    fn test_missing_item() {
        let order = Order::from_portions([
            Portion::new("pizza", frac(1, 2)),
            Portion::new("cake", frac(2, 3)),
        ]);
        let serving = record_cut(&reset_serving(), "pizza", frac(1, 2)).unwrap();
        let result = evaluate(&order, &serving);

        assert!(!result.is_success());
        assert_eq!(result.matched().count(), 1);
        let missing: Vec<_> = result.missing().map(|o| o.item.as_str()).collect();
        assert_eq!(missing, vec!["cake"]);
        assert_eq!(result.mismatched().count(), 0);
    }

    #[test]
    fn test_extra_item_fails_even_when_order_matched() {
        let serving = record_cut(&reset_serving(), "pizza", frac(1, 2)).unwrap();
        let serving = record_cut(&serving, "fries", frac(1, 3)).unwrap();
        let result = evaluate(&pizza_half(), &serving);

        assert!(result.outcomes.iter().all(ItemOutcome::is_matched));
        assert_eq!(result.extras, vec![Portion::new("fries", frac(1, 3))]);
        assert!(!result.is_success());
    }

    #[test]
    fn test_empty_serving_reports_every_item_missing() {
        let result = evaluate(&pizza_half(), &reset_serving());

        assert_eq!(result.missing().count(), 1);
        assert!(result.extras.is_empty());
        assert!(!result.is_success());
    }

    #[test]
    fn test_record_cut_is_pure() {
        let before = record_cut(&reset_serving(), "salad", frac(1, 5)).unwrap();
        let after = record_cut(&before, "salad", frac(1, 5)).unwrap();

        assert_eq!(before.get("salad"), Some(frac(1, 5)));
        assert_eq!(after.get("salad"), Some(frac(2, 5)));
    }
}
