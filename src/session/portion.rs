//! Orders and servings: item-to-fraction mappings.
//!
//! ## Order
//!
//! What the customer asked for. Holds one or two items in practice, so it is
//! backed by a `SmallVec` and keeps the order items were drawn in.
//!
//! ## Serving
//!
//! What the player has prepared so far. Backed by an `im::Vector` so adding a
//! cut returns a new serving without copying the old one.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::FractionError;
use crate::core::ItemId;
use crate::fraction::Fraction;

/// An item together with a fraction of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Portion {
    pub item: ItemId,
    pub amount: Fraction,
}

impl Portion {
    pub fn new(item: impl Into<ItemId>, amount: Fraction) -> Self {
        Self {
            item: item.into(),
            amount,
        }
    }
}

/// A customer order: each item maps to exactly one target fraction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOrder")]
pub struct Order {
    portions: SmallVec<[Portion; 2]>,
}

/// Wire form of an order; repeated items are merged on load.
#[derive(Deserialize)]
struct RawOrder {
    portions: Vec<Portion>,
}

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        Order::from_portions(raw.portions)
    }
}

impl Order {
    /// Build an order. A repeated item keeps its last fraction.
    pub fn from_portions(portions: impl IntoIterator<Item = Portion>) -> Self {
        let mut order = Self::default();
        for portion in portions {
            match order.portions.iter_mut().find(|p| p.item == portion.item) {
                Some(existing) => existing.amount = portion.amount,
                None => order.portions.push(portion),
            }
        }
        order
    }

    /// Target fraction for an item, if ordered.
    #[must_use]
    pub fn get(&self, item: &str) -> Option<Fraction> {
        self.portions
            .iter()
            .find(|p| p.item.as_str() == item)
            .map(|p| p.amount)
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.get(item).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Portion> {
        self.portions.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemId> {
        self.portions.iter().map(|p| &p.item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.portions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }
}

/// The player's in-progress serving: item to accumulated fraction.
///
/// Cloning is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawServing")]
pub struct Serving {
    portions: Vector<Portion>,
}

/// Wire form of a serving; repeated items are summed on load.
#[derive(Deserialize)]
struct RawServing {
    portions: Vec<Portion>,
}

impl TryFrom<RawServing> for Serving {
    type Error = FractionError;

    fn try_from(raw: RawServing) -> Result<Self, Self::Error> {
        raw.portions
            .into_iter()
            .try_fold(Serving::new(), |serving, p| serving.with_cut(p.item, p.amount))
    }
}

impl Serving {
    /// An empty serving.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated fraction for an item, if any was served.
    #[must_use]
    pub fn get(&self, item: &str) -> Option<Fraction> {
        self.position(item).map(|i| self.portions[i].amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Portion> {
        self.portions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.portions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.portions.is_empty()
    }

    /// Return a serving with `piece` added to `item`.
    ///
    /// An item already present has its fraction replaced by the sum;
    /// otherwise the piece is inserted as-is, unsimplified.
    pub fn with_cut(&self, item: ItemId, piece: Fraction) -> Result<Self, FractionError> {
        let mut next = self.clone();
        match self.position(item.as_str()) {
            Some(i) => {
                let total = self.portions[i].amount.checked_add(piece)?;
                next.portions.set(i, Portion::new(item, total));
            }
            None => next.portions.push_back(Portion::new(item, piece)),
        }
        Ok(next)
    }

    fn position(&self, item: &str) -> Option<usize> {
        self.portions.iter().position(|p| p.item.as_str() == item)
    }
}

impl FromIterator<Portion> for Serving {
    /// Collect portions, summing repeats of the same item.
    ///
    /// # Panics
    ///
    /// Panics if a sum overflows `u64`.
    fn from_iter<I: IntoIterator<Item = Portion>>(iter: I) -> Self {
        iter.into_iter().fold(Serving::new(), |serving, p| {
            match serving.with_cut(p.item, p.amount) {
                Ok(next) => next,
                Err(e) => panic!("serving overflow: {e}"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_order_lookup_and_ordering() {
        let order = Order::from_portions([
            Portion::new("cake", frac(1, 3)),
            Portion::new("pizza", frac(1, 2)),
        ]);

        assert_eq!(order.len(), 2);
        assert_eq!(order.get("pizza"), Some(frac(1, 2)));
        assert_eq!(order.get("fries"), None);
        let items: Vec<_> = order.items().map(ItemId::as_str).collect();
        assert_eq!(items, vec!["cake", "pizza"]);
    }

    #[test]
    fn test_order_repeated_item_keeps_last() {
        let order = Order::from_portions([
            Portion::new("pizza", frac(1, 2)),
            Portion::new("pizza", frac(3, 4)),
        ]);

        assert_eq!(order.len(), 1);
        assert_eq!(order.get("pizza"), Some(frac(3, 4)));
    }

    #[test]
    fn test_with_cut_inserts_then_accumulates() {
        let empty = Serving::new();
        let one = empty.with_cut("pizza".into(), frac(2, 4)).unwrap();
        assert_eq!(one.get("pizza"), Some(frac(2, 4)));

        let two = one.with_cut("pizza".into(), frac(1, 4)).unwrap();
        assert_eq!(two.get("pizza"), Some(frac(3, 4)));
        assert_eq!(two.len(), 1);

        // Earlier servings are untouched
        assert!(empty.is_empty());
        assert_eq!(one.get("pizza"), Some(frac(2, 4)));
    }

    #[test]
    fn test_with_cut_overflow() {
        let serving = Serving::new()
            .with_cut("pizza".into(), frac(1, u64::MAX))
            .unwrap();
        assert_eq!(
            serving.with_cut("pizza".into(), frac(1, u64::MAX - 1)),
            Err(FractionError::Overflow)
        );
    }

    #[test]
    fn test_serving_from_iter_sums_repeats() {
        let serving: Serving = [
            Portion::new("fries", frac(1, 3)),
            Portion::new("cake", frac(1, 2)),
            Portion::new("fries", frac(1, 3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(serving.get("fries"), Some(frac(2, 3)));
        assert_eq!(serving.get("cake"), Some(frac(1, 2)));
        assert_eq!(serving.len(), 2);
    }

    #[test]
    fn test_serving_serde_round_trip() {
        let serving: Serving = [
            Portion::new("pizza", frac(2, 4)),
            Portion::new("cake", frac(1, 3)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&serving).unwrap();
        let loaded: Serving = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, serving);
    }

    #[test]
    fn test_serving_load_sums_repeated_items() {
        let json = r#"{"portions":[
            {"item":"pizza","amount":{"numerator":1,"denominator":4}},
            {"item":"pizza","amount":{"numerator":1,"denominator":4}}
        ]}"#;
        let serving: Serving = serde_json::from_str(json).unwrap();

        assert_eq!(serving.len(), 1);
        assert_eq!(serving.get("pizza"), Some(frac(1, 2)));
    }

    #[test]
    fn test_serving_load_rejects_overflowing_sum() {
        let json = format!(
            r#"{{"portions":[
                {{"item":"pizza","amount":{{"numerator":1,"denominator":{}}}}},
                {{"item":"pizza","amount":{{"numerator":1,"denominator":{}}}}}
            ]}}"#,
            u64::MAX,
            u64::MAX - 1
        );
        assert!(serde_json::from_str::<Serving>(&json).is_err());
    }

    #[test]
    fn test_order_serde_round_trip_and_merge() {
        let order = Order::from_portions([
            Portion::new("pizza", frac(1, 2)),
            Portion::new("fries", frac(3, 8)),
        ]);
        let json = serde_json::to_string(&order).unwrap();
        let loaded: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, order);

        let repeated = r#"{"portions":[
            {"item":"cake","amount":{"numerator":1,"denominator":3}},
            {"item":"cake","amount":{"numerator":2,"denominator":3}}
        ]}"#;
        let merged: Order = serde_json::from_str(repeated).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("cake"), Some(frac(2, 3)));
        assert!(merged.contains("cake"));
        assert!(!merged.contains("pizza"));
    }
}
