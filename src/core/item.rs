//! Food item identifiers.

use serde::{Deserialize, Serialize};

/// Name of a food item on the menu (`"pizza"`, `"fries"`, ...).
///
/// The engine never interprets item names; they are compared for equality
/// and shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the item name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ItemId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::borrow::Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id() {
        let pizza = ItemId::new("pizza");
        assert_eq!(pizza.as_str(), "pizza");
        assert_eq!(format!("{}", pizza), "pizza");
        assert_eq!(pizza, ItemId::from("pizza"));
        assert_ne!(pizza, ItemId::from("cake"));
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let json = serde_json::to_string(&ItemId::new("fries")).unwrap();
        assert_eq!(json, r#""fries""#);
    }
}
