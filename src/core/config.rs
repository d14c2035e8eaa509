//! Game configuration.
//!
//! A session is configured at startup by providing:
//! - the item catalog customers order from
//! - the denominators orders may use
//! - how many items an order holds
//! - the named cut presets offered to the player
//! - the pause between a successful serve and the next customer
//!
//! Everything has a default matching the classic pizza counter, and the
//! whole config can be loaded from TOML.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;
use super::item::ItemId;
use crate::fraction::{DenominatorSet, Fraction};

/// A named cut button: applying it adds `piece` of an item to the serving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPreset {
    /// Button name (`"half"`, `"third"`, ...).
    pub name: String,

    /// Piece added per use.
    pub piece: Fraction,
}

impl CutPreset {
    /// Create a new preset.
    pub fn new(name: impl Into<String>, piece: Fraction) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }

    fn unit(name: &str, denominator: u64) -> Self {
        Self::new(name, Fraction::from_parts(1, denominator))
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Items a customer can order.
    pub catalog: Vec<ItemId>,

    /// Denominators for ordered fractions.
    pub denominators: DenominatorSet,

    /// Fewest distinct items per order.
    pub min_items: usize,

    /// Most distinct items per order (capped by the catalog size).
    pub max_items: usize,

    /// Cut buttons.
    pub presets: Vec<CutPreset>,

    /// Pause after a successful serve before the next order, in milliseconds.
    pub success_delay_ms: u64,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            catalog: ["pizza", "fries", "burger", "salad", "cake"]
                .into_iter()
                .map(ItemId::from)
                .collect(),
            denominators: DenominatorSet::default(),
            min_items: 1,
            max_items: 2,
            presets: vec![
                CutPreset::unit("half", 2),
                CutPreset::unit("third", 3),
                CutPreset::unit("quarter", 4),
            ],
            success_delay_ms: 2000,
        }
    }
}

impl KitchenConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Replace the item catalog.
    #[must_use]
    pub fn with_catalog<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        self.catalog = items.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the denominator set.
    #[must_use]
    pub fn with_denominators(mut self, denominators: DenominatorSet) -> Self {
        self.denominators = denominators;
        self
    }

    /// Set how many distinct items an order holds.
    #[must_use]
    pub fn with_items_per_order(mut self, min: usize, max: usize) -> Self {
        self.min_items = min;
        self.max_items = max;
        self
    }

    /// Add a cut preset.
    #[must_use]
    pub fn with_preset(mut self, preset: CutPreset) -> Self {
        self.presets.push(preset);
        self
    }

    /// Set the post-success pause.
    #[must_use]
    pub fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Post-success pause as a `Duration`.
    #[must_use]
    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    /// Largest order the catalog can satisfy.
    #[must_use]
    pub fn effective_max_items(&self) -> usize {
        self.max_items.min(self.catalog.len())
    }

    /// Look up a cut preset by name.
    pub fn preset(&self, name: &str) -> Result<&CutPreset, ConfigError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Check the configuration can produce valid orders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = FxHashSet::default();
        for item in &self.catalog {
            if !seen.insert(item) {
                return Err(ConfigError::DuplicateItem(item.to_string()));
            }
        }

        let mut names = FxHashSet::default();
        for preset in &self.presets {
            if !names.insert(preset.name.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.name.clone()));
            }
        }

        if self.min_items == 0 || self.min_items > self.max_items || self.min_items > self.catalog.len() {
            return Err(ConfigError::InvalidItemRange {
                min: self.min_items,
                max: self.max_items,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KitchenConfig::default();

        assert_eq!(config.catalog.len(), 5);
        assert_eq!(config.catalog[0], ItemId::new("pizza"));
        assert_eq!(config.denominators.as_slice(), &[2, 3, 4, 5, 8, 10]);
        assert_eq!((config.min_items, config.max_items), (1, 2));
        assert_eq!(config.success_delay(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_lookup() {
        let config = KitchenConfig::default();

        assert_eq!(config.preset("half").unwrap().piece, Fraction::new(1, 2).unwrap());
        assert_eq!(config.preset("quarter").unwrap().piece, Fraction::new(1, 4).unwrap());
        assert!(matches!(
            config.preset("eighth"),
            Err(ConfigError::UnknownPreset(name)) if name == "eighth"
        ));
    }

    #[test]
    fn test_builder() {
        let config = KitchenConfig::new()
            .with_catalog(["pie"])
            .with_denominators(DenominatorSet::new(vec![6]).unwrap())
            .with_items_per_order(1, 3)
            .with_preset(CutPreset::new("sixth", Fraction::new(1, 6).unwrap()))
            .with_success_delay(Duration::from_millis(10));

        assert_eq!(config.catalog, vec![ItemId::new("pie")]);
        assert_eq!(config.effective_max_items(), 1);
        assert!(config.preset("sixth").is_ok());
        assert_eq!(config.success_delay_ms, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = KitchenConfig::new().with_catalog(Vec::<String>::new());
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyCatalog)));

        let dup = KitchenConfig::new().with_catalog(["cake", "cake"]);
        assert!(matches!(dup.validate(), Err(ConfigError::DuplicateItem(item)) if item == "cake"));

        let zero = KitchenConfig::new().with_items_per_order(0, 2);
        assert!(matches!(zero.validate(), Err(ConfigError::InvalidItemRange { .. })));

        let inverted = KitchenConfig::new().with_items_per_order(2, 1);
        assert!(matches!(inverted.validate(), Err(ConfigError::InvalidItemRange { .. })));

        let too_many = KitchenConfig::new().with_catalog(["pizza"]).with_items_per_order(2, 2);
        assert!(matches!(too_many.validate(), Err(ConfigError::InvalidItemRange { .. })));

        let twin_presets = KitchenConfig::new().with_preset(CutPreset::new("half", Fraction::new(2, 4).unwrap()));
        assert!(matches!(
            twin_presets.validate(),
            Err(ConfigError::DuplicatePreset(name)) if name == "half"
        ));
    }

    #[test]
    fn test_from_toml() {
        let config = KitchenConfig::from_toml_str(
            r#"
            catalog = ["pizza", "pie"]
            denominators = [2, 4]
            max_items = 1
            success_delay_ms = 500

            [[presets]]
            name = "half"
            piece = { numerator = 1, denominator = 2 }
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog, vec![ItemId::new("pizza"), ItemId::new("pie")]);
        assert_eq!(config.denominators.as_slice(), &[2, 4]);
        assert_eq!((config.min_items, config.max_items), (1, 1));
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.success_delay_ms, 500);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            KitchenConfig::from_toml_str("denominators = [1, 2]"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            KitchenConfig::from_toml_str("catalog = []"),
            Err(ConfigError::EmptyCatalog)
        ));
        assert!(matches!(
            KitchenConfig::from_toml_str(
                r#"
                [[presets]]
                name = "slice"
                piece = { numerator = 1, denominator = 8 }

                [[presets]]
                name = "slice"
                piece = { numerator = 1, denominator = 6 }
                "#,
            ),
            Err(ConfigError::DuplicatePreset(name)) if name == "slice"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("fraction-kitchen-missing").join("kitchen.toml");
        let err = KitchenConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("fraction-kitchen-{}.toml", std::process::id()));
        std::fs::write(&path, "catalog = [\"pie\"]\nsuccess_delay_ms = 0\n").unwrap();

        let config = KitchenConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.catalog, vec![ItemId::new("pie")]);
        assert_eq!(config.success_delay(), Duration::ZERO);
    }
}
