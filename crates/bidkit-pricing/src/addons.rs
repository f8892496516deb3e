//! Addon lines
//!
//! The toggle/quantity/price-override/custom-item mechanism shared by every
//! trade. Catalog addons keep their catalog id so toggling twice returns
//! the list to its prior state; custom addons are fully user-owned.

use bidkit_core::{clamp_non_negative, AddonId, AddonUnit, CatalogAddon, Overridable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One active addon line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonLine {
    /// Catalog id for standard addons, generated id for custom ones
    pub id: AddonId,
    /// Display name
    pub name: String,
    /// Pricing unit
    pub unit: AddonUnit,
    /// Grouping for display
    pub category: String,
    /// Quantity in the addon's unit
    pub quantity: f64,
    /// Price per unit with the catalog default underneath
    pub price: Overridable<f64>,
    /// True for user-defined addons with no catalog backing
    pub custom: bool,
}

impl AddonLine {
    /// Effective line total: (override ?? default price) x quantity.
    pub fn line_total(&self) -> f64 {
        self.price.effective() * self.quantity
    }
}

/// The set of addons active for one trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonEngine {
    lines: Vec<AddonLine>,
}

impl AddonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active addon lines in insertion order.
    pub fn lines(&self) -> &[AddonLine] {
        &self.lines
    }

    /// Whether a line with this id is active.
    pub fn is_active(&self, id: &AddonId) -> bool {
        self.lines.iter().any(|l| &l.id == id)
    }

    /// Toggle a catalog addon: add it with the default quantity and unit
    /// price if absent, remove it (dropping quantity and override) if
    /// present.
    ///
    /// Returns true when the addon is active after the call.
    pub fn toggle(&mut self, addon: &CatalogAddon, default_qty: f64, default_price: f64) -> bool {
        let id = AddonId::catalog(addon.id);
        if self.is_active(&id) {
            self.lines.retain(|l| l.id != id);
            false
        } else {
            self.lines.push(AddonLine {
                id,
                name: addon.name.to_string(),
                unit: addon.unit,
                category: addon.category.to_string(),
                quantity: clamp_non_negative(default_qty),
                price: Overridable::new(clamp_non_negative(default_price)),
                custom: false,
            });
            true
        }
    }

    /// Replace a line's quantity. Quantities of zero or less are rejected
    /// and the previous value kept; returns false for rejected or unknown.
    pub fn update_quantity(&mut self, id: &AddonId, quantity: f64) -> bool {
        if !quantity.is_finite() || quantity <= 0.0 {
            debug!(%id, quantity, "rejecting non-positive addon quantity");
            return false;
        }
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Set or clear a line's price override. `None` reverts to the default.
    /// Returns false when the id is unknown.
    pub fn set_price_override(&mut self, id: &AddonId, value: Option<f64>) -> bool {
        match self.lines.iter_mut().find(|l| &l.id == id) {
            Some(line) => {
                line.price.set_override(value.map(clamp_non_negative));
                true
            }
            None => false,
        }
    }

    /// Add a user-defined addon not present in any catalog.
    pub fn add_custom(
        &mut self,
        name: impl Into<String>,
        price: f64,
        unit: AddonUnit,
        category: impl Into<String>,
        quantity: f64,
    ) -> AddonId {
        let id = AddonId::custom();
        self.lines.push(AddonLine {
            id: id.clone(),
            name: name.into(),
            unit,
            category: category.into(),
            quantity: clamp_non_negative(quantity),
            price: Overridable::new(clamp_non_negative(price)),
            custom: true,
        });
        id
    }

    /// Remove a line outright. Returns false when the id is unknown.
    pub fn remove(&mut self, id: &AddonId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < before
    }

    /// Sum of effective line totals across standard and custom addons.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidkit_core::{addon_catalog, TradeType};

    fn debris() -> &'static CatalogAddon {
        &addon_catalog(TradeType::Hanging)[1]
    }

    #[test]
    fn test_toggle_on_then_off_restores_state() {
        let mut engine = AddonEngine::new();
        let addon = debris();
        assert!(engine.toggle(addon, 1.0, addon.price));

        let id = AddonId::catalog(addon.id);
        engine.update_quantity(&id, 3.0);
        engine.set_price_override(&id, Some(200.0));

        assert!(!engine.toggle(addon, 1.0, addon.price));
        assert!(engine.lines().is_empty());

        // Re-toggling starts from catalog defaults again.
        engine.toggle(addon, 1.0, addon.price);
        let line = &engine.lines()[0];
        assert_eq!(line.quantity, 1.0);
        assert!(!line.price.has_override());
        assert_eq!(line.price.effective(), addon.price);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut engine = AddonEngine::new();
        let addon = debris();
        engine.toggle(addon, 2.0, addon.price);
        let id = AddonId::catalog(addon.id);

        assert!(!engine.update_quantity(&id, 0.0));
        assert!(!engine.update_quantity(&id, -5.0));
        assert!(!engine.update_quantity(&id, f64::NAN));
        assert_eq!(engine.lines()[0].quantity, 2.0);
    }

    #[test]
    fn test_clearing_override_restores_catalog_price() {
        let mut engine = AddonEngine::new();
        let addon = debris();
        engine.toggle(addon, 1.0, addon.price);
        let id = AddonId::catalog(addon.id);

        engine.set_price_override(&id, Some(99.0));
        assert_eq!(engine.subtotal(), 99.0);

        engine.set_price_override(&id, None);
        assert_eq!(engine.subtotal(), addon.price);
    }

    #[test]
    fn test_custom_addon_subtotal() {
        let mut engine = AddonEngine::new();
        let id = engine.add_custom("Plastic sheeting", 45.0, AddonUnit::Each, "materials", 2.0);
        assert_eq!(engine.subtotal(), 90.0);
        assert!(engine.lines()[0].custom);
        assert!(engine.remove(&id));
        assert_eq!(engine.subtotal(), 0.0);
    }

    #[test]
    fn test_unknown_id_is_no_op() {
        let mut engine = AddonEngine::new();
        let ghost = AddonId::catalog("ghost");
        assert!(!engine.update_quantity(&ghost, 1.0));
        assert!(!engine.set_price_override(&ghost, Some(1.0)));
        assert!(!engine.remove(&ghost));
    }
}
