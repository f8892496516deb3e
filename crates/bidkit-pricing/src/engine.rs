//! The common pricing-engine contract
//!
//! Each trade engine turns effective square footage, hours, and unit counts
//! into a `TradeTotals`. Mutation and recomputation are atomic from the
//! caller's perspective: every setter recomputes before returning.

use crate::addons::AddonEngine;
use crate::totals::{Complexity, TradeTotals};
use bidkit_core::{AddonId, AddonUnit, CatalogAddon, TradeType};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Square footage pushed into a trade engine by the project aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectiveSqft {
    /// Net wall area across included rooms
    pub wall_sqft: f64,
    /// Ceiling area across included rooms
    pub ceiling_sqft: f64,
    /// Net walls plus ceiling
    pub total_sqft: f64,
    /// Gross coverage (no opening deduction), used by sheet-goods trades
    pub gross_sqft: f64,
}

impl AddAssign for EffectiveSqft {
    fn add_assign(&mut self, rhs: Self) {
        self.wall_sqft += rhs.wall_sqft;
        self.ceiling_sqft += rhs.ceiling_sqft;
        self.total_sqft += rhs.total_sqft;
        self.gross_sqft += rhs.gross_sqft;
    }
}

/// Contract shared by the hanging, finishing, and painting engines.
pub trait TradePricing {
    /// The trade this engine prices.
    fn trade(&self) -> TradeType;

    /// Push effective square footage from the room system. The engine
    /// recomputes before returning.
    fn set_effective_sqft(&mut self, sqft: EffectiveSqft);

    /// The square footage last pushed in.
    fn effective_sqft(&self) -> EffectiveSqft;

    /// Recompute totals from current configuration. Idempotent.
    fn recompute(&mut self);

    /// Totals as of the last mutation.
    fn totals(&self) -> &TradeTotals;

    /// Restore the engine to its default configuration.
    fn reset(&mut self);

    /// Current complexity level.
    fn complexity(&self) -> Complexity;

    /// Set complexity and recompute.
    fn set_complexity(&mut self, complexity: Complexity);

    /// Read-only view of the addon lines.
    fn addons(&self) -> &AddonEngine;

    /// Mutable addon access for the default method implementations.
    fn addons_mut(&mut self) -> &mut AddonEngine;

    /// Hours of ad-hoc direct labor.
    fn set_direct_hours(&mut self, hours: f64);

    /// Override (or clear) the direct-labor hourly rate.
    fn set_direct_rate_override(&mut self, rate: Option<f64>);

    /// Trade-specific configuration snapshot for persistence on submit.
    fn parameters(&self) -> serde_json::Value;

    /// The square footage addon default quantities are based on.
    ///
    /// Net total for most trades; hanging overrides this to gross.
    fn addon_basis_sqft(&self) -> f64 {
        self.effective_sqft().total_sqft
    }

    /// The default unit price for a catalog addon.
    ///
    /// Engines carrying a rate book consult it here, so profile pricing
    /// lands as the line's default with any per-line override on top.
    fn addon_default_price(&self, addon: &CatalogAddon) -> f64 {
        addon.price
    }

    /// Toggle a catalog addon on or off.
    ///
    /// Default quantity: sqft/linear-ft addons start at the trade's current
    /// square footage (rounded); each/flat addons start at 1.
    fn toggle_addon(&mut self, addon: &CatalogAddon) -> bool {
        let default_qty = match addon.unit {
            AddonUnit::Sqft | AddonUnit::LinearFt => self.addon_basis_sqft().round(),
            AddonUnit::Each | AddonUnit::Flat => 1.0,
        };
        let default_price = self.addon_default_price(addon);
        let active = self.addons_mut().toggle(addon, default_qty, default_price);
        self.recompute();
        active
    }

    /// Replace an addon quantity; non-positive values are rejected.
    fn update_addon_quantity(&mut self, id: &AddonId, quantity: f64) -> bool {
        let changed = self.addons_mut().update_quantity(id, quantity);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Set or clear an addon price override.
    fn set_addon_price_override(&mut self, id: &AddonId, value: Option<f64>) -> bool {
        let changed = self.addons_mut().set_price_override(id, value);
        if changed {
            self.recompute();
        }
        changed
    }

    /// Add a user-defined addon line.
    fn add_custom_addon(
        &mut self,
        name: &str,
        price: f64,
        unit: AddonUnit,
        category: &str,
        quantity: f64,
    ) -> AddonId {
        let id = self
            .addons_mut()
            .add_custom(name, price, unit, category, quantity);
        self.recompute();
        id
    }

    /// Remove an addon line outright.
    fn remove_addon(&mut self, id: &AddonId) -> bool {
        let removed = self.addons_mut().remove(id);
        if removed {
            self.recompute();
        }
        removed
    }
}
