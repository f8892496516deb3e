//! Hanging (drywall) pricing engine
//!
//! Sheet-goods estimation works on gross coverage: sheets-needed is
//! `ceil(gross x (1 + waste) / sqft-per-sheet)`. With one sheet type the
//! engine keeps the quantity in step with coverage; with several, the user
//! allocates quantities and the engine only rescales them proportionally
//! when coverage or the waste factor changes.

use crate::addons::AddonEngine;
use crate::engine::{EffectiveSqft, TradePricing};
use crate::totals::{Complexity, DirectHours, TradeTotals};
use bidkit_core::{
    clamp_non_negative, CatalogAddon, HangingRates, Overridable, SheetKind, TradeType,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// One configured sheet type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLine {
    /// Which sheet
    pub kind: SheetKind,
    /// Sheets allocated to this type
    pub quantity: u32,
    /// Material cost per sheet
    pub material_rate: Overridable<f64>,
    /// Labor cost per sheet hung
    pub labor_rate: Overridable<f64>,
    /// Client supplies this sheet's material
    pub client_supplies: bool,
}

impl SheetLine {
    fn new(kind: SheetKind, rates: &HangingRates) -> Self {
        Self {
            kind,
            quantity: 0,
            material_rate: Overridable::new(rates.material_cost(kind)),
            labor_rate: Overridable::new(rates.labor_cost(kind)),
            client_supplies: false,
        }
    }
}

/// Pricing engine for the hanging trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangingEngine {
    rates: HangingRates,
    sqft: EffectiveSqft,
    waste_factor: f64,
    /// Labor multiplier for tall ceilings; material is unaffected
    ceiling_height_factor: f64,
    /// When set, suppresses material cost for every sheet regardless of
    /// per-sheet flags; clearing it restores the per-sheet flags' effect.
    client_supplies_all: bool,
    sheets: Vec<SheetLine>,
    complexity: Complexity,
    addons: AddonEngine,
    direct: DirectHours,
    totals: TradeTotals,
}

impl HangingEngine {
    /// Default configuration: one 4x8 sheet line, profile waste factor.
    pub fn new(rates: HangingRates) -> Self {
        let mut engine = Self {
            waste_factor: clamp_non_negative(rates.waste_factor),
            sqft: EffectiveSqft::default(),
            ceiling_height_factor: 1.0,
            client_supplies_all: false,
            sheets: vec![SheetLine::new(SheetKind::FourByEight, &rates)],
            complexity: Complexity::Standard,
            addons: AddonEngine::new(),
            direct: DirectHours::new(rates.hourly_rate),
            totals: TradeTotals::default(),
            rates,
        };
        engine.recompute();
        engine
    }

    /// Configured sheet lines.
    pub fn sheets(&self) -> &[SheetLine] {
        &self.sheets
    }

    /// Current waste factor (fraction).
    pub fn waste_factor(&self) -> f64 {
        self.waste_factor
    }

    /// Sheets needed to cover the current gross square footage with one
    /// sheet type: `ceil(gross x (1 + waste) / sqft-per-sheet)`.
    pub fn sheets_needed(&self, kind: SheetKind) -> u32 {
        let coverage = self.sqft.gross_sqft * (1.0 + self.waste_factor);
        (coverage / kind.sqft_per_sheet()).ceil() as u32
    }

    /// Add a sheet type with zero quantity; the caller allocates sheets
    /// between types. No-op if the type is already configured.
    pub fn add_sheet_kind(&mut self, kind: SheetKind) {
        if self.sheets.iter().any(|s| s.kind == kind) {
            return;
        }
        self.sheets.push(SheetLine::new(kind, &self.rates));
        self.sync_sheet_quantities();
        self.recompute();
    }

    /// Remove a sheet type and its configuration.
    pub fn remove_sheet_kind(&mut self, kind: SheetKind) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|s| s.kind != kind);
        let removed = self.sheets.len() < before;
        if removed {
            self.sync_sheet_quantities();
            self.recompute();
        }
        removed
    }

    /// Set the quantity allocated to one sheet type.
    pub fn set_sheet_quantity(&mut self, kind: SheetKind, quantity: u32) -> bool {
        match self.sheets.iter_mut().find(|s| s.kind == kind) {
            Some(sheet) => {
                sheet.quantity = quantity;
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Override (or clear) material cost per sheet for one type.
    pub fn set_sheet_material_override(&mut self, kind: SheetKind, value: Option<f64>) -> bool {
        match self.sheets.iter_mut().find(|s| s.kind == kind) {
            Some(sheet) => {
                sheet.material_rate.set_override(value.map(clamp_non_negative));
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Override (or clear) labor cost per sheet for one type.
    pub fn set_sheet_labor_override(&mut self, kind: SheetKind, value: Option<f64>) -> bool {
        match self.sheets.iter_mut().find(|s| s.kind == kind) {
            Some(sheet) => {
                sheet.labor_rate.set_override(value.map(clamp_non_negative));
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Mark one sheet type as client-supplied. The sheet's configuration
    /// is kept so material cost can be restored later.
    pub fn set_sheet_client_supplies(&mut self, kind: SheetKind, client_supplies: bool) -> bool {
        match self.sheets.iter_mut().find(|s| s.kind == kind) {
            Some(sheet) => {
                sheet.client_supplies = client_supplies;
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Global client-supplies-materials flag. When set it wins over every
    /// per-sheet flag; clearing it hands control back to them.
    pub fn set_client_supplies_all(&mut self, client_supplies: bool) {
        self.client_supplies_all = client_supplies;
        self.recompute();
    }

    /// Whether the global client-supplies flag is set.
    pub fn client_supplies_all(&self) -> bool {
        self.client_supplies_all
    }

    /// Change the waste factor, rescaling existing sheet quantities
    /// proportionally to the new total.
    pub fn set_waste_factor(&mut self, waste_factor: f64) {
        self.waste_factor = clamp_non_negative(waste_factor);
        self.sync_sheet_quantities();
        self.recompute();
    }

    /// Labor multiplier for tall ceilings, clamped non-negative.
    pub fn set_ceiling_height_factor(&mut self, factor: f64) {
        self.ceiling_height_factor = clamp_non_negative(factor);
        self.recompute();
    }

    /// Current ceiling-height labor factor.
    pub fn ceiling_height_factor(&self) -> f64 {
        self.ceiling_height_factor
    }

    /// Bring sheet quantities in step with the current gross coverage.
    ///
    /// One sheet type absorbs the full new total. Several scale by
    /// `new_total / current_total`, rounded per type and floored at zero,
    /// preserving the ratio between types within rounding.
    fn sync_sheet_quantities(&mut self) {
        match self.sheets.len() {
            0 => {}
            1 => {
                let kind = self.sheets[0].kind;
                self.sheets[0].quantity = self.sheets_needed(kind);
            }
            _ => {
                let current_total: u32 = self.sheets.iter().map(|s| s.quantity).sum();
                if current_total == 0 {
                    // Nothing allocated yet; allocation is the caller's call.
                    return;
                }
                let covered: f64 = self
                    .sheets
                    .iter()
                    .map(|s| s.quantity as f64 * s.kind.sqft_per_sheet())
                    .sum();
                let avg_coverage = covered / current_total as f64;
                let needed = self.sqft.gross_sqft * (1.0 + self.waste_factor);
                let new_total = (needed / avg_coverage).ceil();
                let ratio = new_total / current_total as f64;
                debug!(current_total, new_total, "rescaling sheet quantities");
                for sheet in &mut self.sheets {
                    sheet.quantity = (sheet.quantity as f64 * ratio).round().max(0.0) as u32;
                }
            }
        }
    }
}

impl TradePricing for HangingEngine {
    fn trade(&self) -> TradeType {
        TradeType::Hanging
    }

    fn set_effective_sqft(&mut self, sqft: EffectiveSqft) {
        if self.sqft != sqft {
            self.sqft = sqft;
            self.sync_sheet_quantities();
        }
        self.recompute();
    }

    fn effective_sqft(&self) -> EffectiveSqft {
        self.sqft
    }

    fn recompute(&mut self) {
        let mut material = 0.0;
        let mut labor = 0.0;
        for sheet in &self.sheets {
            let qty = sheet.quantity as f64;
            if !(self.client_supplies_all || sheet.client_supplies) {
                material += sheet.material_rate.effective() * qty;
            }
            labor += sheet.labor_rate.effective() * qty;
        }
        labor *= self.ceiling_height_factor;
        labor += self.direct.labor();

        self.totals = TradeTotals::compute(
            material,
            labor,
            self.addons.subtotal(),
            self.complexity.multiplier(TradeType::Hanging),
        );
    }

    fn totals(&self) -> &TradeTotals {
        &self.totals
    }

    fn reset(&mut self) {
        *self = Self::new(self.rates.clone());
    }

    fn complexity(&self) -> Complexity {
        self.complexity
    }

    fn set_complexity(&mut self, complexity: Complexity) {
        self.complexity = complexity;
        self.recompute();
    }

    fn addons(&self) -> &AddonEngine {
        &self.addons
    }

    fn addons_mut(&mut self) -> &mut AddonEngine {
        &mut self.addons
    }

    fn set_direct_hours(&mut self, hours: f64) {
        self.direct.set_hours(hours);
        self.recompute();
    }

    fn set_direct_rate_override(&mut self, rate: Option<f64>) {
        self.direct.hourly_rate.set_override(rate.map(clamp_non_negative));
        self.recompute();
    }

    fn parameters(&self) -> serde_json::Value {
        json!({
            "trade": self.trade(),
            "waste_factor": self.waste_factor,
            "ceiling_height_factor": self.ceiling_height_factor,
            "client_supplies_all": self.client_supplies_all,
            "sheets": self.sheets,
            "complexity": self.complexity,
            "direct_hours": self.direct,
            "addons": self.addons.lines(),
        })
    }

    fn addon_basis_sqft(&self) -> f64 {
        self.sqft.gross_sqft
    }

    fn addon_default_price(&self, addon: &CatalogAddon) -> f64 {
        self.rates.addon_price(addon)
    }
}
