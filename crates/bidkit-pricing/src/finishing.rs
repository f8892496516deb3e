//! Finishing (taping) pricing engine
//!
//! Cost derives from typed line items: hourly work, sqft work priced by
//! finish level, and linear-foot work (corner bead, joints). A separate
//! material-selection list adds flat quantity x price subtotals for mud,
//! tape, corner bead, and anything else.

use crate::addons::AddonEngine;
use crate::engine::{EffectiveSqft, TradePricing};
use crate::totals::{Complexity, DirectHours, TradeTotals};
use bidkit_core::{
    clamp_non_negative, CatalogAddon, EntryId, FinishLevel, FinishingRates, JointMaterial,
    Overridable, TradeType,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// What a finishing line is priced by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FinishLineKind {
    /// Quantity is hours
    Hourly,
    /// Quantity is square feet, rates set by finish level
    SqftFinish { level: FinishLevel },
    /// Quantity is linear feet
    LinearFt,
}

/// One typed finishing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishLine {
    /// Identity within the engine
    pub id: EntryId,
    /// Pricing basis
    pub kind: FinishLineKind,
    /// Hours, square feet, or linear feet depending on kind
    pub quantity: f64,
    /// Material rate per unit
    pub material_rate: Overridable<f64>,
    /// Labor rate per unit
    pub labor_rate: Overridable<f64>,
}

impl FinishLine {
    fn new(kind: FinishLineKind, rates: &FinishingRates) -> Self {
        let (material, labor) = match kind {
            FinishLineKind::Hourly => (0.0, rates.hourly_rate),
            FinishLineKind::SqftFinish { level } => {
                (level.default_material_rate(), level.default_labor_rate())
            }
            FinishLineKind::LinearFt => (rates.linear_ft_material, rates.linear_ft_labor),
        };
        Self {
            id: EntryId::new(),
            kind,
            quantity: 0.0,
            material_rate: Overridable::new(material),
            labor_rate: Overridable::new(labor),
        }
    }

    /// Whether this line's quantity tracks the trade's square footage.
    pub fn tracks_sqft(&self) -> bool {
        matches!(self.kind, FinishLineKind::SqftFinish { .. })
    }
}

/// One selected joint material, priced flat: quantity x (override ?? base).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSelection {
    /// Identity within the engine
    pub id: EntryId,
    /// Which material
    pub material: JointMaterial,
    /// Free-form label, used for `Other`
    pub name: Option<String>,
    /// Units purchased (boxes, rolls, sticks)
    pub quantity: f64,
    /// Unit price with the catalog default underneath
    pub price: Overridable<f64>,
}

impl MaterialSelection {
    /// Display label: the free-form name when present.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.material.to_string())
    }
}

/// Pricing engine for the finishing trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishingEngine {
    rates: FinishingRates,
    sqft: EffectiveSqft,
    lines: Vec<FinishLine>,
    materials: Vec<MaterialSelection>,
    complexity: Complexity,
    addons: AddonEngine,
    direct: DirectHours,
    totals: TradeTotals,
}

impl FinishingEngine {
    /// Default configuration: one Level 4 sqft line tracking room totals.
    pub fn new(rates: FinishingRates) -> Self {
        let mut engine = Self {
            sqft: EffectiveSqft::default(),
            lines: vec![FinishLine::new(
                FinishLineKind::SqftFinish {
                    level: FinishLevel::Level4,
                },
                &rates,
            )],
            materials: Vec::new(),
            complexity: Complexity::Standard,
            addons: AddonEngine::new(),
            direct: DirectHours::new(rates.hourly_rate),
            totals: TradeTotals::default(),
            rates,
        };
        engine.recompute();
        engine
    }

    /// Typed lines in insertion order.
    pub fn lines(&self) -> &[FinishLine] {
        &self.lines
    }

    /// Material selections in insertion order.
    pub fn materials(&self) -> &[MaterialSelection] {
        &self.materials
    }

    /// Add a typed line with rate defaults for its kind.
    pub fn add_line(&mut self, kind: FinishLineKind) -> EntryId {
        let mut line = FinishLine::new(kind, &self.rates);
        if line.tracks_sqft() {
            line.quantity = self.sqft.total_sqft;
        }
        let id = line.id;
        self.lines.push(line);
        self.recompute();
        id
    }

    /// Remove a typed line.
    pub fn remove_line(&mut self, id: EntryId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        let removed = self.lines.len() < before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Set a line's quantity, clamped non-negative.
    pub fn set_line_quantity(&mut self, id: EntryId, quantity: f64) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = clamp_non_negative(quantity);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Change a sqft line's finish level, updating the rate defaults while
    /// preserving any overrides on top of them.
    pub fn set_line_finish_level(&mut self, id: EntryId, level: FinishLevel) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) if line.tracks_sqft() => {
                line.kind = FinishLineKind::SqftFinish { level };
                line.material_rate.set_default(level.default_material_rate());
                line.labor_rate.set_default(level.default_labor_rate());
                self.recompute();
                true
            }
            _ => false,
        }
    }

    /// Override (or clear) a line's material rate.
    pub fn set_line_material_override(&mut self, id: EntryId, value: Option<f64>) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.material_rate.set_override(value.map(clamp_non_negative));
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Override (or clear) a line's labor rate.
    pub fn set_line_labor_override(&mut self, id: EntryId, value: Option<f64>) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.labor_rate.set_override(value.map(clamp_non_negative));
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Add a joint material selection at its catalog price.
    pub fn add_material(&mut self, material: JointMaterial, quantity: f64) -> EntryId {
        self.add_material_named(material, None, quantity)
    }

    /// Add a material selection with a free-form label (for `Other`).
    pub fn add_material_named(
        &mut self,
        material: JointMaterial,
        name: Option<String>,
        quantity: f64,
    ) -> EntryId {
        let selection = MaterialSelection {
            id: EntryId::new(),
            material,
            name,
            quantity: clamp_non_negative(quantity),
            price: Overridable::new(material.default_price()),
        };
        let id = selection.id;
        self.materials.push(selection);
        self.recompute();
        id
    }

    /// Remove a material selection.
    pub fn remove_material(&mut self, id: EntryId) -> bool {
        let before = self.materials.len();
        self.materials.retain(|m| m.id != id);
        let removed = self.materials.len() < before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Set a material selection's quantity, clamped non-negative.
    pub fn set_material_quantity(&mut self, id: EntryId, quantity: f64) -> bool {
        match self.materials.iter_mut().find(|m| m.id == id) {
            Some(selection) => {
                selection.quantity = clamp_non_negative(quantity);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Override (or clear) a material selection's unit price.
    pub fn set_material_price_override(&mut self, id: EntryId, value: Option<f64>) -> bool {
        match self.materials.iter_mut().find(|m| m.id == id) {
            Some(selection) => {
                selection.price.set_override(value.map(clamp_non_negative));
                self.recompute();
                true
            }
            None => false,
        }
    }
}

impl TradePricing for FinishingEngine {
    fn trade(&self) -> TradeType {
        TradeType::Finishing
    }

    fn set_effective_sqft(&mut self, sqft: EffectiveSqft) {
        self.sqft = sqft;
        for line in &mut self.lines {
            if line.tracks_sqft() {
                line.quantity = sqft.total_sqft;
            }
        }
        self.recompute();
    }

    fn effective_sqft(&self) -> EffectiveSqft {
        self.sqft
    }

    fn recompute(&mut self) {
        let line_material: f64 = self
            .lines
            .iter()
            .map(|l| l.material_rate.effective() * l.quantity)
            .sum();
        let line_labor: f64 = self
            .lines
            .iter()
            .map(|l| l.labor_rate.effective() * l.quantity)
            .sum();
        let selections: f64 = self
            .materials
            .iter()
            .map(|m| m.price.effective() * m.quantity)
            .sum();

        self.totals = TradeTotals::compute(
            line_material + selections,
            line_labor + self.direct.labor(),
            self.addons.subtotal(),
            self.complexity.multiplier(TradeType::Finishing),
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
            "lines": self.lines,
            "materials": self.materials,
            "complexity": self.complexity,
            "direct_hours": self.direct,
            "addons": self.addons.lines(),
        })
    }

    fn addon_default_price(&self, addon: &CatalogAddon) -> f64 {
        self.rates.addon_price(addon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_sqft(total: f64) -> FinishingEngine {
        let mut engine = FinishingEngine::new(FinishingRates::default());
        engine.set_effective_sqft(EffectiveSqft {
            wall_sqft: total,
            ceiling_sqft: 0.0,
            total_sqft: total,
            gross_sqft: total,
        });
        engine
    }

    #[test]
    fn test_sqft_line_tracks_pushed_totals() {
        let engine = engine_with_sqft(452.0);
        let line = &engine.lines()[0];
        assert_eq!(line.quantity, 452.0);
        // Level 4 defaults: 0.08 material, 0.65 labor per sqft.
        assert!((engine.totals().material_subtotal - 36.16).abs() < 1e-9);
        assert!((engine.totals().labor_subtotal - 293.8).abs() < 1e-9);
    }

    #[test]
    fn test_finish_level_change_updates_defaults_keeps_override() {
        let mut engine = engine_with_sqft(100.0);
        let id = engine.lines()[0].id;
        engine.set_line_labor_override(id, Some(1.0));
        assert!(engine.set_line_finish_level(id, FinishLevel::Level5));

        let line = &engine.lines()[0];
        assert_eq!(line.labor_rate.effective(), 1.0);
        assert_eq!(
            line.labor_rate.default_value(),
            FinishLevel::Level5.default_labor_rate()
        );
        engine.set_line_labor_override(id, None);
        assert_eq!(
            engine.lines()[0].labor_rate.effective(),
            FinishLevel::Level5.default_labor_rate()
        );
    }

    #[test]
    fn test_hourly_and_linear_lines() {
        let mut engine = engine_with_sqft(0.0);
        let base = engine.lines()[0].id;
        engine.remove_line(base);

        let hourly = engine.add_line(FinishLineKind::Hourly);
        engine.set_line_quantity(hourly, 5.0);
        let linear = engine.add_line(FinishLineKind::LinearFt);
        engine.set_line_quantity(linear, 40.0);

        let rates = FinishingRates::default();
        let expected_labor = 5.0 * rates.hourly_rate + 40.0 * rates.linear_ft_labor;
        let expected_material = 40.0 * rates.linear_ft_material;
        assert!((engine.totals().labor_subtotal - expected_labor).abs() < 1e-9);
        assert!((engine.totals().material_subtotal - expected_material).abs() < 1e-9);
    }

    #[test]
    fn test_material_selections_flat_pricing() {
        let mut engine = engine_with_sqft(0.0);
        let mud = engine.add_material(JointMaterial::AllPurposeMud, 4.0);
        engine.add_material(JointMaterial::PaperTape, 3.0);

        let expected = 4.0 * JointMaterial::AllPurposeMud.default_price()
            + 3.0 * JointMaterial::PaperTape.default_price();
        // The default Level 4 line has no quantity at zero sqft.
        assert!((engine.totals().material_subtotal - expected).abs() < 1e-9);

        engine.set_material_price_override(mud, Some(20.0));
        let overridden = 4.0 * 20.0 + 3.0 * JointMaterial::PaperTape.default_price();
        assert!((engine.totals().material_subtotal - overridden).abs() < 1e-9);

        engine.set_material_price_override(mud, None);
        assert!((engine.totals().material_subtotal - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_quantity_clamped() {
        let mut engine = engine_with_sqft(100.0);
        let id = engine.lines()[0].id;
        engine.set_line_quantity(id, -25.0);
        assert_eq!(engine.lines()[0].quantity, 0.0);
    }
}
