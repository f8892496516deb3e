//! Painting pricing engine
//!
//! Material scales by coat count and paint quality; labor scales by coat
//! count plus an additive surface-prep cost per square foot. Both are
//! computed from the wall/ceiling sqft pushed in from the room system, or
//! from direct hours when no rooms exist.

use crate::addons::AddonEngine;
use crate::engine::{EffectiveSqft, TradePricing};
use crate::totals::{Complexity, DirectHours, TradeTotals};
use bidkit_core::{clamp_non_negative, CatalogAddon, Overridable, PaintingRates, TradeType};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Number of coats applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatCount {
    /// Single coat
    One,
    /// Two coats, the typical job
    #[default]
    Two,
    /// Three coats for coverage-hungry colors
    Three,
}

impl CoatCount {
    /// Multiplier on both material and labor.
    ///
    /// Second and later coats go on faster and use less paint, so the
    /// multiplier is sublinear in the coat count.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => 1.8,
            Self::Three => 2.5,
        }
    }
}

impl fmt::Display for CoatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1 coat"),
            Self::Two => write!(f, "2 coats"),
            Self::Three => write!(f, "3 coats"),
        }
    }
}

/// Paint grade, scaling material cost only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintQuality {
    /// Builder-grade paint
    Economy,
    /// Mid-grade paint
    #[default]
    Standard,
    /// Premium paint
    Premium,
}

impl PaintQuality {
    /// Multiplier on material cost.
    pub fn material_multiplier(&self) -> f64 {
        match self {
            Self::Economy => 0.8,
            Self::Standard => 1.0,
            Self::Premium => 1.3,
        }
    }
}

impl fmt::Display for PaintQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Economy => write!(f, "Economy"),
            Self::Standard => write!(f, "Standard"),
            Self::Premium => write!(f, "Premium"),
        }
    }
}

/// Surface preparation before paint, additive on labor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfacePrep {
    /// Surface is paint-ready
    #[default]
    None,
    /// Spot patching and light sanding
    Light,
    /// Heavy patching, priming, degreasing
    Heavy,
}

impl SurfacePrep {
    /// Additional labor cost per square foot.
    pub fn labor_per_sqft(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.15,
            Self::Heavy => 0.35,
        }
    }
}

impl fmt::Display for SurfacePrep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Light => write!(f, "Light"),
            Self::Heavy => write!(f, "Heavy"),
        }
    }
}

/// Pricing engine for the painting trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintingEngine {
    rates: PaintingRates,
    sqft: EffectiveSqft,
    coats: CoatCount,
    quality: PaintQuality,
    prep: SurfacePrep,
    /// Material cost per sqft per coat pass
    material_rate: Overridable<f64>,
    /// Labor cost per sqft per coat pass
    labor_rate: Overridable<f64>,
    complexity: Complexity,
    addons: AddonEngine,
    direct: DirectHours,
    totals: TradeTotals,
}

impl PaintingEngine {
    /// Default configuration: two coats, standard quality, no prep.
    pub fn new(rates: PaintingRates) -> Self {
        let mut engine = Self {
            sqft: EffectiveSqft::default(),
            coats: CoatCount::default(),
            quality: PaintQuality::default(),
            prep: SurfacePrep::default(),
            material_rate: Overridable::new(rates.material_per_sqft),
            labor_rate: Overridable::new(rates.labor_per_sqft),
            complexity: Complexity::Standard,
            addons: AddonEngine::new(),
            direct: DirectHours::new(rates.hourly_rate),
            totals: TradeTotals::default(),
            rates,
        };
        engine.recompute();
        engine
    }

    /// Current coat count.
    pub fn coats(&self) -> CoatCount {
        self.coats
    }

    /// Set the coat count.
    pub fn set_coats(&mut self, coats: CoatCount) {
        self.coats = coats;
        self.recompute();
    }

    /// Current paint quality.
    pub fn quality(&self) -> PaintQuality {
        self.quality
    }

    /// Set the paint quality.
    pub fn set_quality(&mut self, quality: PaintQuality) {
        self.quality = quality;
        self.recompute();
    }

    /// Current surface prep level.
    pub fn prep(&self) -> SurfacePrep {
        self.prep
    }

    /// Set the surface prep level.
    pub fn set_prep(&mut self, prep: SurfacePrep) {
        self.prep = prep;
        self.recompute();
    }

    /// Override (or clear) the material rate per sqft.
    pub fn set_material_rate_override(&mut self, value: Option<f64>) {
        self.material_rate.set_override(value.map(clamp_non_negative));
        self.recompute();
    }

    /// Override (or clear) the labor rate per sqft.
    pub fn set_labor_rate_override(&mut self, value: Option<f64>) {
        self.labor_rate.set_override(value.map(clamp_non_negative));
        self.recompute();
    }

    /// Material rate per sqft in effect.
    pub fn material_rate(&self) -> &Overridable<f64> {
        &self.material_rate
    }

    /// Labor rate per sqft in effect.
    pub fn labor_rate(&self) -> &Overridable<f64> {
        &self.labor_rate
    }
}

impl TradePricing for PaintingEngine {
    fn trade(&self) -> TradeType {
        TradeType::Painting
    }

    fn set_effective_sqft(&mut self, sqft: EffectiveSqft) {
        self.sqft = sqft;
        self.recompute();
    }

    fn effective_sqft(&self) -> EffectiveSqft {
        self.sqft
    }

    fn recompute(&mut self) {
        let paint_sqft = self.sqft.total_sqft;
        let material = paint_sqft
            * self.material_rate.effective()
            * self.coats.multiplier()
            * self.quality.material_multiplier();
        let labor = paint_sqft * self.labor_rate.effective() * self.coats.multiplier()
            + paint_sqft * self.prep.labor_per_sqft()
            + self.direct.labor();

        self.totals = TradeTotals::compute(
            material,
            labor,
            self.addons.subtotal(),
            self.complexity.multiplier(TradeType::Painting),
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
            "coats": self.coats,
            "quality": self.quality,
            "surface_prep": self.prep,
            "material_rate": self.material_rate,
            "labor_rate": self.labor_rate,
            "complexity": self.complexity,
            "direct_hours": self.direct,
            "addons": self.addons.lines(),
        })
    }

    fn addon_default_price(&self, addon: &CatalogAddon) -> f64 {
        self.rates.addon_price(addon)
    }
}
