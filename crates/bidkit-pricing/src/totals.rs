//! Trade totals and complexity
//!
//! Every trade reports its cost under the same shape: material and labor
//! subtotals, an addons subtotal, and a complexity adjustment applied to
//! material + labor (addons are never complexity-adjusted).

use bidkit_core::{clamp_non_negative, Overridable, TradeType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job difficulty, scaling material + labor before addons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Easier than typical; multiplier below 1
    Simple,
    /// Typical job; multiplier of exactly 1
    #[default]
    Standard,
    /// Harder than typical; multiplier above 1
    Complex,
}

impl Complexity {
    /// The multiplier this level applies for a given trade.
    pub fn multiplier(&self, trade: TradeType) -> f64 {
        match (self, trade) {
            (Self::Standard, _) => 1.0,
            (Self::Simple, TradeType::Hanging) => 0.92,
            (Self::Complex, TradeType::Hanging) => 1.15,
            (Self::Simple, TradeType::Finishing) => 0.90,
            (Self::Complex, TradeType::Finishing) => 1.20,
            (Self::Simple, TradeType::Painting) => 0.90,
            (Self::Complex, TradeType::Painting) => 1.25,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Standard => "Standard",
            Self::Complex => "Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Cost summary for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeTotals {
    /// Material cost before complexity
    pub material_subtotal: f64,
    /// Labor cost before complexity
    pub labor_subtotal: f64,
    /// Addon lines, never complexity-adjusted
    pub addons_subtotal: f64,
    /// Multiplier applied to material + labor
    pub complexity_multiplier: f64,
    /// (material + labor) x (multiplier - 1)
    pub complexity_adjustment: f64,
    /// material + labor + adjustment + addons
    pub total: f64,
}

impl TradeTotals {
    /// Fold subtotals into a total under the complexity multiplier.
    pub fn compute(material: f64, labor: f64, addons: f64, multiplier: f64) -> Self {
        let complexity_adjustment = (material + labor) * (multiplier - 1.0);
        Self {
            material_subtotal: material,
            labor_subtotal: labor,
            addons_subtotal: addons,
            complexity_multiplier: multiplier,
            complexity_adjustment,
            total: material + labor + complexity_adjustment + addons,
        }
    }
}

/// Ad-hoc labor priced by the hour, independent of the sqft model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectHours {
    hours: f64,
    /// Hourly rate with the profile default underneath
    pub hourly_rate: Overridable<f64>,
}

impl DirectHours {
    /// No hours, default rate from the profile.
    pub fn new(default_rate: f64) -> Self {
        Self {
            hours: 0.0,
            hourly_rate: Overridable::new(default_rate),
        }
    }

    /// Hours currently entered.
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Set hours, clamped non-negative.
    pub fn set_hours(&mut self, hours: f64) {
        self.hours = clamp_non_negative(hours);
    }

    /// The flat labor term: hours x effective rate.
    pub fn labor(&self) -> f64 {
        self.hours * self.hourly_rate.effective()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_invariant() {
        let totals = TradeTotals::compute(100.0, 200.0, 50.0, 1.25);
        assert_eq!(totals.complexity_adjustment, 75.0);
        assert_eq!(
            totals.total,
            totals.material_subtotal
                + totals.labor_subtotal
                + totals.complexity_adjustment
                + totals.addons_subtotal
        );
        assert_eq!(totals.total, 425.0);
    }

    #[test]
    fn test_addons_not_complexity_adjusted() {
        let with_addons = TradeTotals::compute(100.0, 100.0, 80.0, 1.5);
        let without = TradeTotals::compute(100.0, 100.0, 0.0, 1.5);
        assert_eq!(with_addons.total - without.total, 80.0);
    }

    #[test]
    fn test_standard_multiplier_is_identity() {
        let totals = TradeTotals::compute(123.45, 67.89, 10.0, 1.0);
        assert_eq!(totals.complexity_adjustment, 0.0);
        assert_eq!(totals.total, 123.45 + 67.89 + 10.0);
    }

    #[test]
    fn test_painting_complex_multiplier() {
        assert_eq!(Complexity::Complex.multiplier(TradeType::Painting), 1.25);
        assert!(Complexity::Simple.multiplier(TradeType::Finishing) < 1.0);
        for trade in TradeType::ALL {
            assert_eq!(Complexity::Standard.multiplier(trade), 1.0);
        }
    }

    #[test]
    fn test_direct_hours() {
        let mut direct = DirectHours::new(55.0);
        assert_eq!(direct.labor(), 0.0);
        direct.set_hours(3.0);
        assert_eq!(direct.labor(), 165.0);
        direct.set_hours(-4.0);
        assert_eq!(direct.hours(), 0.0);
        direct.hourly_rate.set_override(Some(60.0));
        direct.set_hours(2.0);
        assert_eq!(direct.labor(), 120.0);
    }
}
