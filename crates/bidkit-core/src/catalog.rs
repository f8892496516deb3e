//! Trade catalog data
//!
//! This module provides:
//! - Sheet types and coverage for the hanging trade
//! - Finish levels and joint materials for the finishing trade
//! - Standard addon catalogs per trade
//! - Hardcoded default rates used when no profile value is present
//!
//! Catalog prices are fallbacks only; a contractor profile can replace any
//! of them, and individual lines can be overridden on top of that.

use crate::types::TradeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drywall sheet types stocked by the hanging trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// 4' x 8' sheet (32 sqft)
    FourByEight,
    /// 4' x 10' sheet (40 sqft)
    FourByTen,
    /// 4' x 12' sheet (48 sqft)
    FourByTwelve,
    /// 54" x 12' sheet (54 sqft), for 9' ceilings
    FiftyFourByTwelve,
}

impl SheetKind {
    /// All sheet kinds in catalog order.
    pub const ALL: [SheetKind; 4] = [
        SheetKind::FourByEight,
        SheetKind::FourByTen,
        SheetKind::FourByTwelve,
        SheetKind::FiftyFourByTwelve,
    ];

    /// Coverage of one sheet in square feet.
    pub fn sqft_per_sheet(&self) -> f64 {
        match self {
            Self::FourByEight => 32.0,
            Self::FourByTen => 40.0,
            Self::FourByTwelve => 48.0,
            Self::FiftyFourByTwelve => 54.0,
        }
    }

    /// Fallback material cost per sheet.
    pub fn default_material_cost(&self) -> f64 {
        match self {
            Self::FourByEight => 12.50,
            Self::FourByTen => 15.60,
            Self::FourByTwelve => 18.75,
            Self::FiftyFourByTwelve => 24.00,
        }
    }

    /// Fallback labor cost per sheet hung.
    pub fn default_labor_cost(&self) -> f64 {
        match self {
            Self::FourByEight => 14.00,
            Self::FourByTen => 17.50,
            Self::FourByTwelve => 21.00,
            Self::FiftyFourByTwelve => 26.50,
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FourByEight => write!(f, "4x8"),
            Self::FourByTen => write!(f, "4x10"),
            Self::FourByTwelve => write!(f, "4x12"),
            Self::FiftyFourByTwelve => write!(f, "54\"x12"),
        }
    }
}

/// Industry finish levels for taping and finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishLevel {
    /// Tape only, no finishing
    Level0,
    /// Tape embedded in joint compound
    Level1,
    /// One coat over tape and fasteners
    Level2,
    /// Two coats, standard for texture
    Level3,
    /// Three coats, standard for flat paint
    Level4,
    /// Skim coat over entire surface
    Level5,
}

impl FinishLevel {
    /// All finish levels in ascending order.
    pub const ALL: [FinishLevel; 6] = [
        FinishLevel::Level0,
        FinishLevel::Level1,
        FinishLevel::Level2,
        FinishLevel::Level3,
        FinishLevel::Level4,
        FinishLevel::Level5,
    ];

    /// Fallback labor rate per square foot at this level.
    pub fn default_labor_rate(&self) -> f64 {
        match self {
            Self::Level0 => 0.25,
            Self::Level1 => 0.32,
            Self::Level2 => 0.42,
            Self::Level3 => 0.52,
            Self::Level4 => 0.65,
            Self::Level5 => 0.95,
        }
    }

    /// Fallback material rate per square foot at this level.
    pub fn default_material_rate(&self) -> f64 {
        match self {
            Self::Level0 => 0.03,
            Self::Level1 => 0.04,
            Self::Level2 => 0.05,
            Self::Level3 => 0.06,
            Self::Level4 => 0.08,
            Self::Level5 => 0.12,
        }
    }
}

impl fmt::Display for FinishLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level0 => write!(f, "Level 0"),
            Self::Level1 => write!(f, "Level 1"),
            Self::Level2 => write!(f, "Level 2"),
            Self::Level3 => write!(f, "Level 3"),
            Self::Level4 => write!(f, "Level 4"),
            Self::Level5 => write!(f, "Level 5"),
        }
    }
}

/// Joint materials selectable by the finishing trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointMaterial {
    /// All-purpose joint compound (per box)
    AllPurposeMud,
    /// Lightweight joint compound (per box)
    LightweightMud,
    /// Paper joint tape (per roll)
    PaperTape,
    /// Fiberglass mesh tape (per roll)
    MeshTape,
    /// Metal or vinyl corner bead (per stick)
    CornerBead,
    /// Anything not in the list
    Other,
}

impl JointMaterial {
    /// All materials in catalog order.
    pub const ALL: [JointMaterial; 6] = [
        JointMaterial::AllPurposeMud,
        JointMaterial::LightweightMud,
        JointMaterial::PaperTape,
        JointMaterial::MeshTape,
        JointMaterial::CornerBead,
        JointMaterial::Other,
    ];

    /// Fallback unit price.
    pub fn default_price(&self) -> f64 {
        match self {
            Self::AllPurposeMud => 16.50,
            Self::LightweightMud => 17.75,
            Self::PaperTape => 4.25,
            Self::MeshTape => 6.50,
            Self::CornerBead => 3.75,
            Self::Other => 10.00,
        }
    }
}

impl fmt::Display for JointMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPurposeMud => write!(f, "All-Purpose Mud"),
            Self::LightweightMud => write!(f, "Lightweight Mud"),
            Self::PaperTape => write!(f, "Paper Tape"),
            Self::MeshTape => write!(f, "Mesh Tape"),
            Self::CornerBead => write!(f, "Corner Bead"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Pricing unit for addons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonUnit {
    /// Priced per square foot
    Sqft,
    /// Priced per linear foot
    LinearFt,
    /// Priced per item
    Each,
    /// One flat charge
    Flat,
}

impl AddonUnit {
    /// Whether the default quantity should track the trade's square footage.
    pub fn tracks_sqft(&self) -> bool {
        matches!(self, Self::Sqft | Self::LinearFt)
    }
}

impl fmt::Display for AddonUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqft => write!(f, "sqft"),
            Self::LinearFt => write!(f, "linear ft"),
            Self::Each => write!(f, "each"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// A standard addon offered for one trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogAddon {
    /// Stable catalog id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Pricing unit
    pub unit: AddonUnit,
    /// Grouping for display
    pub category: &'static str,
    /// Fallback price per unit
    pub price: f64,
}

const HANGING_ADDONS: [CatalogAddon; 4] = [
    CatalogAddon {
        id: "scaffold_rental",
        name: "Scaffold Rental",
        unit: AddonUnit::Flat,
        category: "equipment",
        price: 150.00,
    },
    CatalogAddon {
        id: "debris_haul",
        name: "Debris Haul-Away",
        unit: AddonUnit::Each,
        category: "service",
        price: 125.00,
    },
    CatalogAddon {
        id: "resilient_channel",
        name: "Resilient Channel",
        unit: AddonUnit::LinearFt,
        category: "materials",
        price: 1.85,
    },
    CatalogAddon {
        id: "insulation_batts",
        name: "Insulation Batts",
        unit: AddonUnit::Sqft,
        category: "materials",
        price: 0.95,
    },
];

const FINISHING_ADDONS: [CatalogAddon; 4] = [
    CatalogAddon {
        id: "sand_and_ready",
        name: "Sand and Paint-Ready",
        unit: AddonUnit::Sqft,
        category: "labor",
        price: 0.15,
    },
    CatalogAddon {
        id: "bullnose_corners",
        name: "Bullnose Corner Upgrade",
        unit: AddonUnit::LinearFt,
        category: "materials",
        price: 0.95,
    },
    CatalogAddon {
        id: "dust_barrier",
        name: "Dust Barrier Setup",
        unit: AddonUnit::Each,
        category: "service",
        price: 85.00,
    },
    CatalogAddon {
        id: "skim_coat",
        name: "Skim Coat Existing Surface",
        unit: AddonUnit::Sqft,
        category: "labor",
        price: 0.55,
    },
];

const PAINTING_ADDONS: [CatalogAddon; 4] = [
    CatalogAddon {
        id: "ceiling_texture",
        name: "Ceiling Texture",
        unit: AddonUnit::Sqft,
        category: "labor",
        price: 0.85,
    },
    CatalogAddon {
        id: "accent_wall",
        name: "Accent Wall",
        unit: AddonUnit::Each,
        category: "labor",
        price: 95.00,
    },
    CatalogAddon {
        id: "trim_paint",
        name: "Trim and Baseboard Paint",
        unit: AddonUnit::LinearFt,
        category: "labor",
        price: 1.50,
    },
    CatalogAddon {
        id: "color_consult",
        name: "Color Consultation",
        unit: AddonUnit::Flat,
        category: "service",
        price: 75.00,
    },
];

/// The standard addon catalog for one trade.
pub fn addon_catalog(trade: TradeType) -> &'static [CatalogAddon] {
    match trade {
        TradeType::Hanging => &HANGING_ADDONS,
        TradeType::Finishing => &FINISHING_ADDONS,
        TradeType::Painting => &PAINTING_ADDONS,
    }
}

/// Look up a catalog addon by id within a trade.
pub fn find_addon(trade: TradeType, id: &str) -> Option<&'static CatalogAddon> {
    addon_catalog(trade).iter().find(|a| a.id == id)
}

fn default_addon_prices(trade: TradeType) -> Vec<(String, f64)> {
    addon_catalog(trade)
        .iter()
        .map(|a| (a.id.to_string(), a.price))
        .collect()
}

fn addon_price_from(table: &[(String, f64)], addon: &CatalogAddon) -> f64 {
    table
        .iter()
        .find(|(id, _)| id == addon.id)
        .map(|(_, p)| *p)
        .unwrap_or(addon.price)
}

/// Days an estimate stays valid when the profile does not say otherwise.
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

/// Fallback hourly labor rate for a trade.
pub fn default_hourly_rate(trade: TradeType) -> f64 {
    match trade {
        TradeType::Hanging => 55.0,
        TradeType::Finishing => 60.0,
        TradeType::Painting => 50.0,
    }
}

/// Rate defaults for the hanging trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangingRates {
    /// Material cost per sheet, by kind display name
    pub sheet_material: Vec<(SheetKind, f64)>,
    /// Labor cost per sheet hung, by kind
    pub sheet_labor: Vec<(SheetKind, f64)>,
    /// Hourly rate for direct labor
    pub hourly_rate: f64,
    /// Default waste factor (fraction, e.g. 0.10)
    pub waste_factor: f64,
    /// Addon unit prices by catalog id
    pub addon_prices: Vec<(String, f64)>,
}

impl Default for HangingRates {
    fn default() -> Self {
        Self {
            sheet_material: SheetKind::ALL
                .iter()
                .map(|k| (*k, k.default_material_cost()))
                .collect(),
            sheet_labor: SheetKind::ALL
                .iter()
                .map(|k| (*k, k.default_labor_cost()))
                .collect(),
            hourly_rate: default_hourly_rate(TradeType::Hanging),
            waste_factor: 0.10,
            addon_prices: default_addon_prices(TradeType::Hanging),
        }
    }
}

impl HangingRates {
    /// Material cost per sheet for a kind, falling back to the catalog.
    pub fn material_cost(&self, kind: SheetKind) -> f64 {
        self.sheet_material
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, c)| *c)
            .unwrap_or_else(|| kind.default_material_cost())
    }

    /// Labor cost per sheet for a kind, falling back to the catalog.
    pub fn labor_cost(&self, kind: SheetKind) -> f64 {
        self.sheet_labor
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, c)| *c)
            .unwrap_or_else(|| kind.default_labor_cost())
    }

    /// Unit price for an addon, falling back to the catalog.
    pub fn addon_price(&self, addon: &CatalogAddon) -> f64 {
        addon_price_from(&self.addon_prices, addon)
    }
}

/// Rate defaults for the finishing trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinishingRates {
    /// Hourly rate for hourly lines and direct labor
    pub hourly_rate: f64,
    /// Labor rate per linear foot (corner bead, joints)
    pub linear_ft_labor: f64,
    /// Material rate per linear foot
    pub linear_ft_material: f64,
    /// Addon unit prices by catalog id
    pub addon_prices: Vec<(String, f64)>,
}

impl Default for FinishingRates {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(TradeType::Finishing),
            linear_ft_labor: 1.25,
            linear_ft_material: 0.35,
            addon_prices: default_addon_prices(TradeType::Finishing),
        }
    }
}

impl FinishingRates {
    /// Unit price for an addon, falling back to the catalog.
    pub fn addon_price(&self, addon: &CatalogAddon) -> f64 {
        addon_price_from(&self.addon_prices, addon)
    }
}

/// Rate defaults for the painting trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintingRates {
    /// Base material (paint) cost per square foot per coat pass
    pub material_per_sqft: f64,
    /// Base labor cost per square foot per coat pass
    pub labor_per_sqft: f64,
    /// Hourly rate for direct labor
    pub hourly_rate: f64,
    /// Addon unit prices by catalog id
    pub addon_prices: Vec<(String, f64)>,
}

impl Default for PaintingRates {
    fn default() -> Self {
        Self {
            material_per_sqft: 0.35,
            labor_per_sqft: 0.55,
            hourly_rate: default_hourly_rate(TradeType::Painting),
            addon_prices: default_addon_prices(TradeType::Painting),
        }
    }
}

impl PaintingRates {
    /// Unit price for an addon, falling back to the catalog.
    pub fn addon_price(&self, addon: &CatalogAddon) -> f64 {
        addon_price_from(&self.addon_prices, addon)
    }
}

/// The full set of rate defaults the engines draw from.
///
/// A contractor profile carries one of these; absent a profile the
/// `Default` impl supplies the hardcoded catalog rates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateBook {
    pub hanging: HangingRates,
    pub finishing: FinishingRates,
    pub painting: PaintingRates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_coverage() {
        assert_eq!(SheetKind::FourByEight.sqft_per_sheet(), 32.0);
        assert_eq!(SheetKind::FiftyFourByTwelve.sqft_per_sheet(), 54.0);
    }

    #[test]
    fn test_catalog_lookup() {
        let addon = find_addon(TradeType::Hanging, "debris_haul").unwrap();
        assert_eq!(addon.unit, AddonUnit::Each);
        assert!(find_addon(TradeType::Painting, "debris_haul").is_none());
    }

    #[test]
    fn test_rate_book_fallbacks() {
        let rates = RateBook::default();
        assert_eq!(
            rates.hanging.material_cost(SheetKind::FourByEight),
            SheetKind::FourByEight.default_material_cost()
        );
        // A rate book stripped of its tables still resolves via the catalog.
        let empty = HangingRates {
            sheet_material: Vec::new(),
            sheet_labor: Vec::new(),
            ..HangingRates::default()
        };
        assert_eq!(
            empty.labor_cost(SheetKind::FourByTen),
            SheetKind::FourByTen.default_labor_cost()
        );
    }

    #[test]
    fn test_addon_price_profile_override() {
        let mut rates = PaintingRates::default();
        let consult = find_addon(TradeType::Painting, "color_consult").unwrap();
        assert_eq!(rates.addon_price(consult), consult.price);

        rates.addon_prices = vec![("color_consult".to_string(), 90.0)];
        assert_eq!(rates.addon_price(consult), 90.0);
        // Ids absent from the table resolve via the catalog.
        let accent = find_addon(TradeType::Painting, "accent_wall").unwrap();
        assert_eq!(rates.addon_price(accent), accent.price);
    }

    #[test]
    fn test_catalog_ids_unique_per_trade() {
        for trade in TradeType::ALL {
            let catalog = addon_catalog(trade);
            for (i, a) in catalog.iter().enumerate() {
                for b in &catalog[i + 1..] {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }
}
