//! # BidKit
//!
//! An estimation engine for drywall contractors covering the three trades of
//! a wallboard job:
//! - Hanging (sheet goods, waste, allocation between sheet types)
//! - Finishing (taping, finish levels, joint materials)
//! - Painting (coats, paint quality, surface prep)
//!
//! ## Architecture
//!
//! BidKit is organized as a workspace with multiple crates:
//!
//! 1. **bidkit-core** - Units, identifiers, errors, catalog data, rate book
//! 2. **bidkit-rooms** - Room geometry, openings, per-trade overrides
//! 3. **bidkit-pricing** - One pricing engine per trade plus shared addons
//! 4. **bidkit-project** - Multi-trade aggregation, breakdowns, records
//! 5. **bidkit-profile** - Contractor profile and rate persistence
//!
//! ## Features
//!
//! - **Room-based takeoff**: rectangular, L-shaped, and custom rooms with
//!   doors and windows deducted from net wall area
//! - **Manual square footage**: direct per-trade entry without rooms
//! - **Per-trade room control**: exclude a room or limit it to walls or
//!   ceiling for one trade without touching the others
//! - **Layered pricing**: catalog defaults under profile rates under
//!   per-line overrides
//! - **Exports**: client-facing breakdowns and submission payloads

pub use bidkit_core::{
    addon_catalog, clamp_non_negative, default_hourly_rate, find_addon, from_decimal_feet,
    inches_to_sqft, parse_non_negative, AddonId, AddonUnit, CatalogAddon, Dimension, EntryId,
    Error, FinishLevel, FinishingRates, HangingRates, JointMaterial, OpeningId, Overridable,
    PaintingRates, ProfileError, ProjectError, RateBook, Result, RoomId, SheetKind, TradeType,
    DEFAULT_VALIDITY_DAYS,
};

pub use bidkit_rooms::{
    compute_areas, project_room, Opening, OpeningPreset, OpeningSize, OverrideStore, Room,
    RoomAreas, RoomOverride, RoomShape, TradeRoomView, WallSegment,
};

pub use bidkit_pricing::{
    AddonEngine, AddonLine, CoatCount, Complexity, DirectHours, EffectiveSqft, FinishLine,
    FinishLineKind, FinishingEngine, HangingEngine, MaterialSelection, PaintQuality,
    PaintingEngine, SheetLine, SurfacePrep, TradePricing, TradeTotals,
};

pub use bidkit_project::{
    CustomWallRecord, EstimateProject, EstimateSubmission, InputMode, LShapeRecord, ManualArea,
    OpeningRecord, ProjectBreakdown, RoomBreakdown, RoomRecord, TradeBreakdown, TradeSubmission,
};

pub use bidkit_profile::{CompanyInfo, ContractorProfile, ProfileStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_facade_builds_a_project() {
        let mut project = EstimateProject::new(RateBook::default());
        project.enable_trade(TradeType::Hanging);
        project.add_room(Room::rectangular(
            "Office",
            Dimension::feet(10),
            Dimension::feet(10),
            Dimension::feet(8),
        ));
        assert!(project.combined_total() > 0.0);
    }

    #[test]
    fn test_profile_validity_flows_to_breakdown() {
        let mut profile = ContractorProfile::default();
        profile.estimate_validity_days = 45;

        let mut project = EstimateProject::new(profile.rates.clone());
        project.enable_trade(TradeType::Painting);
        project.set_validity_days(profile.estimate_validity_days);

        let breakdown = project.breakdown();
        assert_eq!((breakdown.valid_until - breakdown.created_at).num_days(), 45);
    }
}
