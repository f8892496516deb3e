//! # BidKit Core
//!
//! Core types, units, and catalog data for BidKit.
//! Provides the fundamental building blocks shared by the room, pricing,
//! and project crates: identity types, feet/inches unit conversion, the
//! override-vs-default wrapper, error types, and trade catalog data.

pub mod catalog;
pub mod error;
pub mod overridable;
pub mod types;
pub mod units;

pub use catalog::{
    addon_catalog, default_hourly_rate, find_addon, AddonUnit, CatalogAddon, FinishLevel,
    FinishingRates, HangingRates, JointMaterial, PaintingRates, RateBook, SheetKind,
    DEFAULT_VALIDITY_DAYS,
};

pub use error::{Error, ProfileError, ProjectError, Result};

pub use overridable::Overridable;

pub use types::{AddonId, EntryId, OpeningId, RoomId, TradeType};

pub use units::{
    clamp_non_negative, from_decimal_feet, inches_to_sqft, parse_non_negative, Dimension,
};
