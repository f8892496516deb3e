//! # BidKit Project
//!
//! Project-level aggregation for BidKit.
//! Owns the rooms and per-trade overrides, drives square footage into the
//! trade pricing engines, combines per-trade totals into a project total,
//! and flattens everything into breakdown and persistence shapes.

pub mod aggregator;
pub mod breakdown;
pub mod records;

pub use aggregator::{EstimateProject, InputMode, ManualArea};
pub use breakdown::{
    EstimateSubmission, ProjectBreakdown, RoomBreakdown, TradeBreakdown, TradeSubmission,
};
pub use records::{CustomWallRecord, LShapeRecord, OpeningRecord, RoomRecord};
