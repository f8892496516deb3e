//! # BidKit Pricing
//!
//! Trade pricing engines for BidKit.
//! One engine per trade (hanging, finishing, painting) behind a common
//! `TradePricing` contract, plus the shared addon mechanism and the
//! totals/complexity model every trade reports under.

pub mod addons;
pub mod engine;
pub mod finishing;
pub mod hanging;
pub mod painting;
pub mod totals;

pub use addons::{AddonEngine, AddonLine};
pub use engine::{EffectiveSqft, TradePricing};
pub use finishing::{FinishLine, FinishLineKind, FinishingEngine, MaterialSelection};
pub use hanging::{HangingEngine, SheetLine};
pub use painting::{CoatCount, PaintQuality, PaintingEngine, SurfacePrep};
pub use totals::{Complexity, DirectHours, TradeTotals};
