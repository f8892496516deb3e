//! # BidKit Rooms
//!
//! Room geometry and per-trade square footage for BidKit.
//! Rooms convert shape + dimensions + openings into derived areas; the
//! override store and trade views turn those areas into the effective
//! square footage each trade prices against.

pub mod geometry;
pub mod overrides;
pub mod room;
pub mod trade_view;

pub use geometry::{compute_areas, RoomAreas};
pub use overrides::{OverrideStore, RoomOverride};
pub use room::{Opening, OpeningPreset, OpeningSize, Room, RoomShape, WallSegment};
pub use trade_view::{project_room, TradeRoomView};
