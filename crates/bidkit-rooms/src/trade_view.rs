//! Trade room views
//!
//! A `TradeRoomView` is the read-only projection of a room as one trade
//! sees it: include/exclude flags applied, openings deducted for net
//! figures, and a gross figure (no deduction) for sheet-goods estimation.
//! Views are always recomputed, never persisted.

use crate::overrides::RoomOverride;
use crate::room::Room;
use bidkit_core::TradeType;
use serde::{Deserialize, Serialize};

/// Effective square footage of one room under one trade.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradeRoomView {
    /// Net wall area after override and opening deduction
    pub effective_wall_sqft: f64,
    /// Ceiling area after override
    pub effective_ceiling_sqft: f64,
    /// Net walls plus ceiling
    pub effective_total_sqft: f64,
    /// Walls plus ceiling with no opening deduction.
    ///
    /// Sheet-goods estimation (hanging) is conventionally done on gross
    /// coverage; other trades ignore this field.
    pub gross_total_sqft: f64,
}

/// Project a room through one trade's override.
///
/// `override_entry` of `None` applies the trade's defaults.
pub fn project_room(
    room: &Room,
    override_entry: Option<&RoomOverride>,
    trade: TradeType,
) -> TradeRoomView {
    let ovr = override_entry
        .copied()
        .unwrap_or_else(|| RoomOverride::default_for(trade));

    if ovr.excluded {
        // Raw room fields stay visible for display; only the effective
        // contribution drops to zero.
        return TradeRoomView::default();
    }

    let areas = room.areas();
    let wall = if ovr.include_walls {
        areas.net_wall_sqft()
    } else {
        0.0
    };
    let gross_wall = if ovr.include_walls { areas.wall_sqft } else { 0.0 };
    let ceiling = if ovr.include_ceiling {
        areas.ceiling_sqft
    } else {
        0.0
    };

    TradeRoomView {
        effective_wall_sqft: wall,
        effective_ceiling_sqft: ceiling,
        effective_total_sqft: wall + ceiling,
        gross_total_sqft: gross_wall + ceiling,
    }
}
