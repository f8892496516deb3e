//! Per-room per-trade overrides
//!
//! Each trade can exclude a room entirely or limit it to walls or ceiling
//! only. Overrides live in a keyed table guaranteeing at most one entry per
//! (room, trade) pair; absence of an entry means the trade's defaults apply.

use bidkit_core::{RoomId, TradeType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How one trade treats one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOverride {
    /// Room contributes nothing to this trade
    pub excluded: bool,
    /// Walls contribute to this trade's square footage
    pub include_walls: bool,
    /// Ceiling contributes to this trade's square footage
    pub include_ceiling: bool,
}

impl RoomOverride {
    /// The defaults a trade applies when no override has been created.
    ///
    /// Hanging and finishing cover ceilings by default; painting defaults
    /// to walls only.
    pub fn default_for(trade: TradeType) -> Self {
        Self {
            excluded: false,
            include_walls: true,
            include_ceiling: match trade {
                TradeType::Hanging | TradeType::Finishing => true,
                TradeType::Painting => false,
            },
        }
    }
}

/// Keyed table of room overrides: at most one entry per (room, trade).
///
/// Owned exclusively by the project aggregator; trade engines only ever see
/// the effective values through `TradeRoomView`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideStore {
    entries: HashMap<(RoomId, TradeType), RoomOverride>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored override, if one has been created for this pair.
    pub fn get(&self, room: RoomId, trade: TradeType) -> Option<&RoomOverride> {
        self.entries.get(&(room, trade))
    }

    /// The override in effect: stored entry or the trade's defaults.
    pub fn effective(&self, room: RoomId, trade: TradeType) -> RoomOverride {
        self.entries
            .get(&(room, trade))
            .copied()
            .unwrap_or_else(|| RoomOverride::default_for(trade))
    }

    /// Mutable entry, created lazily from the trade's defaults.
    pub fn entry_mut(&mut self, room: RoomId, trade: TradeType) -> &mut RoomOverride {
        self.entries
            .entry((room, trade))
            .or_insert_with(|| RoomOverride::default_for(trade))
    }

    /// Exclude or re-include a room for one trade.
    pub fn set_excluded(&mut self, room: RoomId, trade: TradeType, excluded: bool) {
        self.entry_mut(room, trade).excluded = excluded;
    }

    /// Toggle wall contribution for one trade.
    pub fn set_include_walls(&mut self, room: RoomId, trade: TradeType, include: bool) {
        self.entry_mut(room, trade).include_walls = include;
    }

    /// Toggle ceiling contribution for one trade.
    pub fn set_include_ceiling(&mut self, room: RoomId, trade: TradeType, include: bool) {
        self.entry_mut(room, trade).include_ceiling = include;
    }

    /// Drop every override for a deleted room.
    pub fn remove_room(&mut self, room: RoomId) {
        self.entries.retain(|(r, _), _| *r != room);
    }

    /// Drop overrides whose room is no longer present.
    pub fn retain_rooms<F>(&mut self, mut keep: F)
    where
        F: FnMut(RoomId) -> bool,
    {
        self.entries.retain(|(r, _), _| keep(*r));
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_differ_by_trade() {
        assert!(RoomOverride::default_for(TradeType::Hanging).include_ceiling);
        assert!(RoomOverride::default_for(TradeType::Finishing).include_ceiling);
        assert!(!RoomOverride::default_for(TradeType::Painting).include_ceiling);
    }

    #[test]
    fn test_lazy_creation_one_entry_per_pair() {
        let mut store = OverrideStore::new();
        let room = RoomId::new();
        assert!(store.get(room, TradeType::Hanging).is_none());

        store.set_excluded(room, TradeType::Hanging, true);
        store.set_include_walls(room, TradeType::Hanging, false);
        assert_eq!(store.len(), 1);

        let entry = store.get(room, TradeType::Hanging).unwrap();
        assert!(entry.excluded);
        assert!(!entry.include_walls);
        // Other trades for the same room are untouched.
        assert!(store.get(room, TradeType::Painting).is_none());
        assert!(!store.effective(room, TradeType::Painting).excluded);
    }

    #[test]
    fn test_remove_room_drops_all_trades() {
        let mut store = OverrideStore::new();
        let room = RoomId::new();
        let other = RoomId::new();
        store.set_excluded(room, TradeType::Hanging, true);
        store.set_excluded(room, TradeType::Painting, true);
        store.set_excluded(other, TradeType::Painting, true);

        store.remove_room(room);
        assert_eq!(store.len(), 1);
        assert!(store.get(other, TradeType::Painting).is_some());
    }
}
