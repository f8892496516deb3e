//! Project aggregation
//!
//! The project owns the rooms, the override store, and one pricing engine
//! per trade. Every mutation re-synchronizes square footage leaf-to-root:
//! geometry, then trade views, then engine sqft, then engine totals, then
//! the combined project total. Callers therefore always read totals that
//! reflect the last mutation.

use bidkit_core::{ProjectError, RateBook, Result, RoomId, TradeType, DEFAULT_VALIDITY_DAYS};
use bidkit_pricing::{
    EffectiveSqft, FinishingEngine, HangingEngine, PaintingEngine, TradePricing, TradeTotals,
};
use bidkit_rooms::{project_room, OverrideStore, Room};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Where square footage comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Square footage derived from measured rooms
    #[default]
    RoomBased,
    /// Square footage typed in directly, per trade
    ManualSqft,
}

/// Manually entered area for one trade (manual-sqft mode only).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ManualArea {
    pub wall_sqft: f64,
    pub ceiling_sqft: f64,
}

/// A multi-trade estimate in progress.
pub struct EstimateProject {
    rates: RateBook,
    input_mode: InputMode,
    rooms: Vec<Room>,
    overrides: OverrideStore,
    manual: BTreeMap<TradeType, ManualArea>,
    enabled: BTreeSet<TradeType>,
    hanging: HangingEngine,
    finishing: FinishingEngine,
    painting: PaintingEngine,
    combined_total: f64,
    validity_days: i64,
}

impl EstimateProject {
    /// An empty project in room-based mode with no trades enabled.
    pub fn new(rates: RateBook) -> Self {
        Self {
            input_mode: InputMode::RoomBased,
            rooms: Vec::new(),
            overrides: OverrideStore::new(),
            manual: BTreeMap::new(),
            enabled: BTreeSet::new(),
            hanging: HangingEngine::new(rates.hanging.clone()),
            finishing: FinishingEngine::new(rates.finishing.clone()),
            painting: PaintingEngine::new(rates.painting.clone()),
            combined_total: 0.0,
            validity_days: DEFAULT_VALIDITY_DAYS,
            rates,
        }
    }

    /// Current input mode.
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Days the estimate stays valid after creation.
    pub fn validity_days(&self) -> i64 {
        self.validity_days
    }

    /// Set the validity window, typically from the contractor profile.
    /// Non-positive values are rejected and the previous value kept.
    pub fn set_validity_days(&mut self, days: i64) -> bool {
        if days <= 0 {
            debug!(days, "rejecting non-positive validity window");
            return false;
        }
        self.validity_days = days;
        true
    }

    // ---- trade selection ----

    /// Trades currently contributing to the combined total.
    pub fn enabled_trades(&self) -> impl Iterator<Item = TradeType> + '_ {
        self.enabled.iter().copied()
    }

    /// Whether a trade is enabled.
    pub fn is_enabled(&self, trade: TradeType) -> bool {
        self.enabled.contains(&trade)
    }

    /// Enable a trade. Re-enabling restores its prior configuration and
    /// cost unchanged; nothing is reset.
    pub fn enable_trade(&mut self, trade: TradeType) {
        if self.enabled.insert(trade) {
            debug!(%trade, "trade enabled");
        }
        self.sync_sqft_to_trades();
    }

    /// Disable a trade, removing its contribution but keeping its
    /// configuration. Disabling the last remaining trade is a no-op.
    pub fn disable_trade(&mut self, trade: TradeType) -> bool {
        if self.enabled.len() == 1 && self.enabled.contains(&trade) {
            warn!(%trade, "refusing to disable the last enabled trade");
            return false;
        }
        let removed = self.enabled.remove(&trade);
        if removed {
            debug!(%trade, "trade disabled");
            self.sync_sqft_to_trades();
        }
        removed
    }

    // ---- engines ----

    /// The pricing engine for a trade, when one exists.
    pub fn engine(&self, trade: TradeType) -> Option<&dyn TradePricing> {
        match trade {
            TradeType::Hanging => Some(&self.hanging),
            TradeType::Finishing => Some(&self.finishing),
            TradeType::Painting => Some(&self.painting),
        }
    }

    /// Mutable engine access. Callers mutating configuration through this
    /// must follow with `sync_sqft_to_trades()`; the engine-level setters
    /// keep the engine itself consistent but not the combined total.
    pub fn engine_mut(&mut self, trade: TradeType) -> Option<&mut dyn TradePricing> {
        match trade {
            TradeType::Hanging => Some(&mut self.hanging),
            TradeType::Finishing => Some(&mut self.finishing),
            TradeType::Painting => Some(&mut self.painting),
        }
    }

    /// The hanging engine, for sheet-specific configuration.
    pub fn hanging(&self) -> &HangingEngine {
        &self.hanging
    }

    /// Mutable hanging engine; follow with `sync_sqft_to_trades()`.
    pub fn hanging_mut(&mut self) -> &mut HangingEngine {
        &mut self.hanging
    }

    /// The finishing engine, for line and material configuration.
    pub fn finishing(&self) -> &FinishingEngine {
        &self.finishing
    }

    /// Mutable finishing engine; follow with `sync_sqft_to_trades()`.
    pub fn finishing_mut(&mut self) -> &mut FinishingEngine {
        &mut self.finishing
    }

    /// The painting engine, for coat/quality/prep configuration.
    pub fn painting(&self) -> &PaintingEngine {
        &self.painting
    }

    /// Mutable painting engine; follow with `sync_sqft_to_trades()`.
    pub fn painting_mut(&mut self) -> &mut PaintingEngine {
        &mut self.painting
    }

    /// A trade's totals as of the last synchronization.
    pub fn trade_totals(&self, trade: TradeType) -> Option<&TradeTotals> {
        self.engine(trade).map(|e| e.totals())
    }

    // ---- room CRUD ----

    /// Rooms in sort order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Add a room at the end of the list, returning its id.
    ///
    /// Ignored in manual-sqft mode.
    pub fn add_room(&mut self, mut room: Room) -> Option<RoomId> {
        if self.input_mode != InputMode::RoomBased {
            warn!("ignoring add_room in manual-sqft mode");
            return None;
        }
        room.sort_order = self.rooms.len() as u32;
        let id = room.id;
        self.rooms.push(room);
        self.sync_sqft_to_trades();
        Some(id)
    }

    /// Mutate a room in place. The closure uses the room's own setters,
    /// which keep its derived areas current; synchronization runs after.
    pub fn update_room<F>(&mut self, id: RoomId, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Room),
    {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ProjectError::RoomNotFound { id })?;
        mutate(room);
        self.sync_sqft_to_trades();
        Ok(())
    }

    /// Remove a room and every override attached to it.
    pub fn remove_room(&mut self, id: RoomId) -> Result<()> {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        if self.rooms.len() == before {
            return Err(ProjectError::RoomNotFound { id }.into());
        }
        self.overrides.remove_room(id);
        self.resequence();
        self.sync_sqft_to_trades();
        Ok(())
    }

    /// Move a room to a new position in the list.
    pub fn reorder_room(&mut self, id: RoomId, new_index: usize) -> Result<()> {
        let from = self
            .rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or(ProjectError::RoomNotFound { id })?;
        let room = self.rooms.remove(from);
        let to = new_index.min(self.rooms.len());
        self.rooms.insert(to, room);
        self.resequence();
        // Ordering does not change totals, but the prescribed call order
        // is mutate -> sync -> read, and sync is idempotent.
        self.sync_sqft_to_trades();
        Ok(())
    }

    /// Replace the room list wholesale (load path) and resynchronize.
    /// Overrides for rooms no longer present are dropped.
    pub(crate) fn replace_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        let ids: std::collections::HashSet<RoomId> =
            self.rooms.iter().map(|r| r.id).collect();
        self.overrides.retain_rooms(|id| ids.contains(&id));
        self.resequence();
        self.sync_sqft_to_trades();
    }

    fn resequence(&mut self) {
        for (i, room) in self.rooms.iter_mut().enumerate() {
            room.sort_order = i as u32;
        }
    }

    // ---- per-trade room overrides ----

    /// Read-only view of the override store.
    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Exclude or re-include a room for one trade.
    pub fn set_room_excluded(&mut self, id: RoomId, trade: TradeType, excluded: bool) -> Result<()> {
        self.ensure_room(id)?;
        self.overrides.set_excluded(id, trade, excluded);
        self.sync_sqft_to_trades();
        Ok(())
    }

    /// Toggle a room's wall contribution for one trade.
    pub fn set_room_include_walls(
        &mut self,
        id: RoomId,
        trade: TradeType,
        include: bool,
    ) -> Result<()> {
        self.ensure_room(id)?;
        self.overrides.set_include_walls(id, trade, include);
        self.sync_sqft_to_trades();
        Ok(())
    }

    /// Toggle a room's ceiling contribution for one trade.
    pub fn set_room_include_ceiling(
        &mut self,
        id: RoomId,
        trade: TradeType,
        include: bool,
    ) -> Result<()> {
        self.ensure_room(id)?;
        self.overrides.set_include_ceiling(id, trade, include);
        self.sync_sqft_to_trades();
        Ok(())
    }

    fn ensure_room(&self, id: RoomId) -> Result<()> {
        if self.room(id).is_some() {
            Ok(())
        } else {
            Err(ProjectError::RoomNotFound { id }.into())
        }
    }

    // ---- manual mode ----

    /// Manually entered area for a trade (manual-sqft mode).
    pub fn manual_area(&self, trade: TradeType) -> ManualArea {
        self.manual.get(&trade).copied().unwrap_or_default()
    }

    /// Set a trade's manual area. Ignored in room-based mode.
    pub fn set_manual_area(&mut self, trade: TradeType, area: ManualArea) -> bool {
        if self.input_mode != InputMode::ManualSqft {
            warn!(%trade, "ignoring manual area in room-based mode");
            return false;
        }
        let clamped = ManualArea {
            wall_sqft: area.wall_sqft.max(0.0),
            ceiling_sqft: area.ceiling_sqft.max(0.0),
        };
        self.manual.insert(trade, clamped);
        self.sync_sqft_to_trades();
        true
    }

    /// Switch input modes. Deliberately destructive: leaving room mode
    /// clears room data, leaving manual mode clears the manual fields, and
    /// every engine resets to its default configuration. There is no
    /// reconciliation between the two input models.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        if mode == self.input_mode {
            return;
        }
        info!(?mode, "switching input mode; clearing prior input");
        match self.input_mode {
            InputMode::RoomBased => {
                self.rooms.clear();
                self.overrides.clear();
            }
            InputMode::ManualSqft => {
                self.manual.clear();
            }
        }
        self.input_mode = mode;
        self.hanging.reset();
        self.finishing.reset();
        self.painting.reset();
        self.sync_sqft_to_trades();
    }

    // ---- synchronization ----

    /// Push effective square footage into each enabled trade's engine and
    /// recompute the combined total. Idempotent; safe to call redundantly.
    pub fn sync_sqft_to_trades(&mut self) {
        for trade in TradeType::ALL {
            if !self.enabled.contains(&trade) {
                continue;
            }
            let sqft = self.effective_sqft_for(trade);
            if let Some(engine) = self.engine_mut(trade) {
                engine.set_effective_sqft(sqft);
            }
        }
        self.combined_total = TradeType::ALL
            .iter()
            .filter(|t| self.enabled.contains(t))
            .filter_map(|t| self.engine(*t))
            .map(|e| e.totals().total)
            .sum();
    }

    /// The square footage one trade sees across the whole project.
    pub fn effective_sqft_for(&self, trade: TradeType) -> EffectiveSqft {
        match self.input_mode {
            InputMode::RoomBased => {
                let mut sum = EffectiveSqft::default();
                for room in &self.rooms {
                    let view = project_room(room, self.overrides.get(room.id, trade), trade);
                    sum += EffectiveSqft {
                        wall_sqft: view.effective_wall_sqft,
                        ceiling_sqft: view.effective_ceiling_sqft,
                        total_sqft: view.effective_total_sqft,
                        gross_sqft: view.gross_total_sqft,
                    };
                }
                sum
            }
            InputMode::ManualSqft => {
                let area = self.manual_area(trade);
                EffectiveSqft {
                    wall_sqft: area.wall_sqft,
                    ceiling_sqft: area.ceiling_sqft,
                    total_sqft: area.wall_sqft + area.ceiling_sqft,
                    gross_sqft: area.wall_sqft + area.ceiling_sqft,
                }
            }
        }
    }

    /// Sum of enabled trades' totals, current as of the last mutation.
    pub fn combined_total(&self) -> f64 {
        self.combined_total
    }

    /// The rate book this project was created with.
    pub fn rates(&self) -> &RateBook {
        &self.rates
    }
}
