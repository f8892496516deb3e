//! Flattened estimate exports
//!
//! Document generation (PDF, email) consumes these shapes verbatim and
//! must never recompute pricing. Submission records additionally carry a
//! per-trade configuration snapshot for persistence.

use crate::aggregator::EstimateProject;
use bidkit_core::{RoomId, TradeType};
use bidkit_rooms::project_room;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One room as a trade's breakdown shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomBreakdown {
    pub room_id: RoomId,
    pub name: String,
    /// Effective wall sqft under this trade
    pub wall_sqft: f64,
    /// Effective ceiling sqft under this trade
    pub ceiling_sqft: f64,
    /// Effective total sqft under this trade
    pub total_sqft: f64,
    /// Room excluded from this trade
    pub excluded: bool,
}

/// One enabled trade's flattened cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeBreakdown {
    pub trade_type: TradeType,
    pub rooms: Vec<RoomBreakdown>,
    pub material_subtotal: f64,
    pub labor_subtotal: f64,
    pub addons_subtotal: f64,
    pub complexity_label: String,
    pub complexity_adjustment: f64,
    pub total: f64,
}

/// The whole project, flattened for document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    pub trades: Vec<TradeBreakdown>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// One trade's persistence payload on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSubmission {
    pub trade_type: TradeType,
    /// Trade-specific configuration snapshot
    pub parameters: serde_json::Value,
    /// Deterministic estimate: low end equals the total
    pub range_low: f64,
    /// Deterministic estimate: high end equals the total
    pub range_high: f64,
}

/// The persistence payload for a submitted estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSubmission {
    pub trades: Vec<TradeSubmission>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

impl EstimateProject {
    /// Flatten the project for document generation.
    pub fn breakdown(&self) -> ProjectBreakdown {
        self.breakdown_at(Utc::now())
    }

    /// Flatten with an explicit creation timestamp.
    pub fn breakdown_at(&self, created_at: DateTime<Utc>) -> ProjectBreakdown {
        let trades = self
            .enabled_trades()
            .filter_map(|trade| {
                let engine = self.engine(trade)?;
                let totals = engine.totals();
                let rooms = self
                    .rooms()
                    .iter()
                    .map(|room| {
                        let ovr = self.overrides().effective(room.id, trade);
                        let view = project_room(room, Some(&ovr), trade);
                        RoomBreakdown {
                            room_id: room.id,
                            name: room.name.clone(),
                            wall_sqft: view.effective_wall_sqft,
                            ceiling_sqft: view.effective_ceiling_sqft,
                            total_sqft: view.effective_total_sqft,
                            excluded: ovr.excluded,
                        }
                    })
                    .collect();
                Some(TradeBreakdown {
                    trade_type: trade,
                    rooms,
                    material_subtotal: totals.material_subtotal,
                    labor_subtotal: totals.labor_subtotal,
                    addons_subtotal: totals.addons_subtotal,
                    complexity_label: engine.complexity().label().to_string(),
                    complexity_adjustment: totals.complexity_adjustment,
                    total: totals.total,
                })
            })
            .collect();

        ProjectBreakdown {
            trades,
            total: self.combined_total(),
            created_at,
            valid_until: created_at + Duration::days(self.validity_days()),
        }
    }

    /// Snapshot the project for persistence on submit.
    pub fn submission(&self) -> EstimateSubmission {
        let created_at = Utc::now();
        let trades = self
            .enabled_trades()
            .filter_map(|trade| {
                let engine = self.engine(trade)?;
                let total = engine.totals().total;
                Some(TradeSubmission {
                    trade_type: trade,
                    parameters: engine.parameters(),
                    range_low: total,
                    range_high: total,
                })
            })
            .collect();

        EstimateSubmission {
            trades,
            total: self.combined_total(),
            created_at,
            valid_until: created_at + Duration::days(self.validity_days()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidkit_core::{Dimension, RateBook, DEFAULT_VALIDITY_DAYS};
    use bidkit_rooms::Room;

    fn sample_project() -> EstimateProject {
        let mut project = EstimateProject::new(RateBook::default());
        project.enable_trade(TradeType::Hanging);
        project.enable_trade(TradeType::Painting);
        project.add_room(Room::rectangular(
            "Bedroom",
            Dimension::feet(12),
            Dimension::feet(10),
            Dimension::feet(8),
        ));
        project
    }

    #[test]
    fn test_breakdown_matches_engine_totals() {
        let project = sample_project();
        let breakdown = project.breakdown();
        assert_eq!(breakdown.trades.len(), 2);
        let sum: f64 = breakdown.trades.iter().map(|t| t.total).sum();
        assert_eq!(sum, project.combined_total());
        assert_eq!(breakdown.total, project.combined_total());
        assert_eq!(
            breakdown.valid_until - breakdown.created_at,
            Duration::days(DEFAULT_VALIDITY_DAYS)
        );
    }

    #[test]
    fn test_breakdown_rooms_show_per_trade_view() {
        let project = sample_project();
        let breakdown = project.breakdown();
        let hanging = breakdown
            .trades
            .iter()
            .find(|t| t.trade_type == TradeType::Hanging)
            .unwrap();
        let painting = breakdown
            .trades
            .iter()
            .find(|t| t.trade_type == TradeType::Painting)
            .unwrap();
        // Hanging includes the ceiling by default; painting does not.
        assert_eq!(hanging.rooms[0].ceiling_sqft, 120.0);
        assert_eq!(painting.rooms[0].ceiling_sqft, 0.0);
    }

    #[test]
    fn test_validity_window_follows_project_setting() {
        let mut project = sample_project();
        assert!(project.set_validity_days(45));
        let breakdown = project.breakdown();
        assert_eq!(
            breakdown.valid_until - breakdown.created_at,
            Duration::days(45)
        );

        // Non-positive windows are rejected and the previous value kept.
        assert!(!project.set_validity_days(0));
        assert_eq!(project.validity_days(), 45);
        let submission = project.submission();
        assert_eq!(
            submission.valid_until - submission.created_at,
            Duration::days(45)
        );
    }

    #[test]
    fn test_submission_range_is_deterministic() {
        let project = sample_project();
        let submission = project.submission();
        for trade in &submission.trades {
            assert_eq!(trade.range_low, trade.range_high);
            assert!(trade.parameters.is_object());
        }
        let sum: f64 = submission.trades.iter().map(|t| t.range_high).sum();
        assert_eq!(sum, submission.total);
    }
}
