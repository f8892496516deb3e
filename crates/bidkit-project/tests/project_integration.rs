//! Integration tests for the full estimation pipeline: rooms through
//! trade engines to the combined project total.

use bidkit_core::{addon_catalog, Dimension, RateBook, TradeType};
use bidkit_pricing::{Complexity, TradePricing};
use bidkit_project::{EstimateProject, InputMode, ManualArea, RoomRecord};
use bidkit_rooms::{Opening, OpeningPreset, Room};

fn bedroom() -> Room {
    let mut room = Room::rectangular(
        "Bedroom",
        Dimension::feet(12),
        Dimension::feet(10),
        Dimension::feet(8),
    );
    room.add_door(Opening::preset(OpeningPreset::Door36, 1));
    room
}

fn three_trade_project() -> EstimateProject {
    let mut project = EstimateProject::new(RateBook::default());
    for trade in TradeType::ALL {
        project.enable_trade(trade);
    }
    project.add_room(bedroom());
    project
}

#[test]
fn test_combined_total_is_sum_of_enabled_trades() {
    let project = three_trade_project();
    let sum: f64 = TradeType::ALL
        .iter()
        .map(|t| project.trade_totals(*t).unwrap().total)
        .sum();
    assert!((project.combined_total() - sum).abs() < 1e-9);
}

#[test]
fn test_disable_removes_exactly_its_contribution() {
    let mut project = three_trade_project();
    let combined = project.combined_total();
    let painting_total = project.trade_totals(TradeType::Painting).unwrap().total;
    assert!(painting_total > 0.0);

    assert!(project.disable_trade(TradeType::Painting));
    assert!((project.combined_total() - (combined - painting_total)).abs() < 1e-9);
}

#[test]
fn test_reenable_restores_prior_configuration_total() {
    let mut project = three_trade_project();
    project.painting_mut().set_complexity(Complexity::Complex);
    project.sync_sqft_to_trades();
    let painting_total = project.trade_totals(TradeType::Painting).unwrap().total;
    let combined = project.combined_total();

    project.disable_trade(TradeType::Painting);
    project.enable_trade(TradeType::Painting);

    assert_eq!(
        project.trade_totals(TradeType::Painting).unwrap().total,
        painting_total
    );
    assert!((project.combined_total() - combined).abs() < 1e-9);
    assert_eq!(project.painting().complexity(), Complexity::Complex);
}

#[test]
fn test_room_edit_flows_through_to_totals() {
    let mut project = three_trade_project();
    let id = project.rooms()[0].id;
    let before = project.combined_total();

    project
        .update_room(id, |room| {
            room.set_height(Dimension::feet(10));
        })
        .unwrap();

    assert!(project.combined_total() > before);
    // 2 x (12 + 10) x 10 gross walls.
    assert_eq!(project.rooms()[0].areas().wall_sqft, 440.0);
}

#[test]
fn test_removing_room_zeroes_sqft_contributions() {
    let mut project = three_trade_project();
    let id = project.rooms()[0].id;
    project.remove_room(id).unwrap();

    for trade in TradeType::ALL {
        let engine = project.engine(trade).unwrap();
        assert_eq!(engine.effective_sqft().total_sqft, 0.0);
    }
}

#[test]
fn test_addons_contribute_after_complexity() {
    let mut project = three_trade_project();
    let addon = &addon_catalog(TradeType::Painting)[3];
    let before = project.trade_totals(TradeType::Painting).unwrap().total;

    project.painting_mut().toggle_addon(addon);
    project.sync_sqft_to_trades();

    let totals = project.trade_totals(TradeType::Painting).unwrap();
    assert!((totals.total - (before + addon.price)).abs() < 1e-9);
    assert!(
        (totals.total
            - (totals.material_subtotal
                + totals.labor_subtotal
                + totals.complexity_adjustment
                + totals.addons_subtotal))
            .abs()
            < 1e-9
    );
}

#[test]
fn test_manual_mode_round_trip() {
    let mut project = three_trade_project();
    project.set_input_mode(InputMode::ManualSqft);
    assert!(project.rooms().is_empty());

    project.set_manual_area(
        TradeType::Hanging,
        ManualArea {
            wall_sqft: 400.0,
            ceiling_sqft: 120.0,
        },
    );
    assert_eq!(
        project.engine(TradeType::Hanging).unwrap().effective_sqft().gross_sqft,
        520.0
    );
    assert!(project.combined_total() > 0.0);

    // Adding rooms is a room-mode operation.
    assert!(project.add_room(bedroom()).is_none());
}

#[test]
fn test_record_import_export_round_trip() {
    let mut project = three_trade_project();
    project.add_room(Room::rectangular(
        "Kitchen",
        Dimension::feet(14),
        Dimension::feet(12),
        Dimension::new(8, 6),
    ));
    let combined = project.combined_total();

    let records: Vec<RoomRecord> = project.export_rooms();
    assert_eq!(records.len(), 2);

    let mut restored = EstimateProject::new(RateBook::default());
    for trade in TradeType::ALL {
        restored.enable_trade(trade);
    }
    restored.import_rooms(&records).unwrap();

    assert_eq!(restored.rooms().len(), 2);
    assert!((restored.combined_total() - combined).abs() < 1e-9);
}

#[test]
fn test_exclusion_only_affects_that_trade() {
    let mut project = three_trade_project();
    let id = project.rooms()[0].id;
    let hanging_before = project.trade_totals(TradeType::Hanging).unwrap().total;

    project
        .set_room_excluded(id, TradeType::Finishing, true)
        .unwrap();

    assert_eq!(project.trade_totals(TradeType::Finishing).unwrap().total, 0.0);
    assert_eq!(
        project.trade_totals(TradeType::Hanging).unwrap().total,
        hanging_before
    );
}
