//! Workflow tests exercising each trade engine through the shared
//! `TradePricing` contract.

use bidkit_core::{
    find_addon, AddonUnit, FinishLevel, FinishingRates, HangingRates, JointMaterial,
    PaintingRates, SheetKind, TradeType,
};
use bidkit_pricing::{
    CoatCount, Complexity, EffectiveSqft, FinishLineKind, FinishingEngine, HangingEngine,
    PaintQuality, PaintingEngine, SurfacePrep, TradePricing,
};

fn sqft(wall: f64, ceiling: f64) -> EffectiveSqft {
    EffectiveSqft {
        wall_sqft: wall,
        ceiling_sqft: ceiling,
        total_sqft: wall + ceiling,
        gross_sqft: wall + ceiling,
    }
}

fn engines() -> Vec<Box<dyn TradePricing>> {
    vec![
        Box::new(HangingEngine::new(HangingRates::default())),
        Box::new(FinishingEngine::new(FinishingRates::default())),
        Box::new(PaintingEngine::new(PaintingRates::default())),
    ]
}

#[test]
fn test_totals_identity_holds_for_every_engine() {
    for mut engine in engines() {
        engine.set_effective_sqft(sqft(400.0, 120.0));
        engine.set_complexity(Complexity::Complex);
        let addon = &bidkit_core::addon_catalog(engine.trade())[0];
        engine.toggle_addon(addon);

        let totals = engine.totals();
        let expected = totals.material_subtotal
            + totals.labor_subtotal
            + totals.complexity_adjustment
            + totals.addons_subtotal;
        assert!(
            (totals.total - expected).abs() < 1e-9,
            "{} engine broke the totals identity",
            engine.trade()
        );
    }
}

#[test]
fn test_reset_restores_default_configuration() {
    for mut engine in engines() {
        engine.set_effective_sqft(sqft(400.0, 120.0));
        engine.set_complexity(Complexity::Complex);
        engine.set_direct_hours(6.0);
        engine.add_custom_addon("Extra", 50.0, AddonUnit::Flat, "service", 1.0);
        assert!(engine.totals().total > 0.0);

        engine.reset();
        assert_eq!(engine.complexity(), Complexity::Standard);
        assert!(engine.addons().lines().is_empty());
        assert_eq!(engine.effective_sqft(), EffectiveSqft::default());
        assert_eq!(engine.totals().total, 0.0);
    }
}

#[test]
fn test_parameters_snapshot_is_an_object_per_trade() {
    for mut engine in engines() {
        engine.set_effective_sqft(sqft(400.0, 120.0));
        let params = engine.parameters();
        assert!(params.is_object(), "{} parameters", engine.trade());
    }
}

#[test]
fn test_hanging_workflow_sheets_follow_gross() {
    let mut engine = HangingEngine::new(HangingRates::default());
    // 320 gross at 10% waste fills exactly 11 4x8 sheets.
    engine.set_effective_sqft(EffectiveSqft {
        wall_sqft: 300.0,
        ceiling_sqft: 0.0,
        total_sqft: 300.0,
        gross_sqft: 320.0,
    });

    assert_eq!(engine.sheets().len(), 1);
    assert_eq!(engine.sheets()[0].quantity, 11);
    let totals = engine.totals();
    assert!((totals.material_subtotal - 11.0 * 12.50).abs() < 1e-9);
    assert!((totals.labor_subtotal - 11.0 * 14.00).abs() < 1e-9);

    // Client-supplied board drops material but keeps labor.
    engine.set_client_supplies_all(true);
    assert_eq!(engine.totals().material_subtotal, 0.0);
    assert!((engine.totals().labor_subtotal - 11.0 * 14.00).abs() < 1e-9);
}

#[test]
fn test_hanging_addon_defaults_use_gross_basis() {
    let mut engine = HangingEngine::new(HangingRates::default());
    engine.set_effective_sqft(EffectiveSqft {
        wall_sqft: 300.0,
        ceiling_sqft: 0.0,
        total_sqft: 300.0,
        gross_sqft: 320.0,
    });

    let insulation = find_addon(TradeType::Hanging, "insulation_batts").unwrap();
    engine.toggle_addon(insulation);
    let line = &engine.addons().lines()[0];
    assert_eq!(line.quantity, 320.0);
}

#[test]
fn test_finishing_workflow_lines_and_materials() {
    let mut engine = FinishingEngine::new(FinishingRates::default());
    engine.set_effective_sqft(sqft(400.0, 0.0));

    // Seeded Level 4 line tracks the square footage.
    assert_eq!(engine.lines()[0].quantity, 400.0);
    let totals = engine.totals();
    assert!((totals.labor_subtotal - 400.0 * 0.65).abs() < 1e-9);
    assert!((totals.material_subtotal - 400.0 * 0.08).abs() < 1e-9);

    // Corner bead run plus mud boxes on top.
    let bead = engine.add_line(FinishLineKind::LinearFt);
    engine.set_line_quantity(bead, 100.0);
    engine.add_material(JointMaterial::AllPurposeMud, 2.0);

    let totals = engine.totals();
    assert!((totals.labor_subtotal - (400.0 * 0.65 + 100.0 * 1.25)).abs() < 1e-9);
    assert!(
        (totals.material_subtotal - (400.0 * 0.08 + 100.0 * 0.35 + 2.0 * 16.50)).abs() < 1e-9
    );
}

#[test]
fn test_finishing_level_change_repricing() {
    let mut engine = FinishingEngine::new(FinishingRates::default());
    engine.set_effective_sqft(sqft(400.0, 0.0));
    let id = engine.lines()[0].id;

    assert!(engine.set_line_finish_level(id, FinishLevel::Level5));
    assert!((engine.totals().labor_subtotal - 400.0 * 0.95).abs() < 1e-9);

    // An override survives the level change.
    engine.set_line_labor_override(id, Some(1.10));
    engine.set_line_finish_level(id, FinishLevel::Level3);
    assert!((engine.totals().labor_subtotal - 400.0 * 1.10).abs() < 1e-9);
    engine.set_line_labor_override(id, None);
    assert!((engine.totals().labor_subtotal - 400.0 * 0.52).abs() < 1e-9);
}

#[test]
fn test_painting_workflow_coats_quality_prep() {
    let mut engine = PaintingEngine::new(PaintingRates::default());
    engine.set_effective_sqft(sqft(400.0, 0.0));

    // Two coats by default.
    assert_eq!(engine.coats(), CoatCount::Two);
    let totals = engine.totals();
    assert!((totals.material_subtotal - 400.0 * 0.35 * 1.8).abs() < 1e-9);
    assert!((totals.labor_subtotal - 400.0 * 0.55 * 1.8).abs() < 1e-9);

    engine.set_coats(CoatCount::Three);
    engine.set_quality(PaintQuality::Premium);
    engine.set_prep(SurfacePrep::Heavy);

    let totals = engine.totals();
    assert!((totals.material_subtotal - 400.0 * 0.35 * 2.5 * 1.3).abs() < 1e-9);
    assert!((totals.labor_subtotal - (400.0 * 0.55 * 2.5 + 400.0 * 0.35)).abs() < 1e-9);
}

#[test]
fn test_complexity_adjustment_applies_before_addons() {
    let mut engine = PaintingEngine::new(PaintingRates::default());
    engine.set_effective_sqft(sqft(400.0, 0.0));
    engine.set_complexity(Complexity::Complex);

    let base = engine.totals().material_subtotal + engine.totals().labor_subtotal;
    let adjusted = engine.totals().total;
    assert!((adjusted - base * 1.25).abs() < 1e-9);

    let consult = find_addon(TradeType::Painting, "color_consult").unwrap();
    engine.toggle_addon(consult);
    assert!((engine.totals().total - (base * 1.25 + 75.0)).abs() < 1e-9);
}

#[test]
fn test_profile_addon_price_becomes_line_default() {
    let mut rates = PaintingRates::default();
    rates.addon_prices = vec![("color_consult".to_string(), 90.0)];
    let mut engine = PaintingEngine::new(rates);
    engine.set_effective_sqft(sqft(400.0, 0.0));

    let consult = find_addon(TradeType::Painting, "color_consult").unwrap();
    engine.toggle_addon(consult);
    let line = &engine.addons().lines()[0];
    assert_eq!(line.price.effective(), 90.0);
    assert!(!line.price.has_override());
    assert!((engine.totals().addons_subtotal - 90.0).abs() < 1e-9);
}

#[test]
fn test_direct_hours_priced_at_effective_rate() {
    let mut engine = FinishingEngine::new(FinishingRates::default());
    engine.set_direct_hours(4.0);
    assert!((engine.totals().labor_subtotal - 4.0 * 60.0).abs() < 1e-9);

    engine.set_direct_rate_override(Some(75.0));
    assert!((engine.totals().labor_subtotal - 4.0 * 75.0).abs() < 1e-9);

    engine.set_direct_rate_override(None);
    assert!((engine.totals().labor_subtotal - 4.0 * 60.0).abs() < 1e-9);
}

#[test]
fn test_sheet_mix_rescale_preserves_proportions() {
    let mut engine = HangingEngine::new(HangingRates::default());
    engine.set_effective_sqft(EffectiveSqft {
        gross_sqft: 640.0,
        ..EffectiveSqft::default()
    });
    engine.add_sheet_kind(SheetKind::FourByTwelve);
    engine.set_sheet_quantity(SheetKind::FourByEight, 14);
    engine.set_sheet_quantity(SheetKind::FourByTwelve, 6);

    // Doubling the area roughly doubles each kind.
    let before: Vec<u32> = engine.sheets().iter().map(|s| s.quantity).collect();
    engine.set_effective_sqft(EffectiveSqft {
        gross_sqft: 1280.0,
        ..EffectiveSqft::default()
    });
    for (line, prev) in engine.sheets().iter().zip(before) {
        assert!(
            line.quantity > prev,
            "{} did not grow on a larger project",
            line.kind
        );
    }
}
