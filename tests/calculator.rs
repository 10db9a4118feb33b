//! 혼합유 계산/검증 회귀 테스트.
use two_stroke_mix::mix::{
    oil_milliliters, CalculatorState, MixError, Mode, RATIO_MAX, RATIO_MIN,
};
use two_stroke_mix::presets::PresetCatalog;

fn state_with(fuel: &str, mode: Mode, custom: &str) -> (PresetCatalog, CalculatorState) {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    assert!(state.edit_fuel(fuel));
    assert!(state.edit_custom_ratio(custom));
    state.set_mode(mode);
    (catalog, state)
}

#[test]
fn five_liters_trabant_needs_100_ml() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.select_preset("trabant-50");
    let outcome = state.evaluate(&catalog);
    assert_eq!(outcome.error, None);
    let result = outcome.result().expect("valid result");
    assert_eq!(result.oil_ml, 100.0);
    assert_eq!(result.rounded_ml, 100.0);
}

#[test]
fn one_liter_custom_25_needs_40_ml() {
    let (catalog, state) = state_with("1", Mode::Custom, "25");
    let result = state.evaluate(&catalog).result().expect("valid result");
    assert_eq!(result.oil_ml, 40.0);
    assert_eq!(result.ratio, 25.0);
}

#[test]
fn formula_is_exact_for_positive_inputs() {
    for liters in [0.1, 0.75, 2.5, 5.0, 7.3, 12.0, 20.0] {
        for ratio in [1.0, 10.0, 25.0, 33.0, 40.0, 50.0, 77.0, 200.0, 500.0] {
            assert_eq!(oil_milliliters(liters, ratio), Some(liters * 1000.0 / ratio));
        }
    }
}

#[test]
fn non_positive_or_non_finite_inputs_have_no_result() {
    assert_eq!(oil_milliliters(0.0, 50.0), None);
    assert_eq!(oil_milliliters(-1.0, 50.0), None);
    assert_eq!(oil_milliliters(5.0, 0.0), None);
    assert_eq!(oil_milliliters(f64::NAN, 50.0), None);
    assert_eq!(oil_milliliters(5.0, f64::INFINITY), None);
}

#[test]
fn rounding_at_half_goes_up() {
    // 1000 / 16 = 62.5, 500 / 40 = 12.5
    let (catalog, state) = state_with("1", Mode::Custom, "16");
    let result = state.evaluate(&catalog).result().unwrap();
    assert_eq!(result.oil_ml, 62.5);
    assert_eq!(result.rounded_ml, 63.0);

    let (catalog, state) = state_with("0.5", Mode::Custom, "40");
    let result = state.evaluate(&catalog).result().unwrap();
    assert_eq!(result.oil_ml, 12.5);
    assert_eq!(result.rounded_ml, 13.0);

    let (catalog, state) = state_with("1", Mode::Custom, "33");
    let result = state.evaluate(&catalog).result().unwrap();
    assert_eq!(result.rounded_ml, 30.0);
}

#[test]
fn zero_fuel_is_non_positive() {
    let (catalog, state) = state_with("0", Mode::Preset, "50");
    let outcome = state.evaluate(&catalog);
    assert_eq!(outcome.error, Some(MixError::FuelNonPositive));
    assert!(outcome.result().is_none());
}

#[test]
fn empty_or_unparsable_fuel_is_missing() {
    for fuel in ["", ".", "0.", "00"] {
        let (catalog, state) = state_with(fuel, Mode::Preset, "50");
        let expected = if fuel == "0." || fuel == "00" {
            MixError::FuelNonPositive
        } else {
            MixError::FuelMissing
        };
        assert_eq!(state.evaluate(&catalog).error, Some(expected), "fuel={fuel:?}");
    }
}

#[test]
fn fuel_missing_outranks_ratio_missing() {
    let (catalog, state) = state_with("", Mode::Custom, "");
    assert_eq!(state.evaluate(&catalog).error, Some(MixError::FuelMissing));
    let (catalog, state) = state_with("0", Mode::Custom, "");
    assert_eq!(state.evaluate(&catalog).error, Some(MixError::FuelNonPositive));
}

#[test]
fn blank_custom_ratio_is_missing() {
    let (catalog, state) = state_with("5", Mode::Custom, "");
    let outcome = state.evaluate(&catalog);
    assert_eq!(outcome.error, Some(MixError::RatioMissing));
    assert_eq!(outcome.ratio, None);
}

#[test]
fn ratio_outside_band_is_range_error() {
    for custom in ["0", "5", "9", "201", "1000"] {
        let (catalog, state) = state_with("5", Mode::Custom, custom);
        assert_eq!(
            state.evaluate(&catalog).error,
            Some(MixError::RatioRange),
            "custom={custom}"
        );
    }
}

#[test]
fn band_edges_are_inclusive() {
    for custom in [RATIO_MIN, RATIO_MAX] {
        let (catalog, state) = state_with("5", Mode::Custom, &custom.to_string());
        assert_eq!(state.evaluate(&catalog).error, None);
    }
    let (catalog, state) = state_with("5", Mode::Custom, "200");
    assert_eq!(state.evaluate(&catalog).result().unwrap().oil_ml, 25.0);
}

#[test]
fn unknown_preset_falls_back_to_fifty() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.select_preset("does-not-exist");
    let outcome = state.evaluate(&catalog);
    assert_eq!(outcome.ratio, Some(50.0));
    assert_eq!(outcome.result().unwrap().oil_ml, 100.0);
}

#[test]
fn selecting_preset_uses_its_ratio() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    for p in catalog.presets() {
        state.select_preset(&p.id);
        assert_eq!(state.evaluate(&catalog).ratio, Some(f64::from(p.x)));
    }
}

#[test]
fn switching_mode_keeps_custom_text() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.set_mode(Mode::Custom);
    assert!(state.edit_custom_ratio("42"));
    state.set_mode(Mode::Preset);
    assert_eq!(state.evaluate(&catalog).ratio, Some(50.0));
    state.set_mode(Mode::Custom);
    assert_eq!(state.custom_ratio_input, "42");
    assert_eq!(state.evaluate(&catalog).ratio, Some(42.0));
}

#[test]
fn reset_restores_defaults() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.edit_fuel("12.5");
    state.set_mode(Mode::Custom);
    state.select_preset("mz-33");
    state.edit_custom_ratio("");
    state.reset(&catalog);
    assert_eq!(state.fuel_input, "5");
    assert_eq!(state.mode, Mode::Preset);
    assert_eq!(state.selected_preset_id, catalog.presets()[0].id);
    assert_eq!(state.custom_ratio_input, "50");
}

#[test]
fn decimal_comma_is_normalized() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    assert!(state.edit_fuel("2,5"));
    assert_eq!(state.fuel_input, "2.5");
    assert_eq!(state.evaluate(&catalog).result().unwrap().oil_ml, 50.0);
}

#[test]
fn malformed_edits_are_ignored() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    for bad in ["abc", "-3", "1e3", "1.2.3", "5 L"] {
        assert!(!state.edit_fuel(bad), "{bad}");
    }
    assert_eq!(state.fuel_input, "5");
    for bad in ["2.5", "-1", "x", "50%"] {
        assert!(!state.edit_custom_ratio(bad), "{bad}");
    }
    assert_eq!(state.custom_ratio_input, "50");
}

#[test]
fn error_codes_match_locale_keys() {
    assert_eq!(MixError::FuelMissing.code(), "fuelMissing");
    assert_eq!(MixError::RatioRange.code(), "ratioRange");
    assert!(MixError::FuelNonPositive.is_fuel_error());
    assert!(MixError::RatioMissing.is_ratio_error());
    assert!(!MixError::RatioRange.is_fuel_error());
}
