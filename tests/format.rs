use pretty_assertions::assert_eq;
use two_stroke_mix::i18n::{Language, Translator};
use two_stroke_mix::mix::{
    copy_text, error_text, exact_display, fluid_ounces_display, format_ml, preset_hint,
    ratio_display, result_display, CalculatorState, Mode,
};
use two_stroke_mix::presets::PresetCatalog;

#[test]
fn thousands_are_grouped_per_locale() {
    assert_eq!(format_ml(100.0, Language::En), "100");
    assert_eq!(format_ml(1250.0, Language::En), "1,250");
    assert_eq!(format_ml(1250.0, Language::De), "1.250");
    assert_eq!(format_ml(2_000_000.0, Language::En), "2,000,000");
}

#[test]
fn result_and_exact_lines() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.edit_fuel("1");
    state.edit_custom_ratio("16");
    state.set_mode(Mode::Custom);
    let result = state.evaluate(&catalog).result().unwrap();

    let en = Translator::new("en");
    assert_eq!(result_display(&result, Language::En), "63 ml");
    assert_eq!(exact_display(&result, &en), "exactly 62.5 ml");
    let de = Translator::new("de");
    assert_eq!(exact_display(&result, &de), "genau 62,5 ml");
}

#[test]
fn ratio_placeholder_when_custom_is_blank() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    assert_eq!(ratio_display(&state.evaluate(&catalog)), "1:50");
    state.set_mode(Mode::Custom);
    state.edit_custom_ratio("");
    assert_eq!(ratio_display(&state.evaluate(&catalog)), "1:—");
    state.edit_custom_ratio("5");
    assert_eq!(ratio_display(&state.evaluate(&catalog)), "1:5");
}

#[test]
fn copy_text_for_default_form() {
    let catalog = PresetCatalog::builtin();
    let state = CalculatorState::new(&catalog);
    let outcome = state.evaluate(&catalog);
    assert_eq!(
        copy_text(&state, &outcome, &Translator::new("en")),
        "5 L fuel at 1:50 → 100 ml two-stroke oil"
    );
    assert_eq!(
        copy_text(&state, &outcome, &Translator::new("de")),
        "5 L Kraftstoff bei 1:50 → 100 ml Zweitaktöl"
    );
}

#[test]
fn copy_text_is_empty_without_result() {
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.edit_fuel("0");
    let outcome = state.evaluate(&catalog);
    let tr = Translator::new("en");
    assert_eq!(copy_text(&state, &outcome, &tr), "");
    assert_eq!(
        error_text(&outcome, &tr).as_deref(),
        Some("The fuel amount must be greater than 0.")
    );
}

#[test]
fn preset_hint_falls_back_for_unknown_id() {
    let catalog = PresetCatalog::builtin();
    let tr = Translator::new("en");
    let mut state = CalculatorState::new(&catalog);
    state.select_preset("mz-33");
    assert_eq!(preset_hint(&state, &catalog, &tr), "Mixes at 1:33.");
    state.select_preset("gone");
    assert_eq!(preset_hint(&state, &catalog, &tr), "Select a preset.");
}

#[test]
fn fluid_ounces_line() {
    let catalog = PresetCatalog::builtin();
    let state = CalculatorState::new(&catalog);
    let result = state.evaluate(&catalog).result().unwrap();
    // 100 ml ≈ 3.38 US fl oz
    assert_eq!(fluid_ounces_display(&result, &Translator::new("en")), "≈ 3.4 fl oz");
}

#[test]
fn exact_line_rounds_half_tenths_up() {
    // 5000 / 32 = 156.25, 1000 / 32 = 31.25
    let catalog = PresetCatalog::builtin();
    let mut state = CalculatorState::new(&catalog);
    state.set_mode(Mode::Custom);
    state.edit_custom_ratio("32");
    let result = state.evaluate(&catalog).result().unwrap();
    assert_eq!(result.oil_ml, 156.25);
    assert_eq!(exact_display(&result, &Translator::new("en")), "exactly 156.3 ml");
    assert_eq!(exact_display(&result, &Translator::new("de")), "genau 156,3 ml");

    state.edit_fuel("1");
    let result = state.evaluate(&catalog).result().unwrap();
    assert_eq!(exact_display(&result, &Translator::new("en")), "exactly 31.3 ml");
}
