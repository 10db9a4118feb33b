//! 계산 결과를 화면/복사용 문자열로 만든다.
//! 표시 문자열은 모두 언어팩에서 가져오고, 여기서는 숫자 형식만 다룬다.

use crate::i18n::{keys, Language, Translator};
use crate::mix::calculator::{CalculatorState, MixOutcome, MixResult, Mode};
use crate::presets::PresetCatalog;
use crate::units::{convert_volume, VolumeUnit};

/// 혼합비가 없을 때 `1:` 뒤에 표시하는 자리표시자.
pub const RATIO_PLACEHOLDER: &str = "—";

/// 정수 문자열에 천 단위 구분 기호를 넣는다.
pub fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// 반올림된 ml 값을 로케일 형식으로 표시한다(예: en "1,250", de "1.250").
pub fn format_ml(rounded_ml: f64, lang: Language) -> String {
    group_digits(&format!("{:.0}", rounded_ml.abs()), lang.group_separator())
}

/// 소수 첫째 자리까지의 정확한 ml 값(예: en "62.5", de "62,5").
/// 반올림 규칙은 `rounded_ml`과 같다(0.05는 0에서 먼 쪽).
pub fn format_exact_ml(oil_ml: f64, lang: Language) -> String {
    let text = format!("{:.1}", (oil_ml * 10.0).round() / 10.0);
    match lang.decimal_separator() {
        '.' => text,
        sep => text.replace('.', &sep.to_string()),
    }
}

/// 혼합비 분모를 표시한다. 정수 값은 소수점 없이 나온다.
pub fn format_ratio(x: f64) -> String {
    format!("{x}")
}

/// 선택된 혼합비 `1:X`. 혼합비가 없으면 `1:—`.
pub fn ratio_display(outcome: &MixOutcome) -> String {
    match outcome.ratio {
        Some(x) if x.is_finite() => format!("1:{}", format_ratio(x)),
        _ => format!("1:{RATIO_PLACEHOLDER}"),
    }
}

/// 결과 카드의 큰 숫자(예: "100 ml").
pub fn result_display(result: &MixResult, lang: Language) -> String {
    format!("{} ml", format_ml(result.rounded_ml, lang))
}

/// "exactly 62.5 ml" 형태의 보조 표시.
pub fn exact_display(result: &MixResult, tr: &Translator) -> String {
    let ml = format_exact_ml(result.oil_ml, tr.language());
    tr.t_with(keys::EXACT, &[("ml", &ml)])
}

/// 미국 액량 온스 환산 보조 표시.
pub fn fluid_ounces_display(result: &MixResult, tr: &Translator) -> String {
    let oz = convert_volume(result.oil_ml, VolumeUnit::Milliliter, VolumeUnit::UsFluidOunce);
    let oz = format_exact_ml(oz, tr.language());
    tr.t_with(keys::FLUID_OUNCES, &[("oz", &oz)])
}

/// 현재 오류 메시지. 오류가 없으면 None.
pub fn error_text(outcome: &MixOutcome, tr: &Translator) -> Option<String> {
    outcome.error.map(|e| tr.t(e.message_key()))
}

/// 프리셋 선택 아래의 안내 문구.
pub fn preset_hint(state: &CalculatorState, catalog: &PresetCatalog, tr: &Translator) -> String {
    match catalog.find(&state.selected_preset_id) {
        Some(p) => tr.t_with(keys::PRESET_HINT, &[("x", &p.x.to_string())]),
        None => tr.t(keys::PRESET_SELECT_HINT),
    }
}

/// 복사/공유에 쓰는 한 줄 문자열. 유효한 결과가 없으면 빈 문자열이다.
pub fn copy_text(state: &CalculatorState, outcome: &MixOutcome, tr: &Translator) -> String {
    let Some(result) = outcome.result() else {
        return String::new();
    };
    let x = format_ratio(result.ratio);
    let ml = format!("{:.0}", result.rounded_ml);
    tr.t_with(
        keys::COPY_TEXT,
        &[("liters", &state.fuel_input), ("x", &x), ("ml", &ml)],
    )
}

/// 모드 토글 라벨 키.
pub fn mode_label_key(mode: Mode) -> &'static str {
    match mode {
        Mode::Preset => keys::MODE_PRESET,
        Mode::Custom => keys::MODE_CUSTOM,
    }
}
