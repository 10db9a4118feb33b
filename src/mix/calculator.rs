use thiserror::Error;

use crate::mix::input;
use crate::presets::{PresetCatalog, FALLBACK_RATIO};
use crate::units::{convert_volume, VolumeUnit};

/// 허용 혼합비 하한(1:10).
pub const RATIO_MIN: f64 = 10.0;
/// 허용 혼합비 상한(1:200).
pub const RATIO_MAX: f64 = 200.0;
/// 초기/리셋 시 연료량 입력값 [L].
pub const DEFAULT_FUEL_INPUT: &str = "5";
/// 초기/리셋 시 사용자 지정 혼합비 입력값.
pub const DEFAULT_CUSTOM_RATIO_INPUT: &str = "50";

/// 혼합비 선택 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Preset,
    Custom,
}

/// 결과를 낼 수 없는 이유. 앞선 항목이 우선한다.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MixError {
    #[error("fuel volume is missing")]
    FuelMissing,
    #[error("fuel volume must be greater than zero")]
    FuelNonPositive,
    #[error("mixture ratio is missing")]
    RatioMissing,
    #[error("mixture ratio must be between 1:10 and 1:200")]
    RatioRange,
}

impl MixError {
    /// 화면/언어팩과 공유하는 오류 코드.
    pub fn code(&self) -> &'static str {
        match self {
            MixError::FuelMissing => "fuelMissing",
            MixError::FuelNonPositive => "fuelNonPositive",
            MixError::RatioMissing => "ratioMissing",
            MixError::RatioRange => "ratioRange",
        }
    }

    /// 언어팩에서 메시지를 찾을 키.
    pub fn message_key(&self) -> &'static str {
        match self {
            MixError::FuelMissing => "calc.errors.fuel_missing",
            MixError::FuelNonPositive => "calc.errors.fuel_non_positive",
            MixError::RatioMissing => "calc.errors.ratio_missing",
            MixError::RatioRange => "calc.errors.ratio_range",
        }
    }

    pub fn is_fuel_error(&self) -> bool {
        matches!(self, MixError::FuelMissing | MixError::FuelNonPositive)
    }

    pub fn is_ratio_error(&self) -> bool {
        matches!(self, MixError::RatioMissing | MixError::RatioRange)
    }
}

/// 한 번의 폼 세션 동안 유지되는 원시 입력 상태.
///
/// 입력 텍스트는 파싱 전 그대로 보관해, 입력 중인 값("5." 등)을 다시 표시할 수 있게 한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub fuel_input: String,
    pub mode: Mode,
    pub selected_preset_id: String,
    pub custom_ratio_input: String,
}

impl CalculatorState {
    /// 기본값으로 상태를 만든다.
    pub fn new(catalog: &PresetCatalog) -> Self {
        Self {
            fuel_input: DEFAULT_FUEL_INPUT.to_string(),
            mode: Mode::Preset,
            selected_preset_id: catalog.default_preset().id.clone(),
            custom_ratio_input: DEFAULT_CUSTOM_RATIO_INPUT.to_string(),
        }
    }

    /// 연료량 편집을 적용한다. 허용되지 않는 입력이면 기존 값을 유지하고 false.
    pub fn edit_fuel(&mut self, raw: &str) -> bool {
        match input::filter_fuel_edit(raw) {
            Some(text) => {
                self.fuel_input = text;
                true
            }
            None => {
                tracing::debug!(raw, "rejected fuel edit");
                false
            }
        }
    }

    /// 사용자 지정 혼합비 편집을 적용한다. 숫자 외 입력은 무시한다.
    pub fn edit_custom_ratio(&mut self, raw: &str) -> bool {
        match input::filter_ratio_edit(raw) {
            Some(text) => {
                self.custom_ratio_input = text;
                true
            }
            None => {
                tracing::debug!(raw, "rejected ratio edit");
                false
            }
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(?mode, "mode changed");
        }
        self.mode = mode;
    }

    /// 프리셋을 선택한다. 카탈로그에 없는 id도 그대로 보관하며 계산 시 기본 혼합비로 대체된다.
    pub fn select_preset(&mut self, id: &str) {
        self.selected_preset_id = id.to_string();
    }

    /// 모든 필드를 초기값으로 되돌린다.
    pub fn reset(&mut self, catalog: &PresetCatalog) {
        *self = Self::new(catalog);
        tracing::debug!("calculator state reset");
    }

    /// 현재 입력에서 파생값을 계산한다.
    pub fn evaluate(&self, catalog: &PresetCatalog) -> MixOutcome {
        let fuel_liters = input::parse_fuel_liters(&self.fuel_input);
        let ratio = resolve_ratio(self, catalog);
        let oil_ml = match (fuel_liters, ratio) {
            (Some(l), Some(x)) => oil_milliliters(l, x),
            _ => None,
        };
        MixOutcome {
            fuel_liters,
            ratio,
            oil_ml,
            error: classify(self, fuel_liters, ratio),
        }
    }
}

/// 현재 모드에 따라 유효 혼합비 분모를 결정한다.
pub fn resolve_ratio(state: &CalculatorState, catalog: &PresetCatalog) -> Option<f64> {
    match state.mode {
        Mode::Preset => {
            let x = catalog
                .find(&state.selected_preset_id)
                .map_or(FALLBACK_RATIO, |p| p.x);
            Some(f64::from(x))
        }
        Mode::Custom => input::parse_custom_ratio(&state.custom_ratio_input),
    }
}

/// 필요한 오일량 [ml] = 연료 [L] * 1000 / x.
/// 두 값이 모두 유한한 양수일 때만 결과를 돌려준다.
pub fn oil_milliliters(fuel_liters: f64, ratio: f64) -> Option<f64> {
    if !fuel_liters.is_finite() || !ratio.is_finite() {
        return None;
    }
    if fuel_liters <= 0.0 || ratio <= 0.0 {
        return None;
    }
    Some(convert_volume(fuel_liters, VolumeUnit::Liter, VolumeUnit::Milliliter) / ratio)
}

/// 화면에 하나만 표시할 오류를 우선순위대로 판정한다.
pub fn classify(
    state: &CalculatorState,
    fuel_liters: Option<f64>,
    ratio: Option<f64>,
) -> Option<MixError> {
    let fuel = match fuel_liters {
        Some(v) if v.is_finite() && !state.fuel_input.trim().is_empty() => v,
        _ => return Some(MixError::FuelMissing),
    };
    if fuel <= 0.0 {
        return Some(MixError::FuelNonPositive);
    }
    let custom_blank = state.mode == Mode::Custom && state.custom_ratio_input.trim().is_empty();
    let x = match ratio {
        Some(v) if v.is_finite() && !custom_blank => v,
        _ => return Some(MixError::RatioMissing),
    };
    if !(RATIO_MIN..=RATIO_MAX).contains(&x) {
        return Some(MixError::RatioRange);
    }
    None
}

/// 상태 + 카탈로그에서 파생된 값 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixOutcome {
    pub fuel_liters: Option<f64>,
    pub ratio: Option<f64>,
    /// 검증과 무관하게 계산 가능한 경우의 오일량 [ml].
    pub oil_ml: Option<f64>,
    pub error: Option<MixError>,
}

/// 표시 가능한(오류 없는) 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixResult {
    pub fuel_liters: f64,
    pub ratio: f64,
    pub oil_ml: f64,
    /// 가장 가까운 정수 ml로 반올림한 값(0.5는 0에서 먼 쪽).
    pub rounded_ml: f64,
}

impl MixOutcome {
    /// 오류가 없을 때만 결과를 돌려준다.
    pub fn result(&self) -> Option<MixResult> {
        if self.error.is_some() {
            return None;
        }
        match (self.fuel_liters, self.ratio, self.oil_ml) {
            (Some(fuel_liters), Some(ratio), Some(oil_ml)) => Some(MixResult {
                fuel_liters,
                ratio,
                oil_ml,
                rounded_ml: oil_ml.round(),
            }),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result().is_some()
    }
}
