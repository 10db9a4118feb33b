//! 입력 필드 필터링과 파싱.
//!
//! 필터는 키 입력 단계에서 숫자 이외의 문자열을 걸러내고,
//! 파서는 걸러진 텍스트를 수치로 바꾼다. 비어 있거나 해석할 수 없는
//! 값은 0이 아니라 `None`(누락)으로 취급한다.

/// 연료량 입력이 허용하는 형태인지 확인한다: `^[0-9]*([.][0-9]*)?$`.
pub fn is_decimal_text(text: &str) -> bool {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    digits(int_part) && frac_part.map_or(true, digits)
}

/// 혼합비 입력이 허용하는 형태인지 확인한다: `^[0-9]*$`.
pub fn is_digit_text(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// 연료량 편집을 정규화한다. 첫 번째 소수 쉼표를 점으로 바꾸고,
/// 허용되지 않는 문자열이면 `None`을 돌려 편집을 무시하게 한다.
pub fn filter_fuel_edit(raw: &str) -> Option<String> {
    let normalized = raw.replacen(',', ".", 1);
    is_decimal_text(&normalized).then_some(normalized)
}

/// 사용자 지정 혼합비 편집을 검사한다. 숫자만 허용한다.
pub fn filter_ratio_edit(raw: &str) -> Option<String> {
    is_digit_text(raw).then(|| raw.to_string())
}

/// 연료량 텍스트를 리터 값으로 해석한다.
pub fn parse_fuel_liters(text: &str) -> Option<f64> {
    let t = text.trim().replacen(',', ".", 1);
    if t.is_empty() || !is_decimal_text(&t) {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 사용자 지정 혼합비 텍스트를 분모 값으로 해석한다.
pub fn parse_custom_ratio(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() || !is_digit_text(t) {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
