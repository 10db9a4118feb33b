use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const APP_SUBTITLE: &str = "app.subtitle";
    pub const FOOTER_DISCLAIMER: &str = "footer.disclaimer";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const FUEL_LABEL: &str = "calc.fuel_label";
    pub const FUEL_UNIT: &str = "calc.fuel_unit";
    pub const FUEL_PLACEHOLDER: &str = "calc.fuel_placeholder";
    pub const MODE_LABEL: &str = "calc.mode_label";
    pub const MODE_PRESET: &str = "calc.preset";
    pub const MODE_CUSTOM: &str = "calc.custom";
    pub const PRESET_LABEL: &str = "calc.preset_label";
    pub const PRESET_HINT: &str = "calc.preset_hint";
    pub const PRESET_SELECT_HINT: &str = "calc.preset_select_hint";
    pub const CUSTOM_LABEL: &str = "calc.custom_label";
    pub const CUSTOM_PLACEHOLDER: &str = "calc.custom_placeholder";
    pub const CUSTOM_HINT: &str = "calc.custom_hint";
    pub const SELECTED_RATIO: &str = "calc.selected_ratio";
    pub const FORMULA_HINT: &str = "calc.formula_hint";
    pub const RESET: &str = "calc.reset";
    pub const OIL_NEEDED: &str = "calc.oil_needed";
    pub const EXACT: &str = "calc.exact";
    pub const FLUID_OUNCES: &str = "calc.fluid_ounces";
    pub const COPY: &str = "calc.copy";
    pub const SHARE: &str = "calc.share";
    pub const COPY_TEXT: &str = "calc.copy_text";
    pub const TOAST_COPIED: &str = "calc.toast_copied";
    pub const TOAST_COPY_FAILED: &str = "calc.toast_copy_failed";
    pub const TOAST_RESET: &str = "calc.toast_reset";

    pub const SETTINGS_TITLE: &str = "settings.title";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_LANGUAGE_AUTO: &str = "settings.language_auto";
    pub const SETTINGS_THEME: &str = "settings.theme";
    pub const SETTINGS_THEME_SYSTEM: &str = "settings.theme_system";
    pub const SETTINGS_THEME_LIGHT: &str = "settings.theme_light";
    pub const SETTINGS_THEME_DARK: &str = "settings.theme_dark";
    pub const SETTINGS_PACK_DIR: &str = "settings.pack_dir";
    pub const SETTINGS_PACK_BROWSE: &str = "settings.pack_browse";
    pub const SETTINGS_FLUID_OUNCES: &str = "settings.fluid_ounces";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const CLI_MENU_TITLE: &str = "cli.menu_title";
    pub const CLI_MENU_FUEL: &str = "cli.menu_fuel";
    pub const CLI_MENU_MODE: &str = "cli.menu_mode";
    pub const CLI_MENU_PRESET: &str = "cli.menu_preset";
    pub const CLI_MENU_CUSTOM: &str = "cli.menu_custom";
    pub const CLI_MENU_RESET: &str = "cli.menu_reset";
    pub const CLI_MENU_COPY: &str = "cli.menu_copy";
    pub const CLI_MENU_SHARE: &str = "cli.menu_share";
    pub const CLI_MENU_EXIT: &str = "cli.menu_exit";
    pub const CLI_PROMPT_SELECT: &str = "cli.prompt_select";
    pub const CLI_INVALID_SELECTION: &str = "cli.invalid_selection";
    pub const CLI_INPUT_REJECTED: &str = "cli.input_rejected";
    pub const CLI_UNKNOWN_PRESET: &str = "cli.unknown_preset";
    pub const CLI_ACTION_DISABLED: &str = "cli.action_disabled";
    pub const CLI_SMS_LINK: &str = "cli.sms_link";
}

/// 지원 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// 천 단위 구분 기호.
    pub fn group_separator(&self) -> char {
        match self {
            Language::En => ',',
            Language::De => '.',
        }
    }

    /// 소수점 기호.
    pub fn decimal_separator(&self) -> char {
        match self {
            Language::En => '.',
            Language::De => ',',
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 조회 순서: 외부 언어팩 → 선택 언어 내장 팩 → 영어 내장 팩 → 키 자체.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/de)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if pack_dir.is_some() && overrides.is_none() {
            tracing::warn!(?pack_dir, lang = lang.as_code(), "language pack not found, using built-in strings");
        }
        Self {
            lang,
            strings: built_in_pack(lang).unwrap_or_default(),
            fallback: built_in_pack(Language::En).unwrap_or_default(),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 어느 팩에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .or_else(|| self.strings.get(key))
            .or_else(|| self.fallback.get(key))
            .cloned()
    }

    /// 번역을 가져온다. 없으면 키 문자열을 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역을 가져온다.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿의 `{name}`을 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("de") => Some("de".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "de" => Some("de".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래의 중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., de-de)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., de)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> Option<HashMap<String, String>> {
    match lang {
        Language::En => parse_toml_to_map(include_str!("../locales/en.toml")),
        Language::De => parse_toml_to_map(include_str!("../locales/de.toml")),
    }
}
