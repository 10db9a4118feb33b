use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 비율 프리셋이 없을 때 사용하는 기본 혼합비(1:50).
pub const FALLBACK_RATIO: u32 = 50;

/// 엔진/오일 조합별 권장 혼합비 프리셋. `x`는 1:x의 분모이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioPreset {
    pub id: String,
    pub label: String,
    pub x: u32,
}

impl RatioPreset {
    pub fn new(id: &str, label: &str, x: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            x,
        }
    }
}

/// 카탈로그 구성 시 발생 가능한 오류.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("preset catalog is empty")]
    Empty,
    #[error("preset '{id}' has a non-positive ratio")]
    NonPositiveRatio { id: String },
    #[error("duplicate preset id '{0}'")]
    DuplicateId(String),
}

/// 순서를 보존하는 읽기 전용 프리셋 목록. 첫 항목이 기본 프리셋이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<RatioPreset>,
}

/// 빌드에 포함된 기본 프리셋.
pub fn builtin_presets() -> Vec<RatioPreset> {
    vec![
        RatioPreset::new("trabant-50", "Trabant (1:50)", 50),
        RatioPreset::new("simson-50", "Simson (1:50)", 50),
        RatioPreset::new("mz-33", "MZ (1:33)", 33),
        RatioPreset::new("breakin-25", "Break-in (1:25)", 25),
    ]
}

impl PresetCatalog {
    /// 프리셋 목록을 검증해 카탈로그를 만든다.
    pub fn new(presets: Vec<RatioPreset>) -> Result<Self, CatalogError> {
        if presets.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, p) in presets.iter().enumerate() {
            validate_entry(p)?;
            if presets[..i].iter().any(|q| q.id == p.id) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// 내장 프리셋만으로 구성된 카탈로그.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// 내장 프리셋 뒤에 설정 파일의 추가 프리셋을 붙인다.
    /// 잘못된 항목(x=0, 중복 id)은 건너뛰고 경고 로그만 남긴다.
    pub fn with_extra(extra: &[RatioPreset]) -> Self {
        let mut catalog = Self::builtin();
        for p in extra {
            let result = validate_entry(p).and_then(|_| {
                if catalog.find(&p.id).is_some() {
                    Err(CatalogError::DuplicateId(p.id.clone()))
                } else {
                    Ok(())
                }
            });
            match result {
                Ok(()) => catalog.presets.push(p.clone()),
                Err(e) => tracing::warn!("skipping extra preset: {e}"),
            }
        }
        catalog
    }

    pub fn presets(&self) -> &[RatioPreset] {
        &self.presets
    }

    /// 기본 프리셋(목록의 첫 항목).
    pub fn default_preset(&self) -> &RatioPreset {
        // new()/builtin()이 비어 있지 않음을 보장한다.
        &self.presets[0]
    }

    pub fn find(&self, id: &str) -> Option<&RatioPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entry(p: &RatioPreset) -> Result<(), CatalogError> {
    if p.x == 0 {
        return Err(CatalogError::NonPositiveRatio { id: p.id.clone() });
    }
    Ok(())
}
