//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 계산/검증 흐름을 쓰게 한다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod mix;
pub mod notice;
pub mod presets;
pub mod session;
pub mod share;
pub mod ui_cli;
pub mod units;

/// 두 실행 파일이 `RUST_LOG`가 없을 때 쓰는 기본 로그 필터.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";
