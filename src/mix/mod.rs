//! 2행정 혼합유 계산 모듈 모음.

pub mod calculator;
pub mod format;
pub mod input;

pub use calculator::*;
pub use format::*;
