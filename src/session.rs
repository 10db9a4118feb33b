use std::time::{Duration, Instant};

use crate::i18n::{keys, Translator};
use crate::mix::{self, CalculatorState, MixOutcome, Mode};
use crate::notice::NoticeTimer;
use crate::presets::PresetCatalog;
use crate::share::{self, Clipboard, SmsComposer};

/// 복사 동작의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// 유효한 결과가 없어 복사하지 않음.
    Disabled,
}

/// 한 개의 계산 폼 세션. GUI와 CLI가 같은 흐름을 공유한다.
///
/// 입력 상태와 알림 타이머만 가진다. 파생값은 매번 `outcome()`으로 다시 계산한다.
#[derive(Debug, Clone)]
pub struct MixSession {
    catalog: PresetCatalog,
    state: CalculatorState,
    notices: NoticeTimer,
}

impl MixSession {
    pub fn new(catalog: PresetCatalog, notice_duration: Duration) -> Self {
        let state = CalculatorState::new(&catalog);
        Self {
            catalog,
            state,
            notices: NoticeTimer::new(notice_duration),
        }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn outcome(&self) -> MixOutcome {
        self.state.evaluate(&self.catalog)
    }

    /// 복사/공유 페이로드. 비어 있으면 두 동작 모두 비활성이다.
    pub fn copy_text(&self, tr: &Translator) -> String {
        mix::copy_text(&self.state, &self.outcome(), tr)
    }

    pub fn edit_fuel(&mut self, raw: &str) -> bool {
        self.state.edit_fuel(raw)
    }

    pub fn edit_custom_ratio(&mut self, raw: &str) -> bool {
        self.state.edit_custom_ratio(raw)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.set_mode(mode);
    }

    pub fn select_preset(&mut self, id: &str) {
        self.state.select_preset(id);
    }

    /// 입력을 초기화하고 "초기화됨" 알림을 띄운다.
    pub fn reset(&mut self, tr: &Translator, now: Instant) {
        self.state.reset(&self.catalog);
        self.notices.show(tr.t(keys::TOAST_RESET), now);
    }

    /// 결과 문자열을 클립보드에 쓴다. 실패해도 입력 상태는 그대로 둔다.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, tr: &Translator, now: Instant) -> CopyOutcome {
        let text = self.copy_text(tr);
        if text.is_empty() {
            return CopyOutcome::Disabled;
        }
        match clipboard.write_text(&text) {
            Ok(()) => {
                tracing::info!("copied result to clipboard");
                self.notices.show(tr.t(keys::TOAST_COPIED), now);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                self.notices.show(tr.t(keys::TOAST_COPY_FAILED), now);
                CopyOutcome::Failed
            }
        }
    }

    /// SMS 작성 화면을 연다. 결과가 없으면 아무것도 하지 않고 false.
    pub fn share(&mut self, composer: &mut dyn SmsComposer, tr: &Translator) -> bool {
        let text = self.copy_text(tr);
        if text.is_empty() {
            return false;
        }
        tracing::info!("opening sms composer");
        composer.compose(&share::sms_uri(&text));
        true
    }

    /// 표시 중인 알림. 만료됐으면 지운다.
    pub fn notice(&mut self, now: Instant) -> Option<&str> {
        self.notices.current(now)
    }

    pub fn notice_remaining(&self, now: Instant) -> Option<Duration> {
        self.notices.remaining(now)
    }
}
