//! 잠깐 표시됐다가 사라지는 알림(복사됨/복사 실패/초기화).
//!
//! 알림은 지울 시각(deadline)을 가진 하나의 예약으로 관리한다. 새 알림을 띄우면
//! 이전 예약은 취소되고, 타이머가 버려지면 예약도 함께 사라진다.
//! 시각은 호출자가 넘겨주므로 GUI 프레임 루프와 테스트 모두 같은 코드를 쓴다.

use std::time::{Duration, Instant};

/// 기본 표시 시간.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(1400);

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledClear {
    message: String,
    clear_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NoticeTimer {
    duration: Duration,
    pending: Option<ScheduledClear>,
}

impl Default for NoticeTimer {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NoticeTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// 알림을 띄우고 이전 예약을 대체한다.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.pending = Some(ScheduledClear {
            message: message.into(),
            clear_at: now + self.duration,
        });
    }

    /// 현재 표시 중인 알림. 시간이 지났으면 지우고 None.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if self.pending.as_ref().is_some_and(|p| now >= p.clear_at) {
            self.pending = None;
        }
        self.pending.as_ref().map(|p| p.message.as_str())
    }

    /// 알림이 사라질 때까지 남은 시간(다시 그리기 예약용).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.clear_at.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }
}
