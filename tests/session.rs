use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use two_stroke_mix::i18n::Translator;
use two_stroke_mix::notice::NoticeTimer;
use two_stroke_mix::presets::PresetCatalog;
use two_stroke_mix::session::{CopyOutcome, MixSession};
use two_stroke_mix::share::{
    encode_uri_component, sms_uri, Clipboard, ClipboardError, Osc52Clipboard, SmsComposer,
};

#[derive(Default)]
struct RecordingClipboard {
    written: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.written.push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[derive(Default)]
struct RecordingComposer {
    uris: Vec<String>,
}

impl SmsComposer for RecordingComposer {
    fn compose(&mut self, uri: &str) {
        self.uris.push(uri.to_string());
    }
}

fn session() -> MixSession {
    MixSession::new(PresetCatalog::builtin(), Duration::from_millis(1400))
}

#[test]
fn copy_writes_text_and_shows_notice() {
    let tr = Translator::new("en");
    let mut s = session();
    let mut clip = RecordingClipboard::default();
    let t0 = Instant::now();
    assert_eq!(s.copy(&mut clip, &tr, t0), CopyOutcome::Copied);
    assert_eq!(clip.written, vec!["5 L fuel at 1:50 → 100 ml two-stroke oil".to_string()]);
    assert_eq!(s.notice(t0), Some("Copied."));
    assert_eq!(s.notice(t0 + Duration::from_millis(1399)), Some("Copied."));
    assert_eq!(s.notice(t0 + Duration::from_millis(1400)), None);
}

#[test]
fn copy_failure_keeps_state() {
    let tr = Translator::new("en");
    let mut s = session();
    s.edit_fuel("7.5");
    let before = s.state().clone();
    let t0 = Instant::now();
    assert_eq!(s.copy(&mut BrokenClipboard, &tr, t0), CopyOutcome::Failed);
    assert_eq!(s.notice(t0), Some("Copy failed."));
    assert_eq!(s.state(), &before);
}

#[test]
fn copy_and_share_are_disabled_without_result() {
    let tr = Translator::new("en");
    let mut s = session();
    s.edit_fuel("");
    let mut clip = RecordingClipboard::default();
    let mut sms = RecordingComposer::default();
    let t0 = Instant::now();
    assert_eq!(s.copy(&mut clip, &tr, t0), CopyOutcome::Disabled);
    assert!(!s.share(&mut sms, &tr));
    assert!(clip.written.is_empty());
    assert!(sms.uris.is_empty());
    assert_eq!(s.notice(t0), None);
}

#[test]
fn zero_fuel_disables_copy_and_share() {
    let tr = Translator::new("en");
    let mut s = session();
    assert!(s.edit_fuel("0"));
    let before = s.state().clone();
    let mut clip = RecordingClipboard::default();
    let mut sms = RecordingComposer::default();
    let t0 = Instant::now();
    assert_eq!(s.copy_text(&tr), "");
    assert_eq!(s.copy(&mut clip, &tr, t0), CopyOutcome::Disabled);
    assert!(!s.share(&mut sms, &tr));
    assert!(clip.written.is_empty());
    assert!(sms.uris.is_empty());
    assert_eq!(s.notice(t0), None);
    assert_eq!(s.state(), &before);
}

#[test]
fn share_opens_encoded_sms_uri() {
    let tr = Translator::new("en");
    let mut s = session();
    let mut sms = RecordingComposer::default();
    assert!(s.share(&mut sms, &tr));
    assert_eq!(
        sms.uris,
        vec!["sms:&body=5%20L%20fuel%20at%201%3A50%20%E2%86%92%20100%20ml%20two-stroke%20oil"
            .to_string()]
    );
}

#[test]
fn reset_restores_form_and_notifies() {
    let tr = Translator::new("de");
    let mut s = session();
    s.edit_fuel("12");
    s.select_preset("mz-33");
    let t0 = Instant::now();
    s.reset(&tr, t0);
    assert_eq!(s.state().fuel_input, "5");
    assert_eq!(s.state().selected_preset_id, "trabant-50");
    assert_eq!(s.notice(t0), Some("Zurückgesetzt."));
}

#[test]
fn newer_notice_replaces_pending_one() {
    let mut timer = NoticeTimer::new(Duration::from_millis(1400));
    let t0 = Instant::now();
    timer.show("Copied.", t0);
    timer.show("Reset.", t0 + Duration::from_millis(1000));
    // 첫 알림의 만료 시각이 지나도 새 알림은 남아 있다.
    assert_eq!(timer.current(t0 + Duration::from_millis(1500)), Some("Reset."));
    assert_eq!(
        timer.remaining(t0 + Duration::from_millis(1500)),
        Some(Duration::from_millis(900))
    );
    assert_eq!(timer.current(t0 + Duration::from_millis(2400)), None);
    assert!(!timer.is_active());
}

#[test]
fn cancelled_notice_never_fires() {
    let mut timer = NoticeTimer::default();
    let t0 = Instant::now();
    timer.show("Copied.", t0);
    timer.cancel();
    assert_eq!(timer.current(t0), None);
    assert_eq!(timer.remaining(t0), None);
}

#[test]
fn uri_component_encoding() {
    assert_eq!(encode_uri_component("a-b_c.d!~*'()"), "a-b_c.d!~*'()");
    assert_eq!(encode_uri_component("1:40 & ß"), "1%3A40%20%26%20%C3%9F");
    assert_eq!(sms_uri(""), "sms:&body=");
}

#[test]
fn osc52_clipboard_writes_base64_sequence() {
    let mut clip = Osc52Clipboard::new(Vec::new());
    clip.write_text("hi").unwrap();
    assert_eq!(clip.into_inner(), b"\x1b]52;c;aGk=\x07".to_vec());
}
