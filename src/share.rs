//! 복사/SMS 공유를 담당하는 외부 협력자 인터페이스.

use std::io::Write;

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// 시스템 클립보드에 텍스트를 쓰는 기능.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// SMS 작성 화면을 여는 기능. 결과를 기다리지 않는다.
pub trait SmsComposer {
    fn compose(&mut self, uri: &str);
}

/// `sms:&body=...` 링크를 만든다.
pub fn sms_uri(body: &str) -> String {
    format!("sms:&body={}", encode_uri_component(body))
}

/// URI 구성요소 인코딩. 영숫자와 `-_.!~*'()`만 그대로 둔다.
pub fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for b in text.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// 터미널 OSC 52 시퀀스로 클립보드에 쓴다. 터미널이 지원하지 않으면 조용히 무시된다.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let payload = base64::engine::general_purpose::STANDARD.encode(text);
        write!(self.out, "\x1b]52;c;{payload}\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// SMS 링크를 출력 스트림에 적는다(CLI용).
#[derive(Debug)]
pub struct PrintSmsComposer<W: Write> {
    out: W,
    prefix: String,
}

impl<W: Write> PrintSmsComposer<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self {
            out,
            prefix: prefix.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SmsComposer for PrintSmsComposer<W> {
    fn compose(&mut self, uri: &str) {
        if let Err(e) = writeln!(self.out, "{} {uri}", self.prefix) {
            tracing::warn!("failed to print sms link: {e}");
        }
    }
}
