use std::io::{BufRead, Write};
use std::time::Instant;

use thiserror::Error;

use crate::config::ConfigError;
use crate::i18n::{keys, Translator};
use crate::mix::Mode;
use crate::session::MixSession;
use crate::share::{Clipboard, SmsComposer};
use crate::ui_cli::{Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid fuel amount '{0}'")]
    InvalidFuel(String),
    #[error("invalid mixture ratio '{0}'")]
    InvalidRatio(String),
}

/// 단발성 계산 요청(`calc` 서브커맨드).
#[derive(Debug, Clone, Default)]
pub struct CalcRequest {
    pub fuel: String,
    pub preset: Option<String>,
    pub ratio: Option<String>,
    pub copy: bool,
    pub share: bool,
}

/// 부수 효과 협력자 묶음.
pub struct Collaborators<'a> {
    pub clipboard: &'a mut dyn Clipboard,
    pub sms: &'a mut dyn SmsComposer,
}

/// 요청을 한 번 계산해 출력한다. 유효한 결과가 나오면 true.
///
/// 대화형 입력과 달리 허용되지 않는 텍스트는 무시하지 않고 오류로 돌려준다.
pub fn calculate<R: BufRead, W: Write>(
    req: &CalcRequest,
    session: &mut MixSession,
    tr: &Translator,
    show_fluid_ounces: bool,
    console: &mut Console<R, W>,
    collab: Collaborators<'_>,
) -> Result<bool, AppError> {
    let Collaborators { clipboard, sms } = collab;
    if !session.edit_fuel(req.fuel.trim()) {
        return Err(AppError::InvalidFuel(req.fuel.clone()));
    }
    if let Some(ratio) = &req.ratio {
        if !session.edit_custom_ratio(ratio.trim()) {
            return Err(AppError::InvalidRatio(ratio.clone()));
        }
        session.set_mode(Mode::Custom);
    } else if let Some(id) = &req.preset {
        session.select_preset(id);
        session.set_mode(Mode::Preset);
        if session.catalog().find(id).is_none() {
            console.say(&tr.t(keys::CLI_UNKNOWN_PRESET))?;
        }
    }

    console.print_summary(session, tr, show_fluid_ounces)?;
    let valid = session.outcome().is_valid();
    if valid {
        console.say(&session.copy_text(tr))?;
    }
    if req.copy {
        let now = Instant::now();
        let outcome = session.copy(clipboard, tr, now);
        let notice = session.notice(now).map(str::to_owned);
        console.report_copy(outcome, notice.as_deref(), tr)?;
    }
    if req.share && !session.share(sms, tr) {
        console.say(&tr.t(keys::CLI_ACTION_DISABLED))?;
    }
    Ok(valid)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run<R: BufRead, W: Write>(
    session: &mut MixSession,
    tr: &Translator,
    show_fluid_ounces: bool,
    console: &mut Console<R, W>,
    collab: Collaborators<'_>,
) -> Result<(), AppError> {
    let Collaborators { clipboard, sms } = collab;
    loop {
        console.print_summary(session, tr, show_fluid_ounces)?;
        match console.main_menu(tr)? {
            MenuChoice::Fuel => console.handle_fuel(session, tr)?,
            MenuChoice::ToggleMode => {
                let next = match session.state().mode {
                    Mode::Preset => Mode::Custom,
                    Mode::Custom => Mode::Preset,
                };
                session.set_mode(next);
            }
            MenuChoice::Preset => console.handle_preset(session, tr)?,
            MenuChoice::CustomRatio => console.handle_custom_ratio(session, tr)?,
            MenuChoice::Reset => {
                let now = Instant::now();
                session.reset(tr, now);
                if let Some(msg) = session.notice(now).map(str::to_owned) {
                    console.say(&msg)?;
                }
            }
            MenuChoice::Copy => {
                let now = Instant::now();
                let outcome = session.copy(clipboard, tr, now);
                let notice = session.notice(now).map(str::to_owned);
                console.report_copy(outcome, notice.as_deref(), tr)?;
            }
            MenuChoice::Share => {
                if !session.share(sms, tr) {
                    console.say(&tr.t(keys::CLI_ACTION_DISABLED))?;
                }
            }
            MenuChoice::Exit => {
                console.say(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}
