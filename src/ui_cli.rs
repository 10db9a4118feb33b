use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::mix::{self, Mode};
use crate::presets::PresetCatalog;
use crate::session::{CopyOutcome, MixSession};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Fuel,
    ToggleMode,
    Preset,
    CustomRatio,
    Reset,
    Copy,
    Share,
    Exit,
}

/// 입력/출력 스트림 묶음. 실제 실행은 stdin/stdout, 테스트는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
    pub fn main_menu(&mut self, tr: &Translator) -> Result<MenuChoice, AppError> {
        writeln!(self.out)?;
        for key in [
            keys::CLI_MENU_TITLE,
            keys::CLI_MENU_FUEL,
            keys::CLI_MENU_MODE,
            keys::CLI_MENU_PRESET,
            keys::CLI_MENU_CUSTOM,
            keys::CLI_MENU_RESET,
            keys::CLI_MENU_COPY,
            keys::CLI_MENU_SHARE,
            keys::CLI_MENU_EXIT,
        ] {
            writeln!(self.out, "{}", tr.t(key))?;
        }
        loop {
            let Some(sel) = self.read_line(&tr.t(keys::CLI_PROMPT_SELECT))? else {
                return Ok(MenuChoice::Exit);
            };
            match sel.trim() {
                "1" => return Ok(MenuChoice::Fuel),
                "2" => return Ok(MenuChoice::ToggleMode),
                "3" => return Ok(MenuChoice::Preset),
                "4" => return Ok(MenuChoice::CustomRatio),
                "5" => return Ok(MenuChoice::Reset),
                "6" => return Ok(MenuChoice::Copy),
                "7" => return Ok(MenuChoice::Share),
                "0" => return Ok(MenuChoice::Exit),
                _ => writeln!(self.out, "{}", tr.t(keys::CLI_INVALID_SELECTION))?,
            }
        }
    }

    /// 현재 입력과 결과(또는 오류)를 출력한다.
    pub fn print_summary(
        &mut self,
        session: &MixSession,
        tr: &Translator,
        show_fluid_ounces: bool,
    ) -> Result<(), AppError> {
        let state = session.state();
        let outcome = session.outcome();
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}: {} {}",
            tr.t(keys::FUEL_LABEL),
            state.fuel_input,
            tr.t(keys::FUEL_UNIT)
        )?;
        writeln!(
            self.out,
            "{}: {}",
            tr.t(keys::MODE_LABEL),
            tr.t(mix::mode_label_key(state.mode))
        )?;
        match state.mode {
            Mode::Preset => {
                let label = session
                    .catalog()
                    .find(&state.selected_preset_id)
                    .map_or(state.selected_preset_id.as_str(), |p| p.label.as_str());
                writeln!(self.out, "{}: {label}", tr.t(keys::PRESET_LABEL))?;
                writeln!(
                    self.out,
                    "  {}",
                    mix::preset_hint(state, session.catalog(), tr)
                )?;
            }
            Mode::Custom => {
                writeln!(
                    self.out,
                    "{}: {}",
                    tr.t(keys::CUSTOM_LABEL),
                    state.custom_ratio_input
                )?;
                writeln!(self.out, "  {}", tr.t(keys::CUSTOM_HINT))?;
            }
        }
        writeln!(
            self.out,
            "{}: {}",
            tr.t(keys::SELECTED_RATIO),
            mix::ratio_display(&outcome)
        )?;
        match (mix::error_text(&outcome, tr), outcome.result()) {
            (Some(err), _) => writeln!(self.out, "! {err}")?,
            (None, Some(result)) => {
                writeln!(
                    self.out,
                    "{}: {} ({})",
                    tr.t(keys::OIL_NEEDED),
                    mix::result_display(&result, tr.language()),
                    mix::exact_display(&result, tr)
                )?;
                if show_fluid_ounces {
                    writeln!(self.out, "  {}", mix::fluid_ounces_display(&result, tr))?;
                }
            }
            (None, None) => {}
        }
        Ok(())
    }

    pub fn handle_fuel(&mut self, session: &mut MixSession, tr: &Translator) -> Result<(), AppError> {
        let prompt = format!("{} [{}]: ", tr.t(keys::FUEL_LABEL), tr.t(keys::FUEL_UNIT));
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(());
        };
        if !session.edit_fuel(line.trim()) {
            writeln!(self.out, "{}", tr.t(keys::CLI_INPUT_REJECTED))?;
        }
        Ok(())
    }

    pub fn handle_custom_ratio(
        &mut self,
        session: &mut MixSession,
        tr: &Translator,
    ) -> Result<(), AppError> {
        let prompt = format!("{} (1:X): ", tr.t(keys::CUSTOM_LABEL));
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(());
        };
        if session.edit_custom_ratio(line.trim()) {
            session.set_mode(Mode::Custom);
        } else {
            writeln!(self.out, "{}", tr.t(keys::CLI_INPUT_REJECTED))?;
        }
        Ok(())
    }

    /// 프리셋 목록을 번호와 함께 보여주고 선택을 받는다.
    pub fn handle_preset(&mut self, session: &mut MixSession, tr: &Translator) -> Result<(), AppError> {
        self.list_presets(session.catalog())?;
        let Some(sel) = self.read_line(&tr.t(keys::CLI_PROMPT_SELECT))? else {
            return Ok(());
        };
        let sel = sel.trim();
        let by_index = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| session.catalog().presets().get(i))
            .map(|p| p.id.clone());
        match by_index.or_else(|| session.catalog().find(sel).map(|p| p.id.clone())) {
            Some(id) => {
                session.select_preset(&id);
                session.set_mode(Mode::Preset);
            }
            None => writeln!(self.out, "{}", tr.t(keys::CLI_INVALID_SELECTION))?,
        }
        Ok(())
    }

    pub fn list_presets(&mut self, catalog: &PresetCatalog) -> Result<(), AppError> {
        for (i, p) in catalog.presets().iter().enumerate() {
            writeln!(self.out, "{:>2}) {:<20} {:<12} 1:{}", i + 1, p.label, p.id, p.x)?;
        }
        Ok(())
    }

    pub fn report_copy(&mut self, outcome: CopyOutcome, notice: Option<&str>, tr: &Translator) -> Result<(), AppError> {
        match (outcome, notice) {
            (CopyOutcome::Disabled, _) => writeln!(self.out, "{}", tr.t(keys::CLI_ACTION_DISABLED))?,
            (_, Some(msg)) => writeln!(self.out, "{msg}")?,
            (_, None) => {}
        }
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 None.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }
}
