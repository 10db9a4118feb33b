#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::time::Instant;
use std::{fs, path::Path};
use tracing_subscriber::EnvFilter;
use two_stroke_mix::{
    config::{self, ThemeChoice},
    i18n::{self, keys},
    mix::{self, Mode},
    session::MixSession,
    share::{Clipboard, ClipboardError, SmsComposer},
};

/// 명령행 옵션: --lang xx 또는 -L xx (xx: auto/en/de)
#[derive(Debug, Parser)]
#[command(name = "two_stroke_mix", version)]
struct GuiArgs {
    #[arg(short = 'L', long)]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(two_stroke_mix::DEFAULT_LOG_DIRECTIVE)),
        )
        .init();
    let args = GuiArgs::parse();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([460.0, 720.0])
        .with_min_inner_size([360.0, 520.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Two-Stroke Mix Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// egui 플랫폼 출력으로 클립보드에 쓴다.
struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl Clipboard for EguiClipboard<'_> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.output_mut(|o| o.copied_text = text.to_string());
        Ok(())
    }
}

/// sms: 링크를 OS에 넘긴다.
struct UrlSmsComposer<'a> {
    ctx: &'a egui::Context,
}

impl SmsComposer for UrlSmsComposer<'_> {
    fn compose(&mut self, uri: &str) {
        self.ctx.open_url(egui::OpenUrl::same_tab(uri));
    }
}

fn build_translator(cfg: &config::Config) -> i18n::Translator {
    let lang_code = i18n::resolve_language("auto", Some(cfg.language.as_str()));
    i18n::Translator::new_with_pack(&lang_code, cfg.language_pack_dir.as_deref())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    session: MixSession,
    applied_theme: Option<ThemeChoice>,
    // 설정
    show_settings_modal: bool,
    lang_input: String,
    pack_dir_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = build_translator(&config);
        tracing::info!(lang = tr.language_code(), "GUI language resolved");
        let session = MixSession::new(config.catalog(), config.notice_duration());
        Self {
            lang_input: config.language.clone(),
            pack_dir_input: config.language_pack_dir.clone().unwrap_or_default(),
            config,
            tr,
            session,
            applied_theme: None,
            show_settings_modal: false,
            settings_status: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context, frame: &Frame) {
        if self.applied_theme == Some(self.config.theme) {
            return;
        }
        let visuals = match self.config.theme {
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::System => match frame.info().system_theme {
                Some(eframe::Theme::Light) => egui::Visuals::light(),
                _ => egui::Visuals::dark(),
            },
        };
        ctx.set_visuals(visuals);
        self.applied_theme = Some(self.config.theme);
    }

    /// 설정 창의 언어/언어팩 입력을 반영해 번역기를 다시 만든다.
    fn apply_language(&mut self) {
        self.config.language = self.lang_input.clone();
        let dir = self.pack_dir_input.trim();
        self.config.language_pack_dir = (!dir.is_empty()).then(|| dir.to_string());
        self.tr = build_translator(&self.config);
    }

    fn save_settings(&mut self) {
        self.apply_language();
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut open = self.show_settings_modal;
        let mut save_clicked = false;
        egui::Window::new(tr.t(keys::SETTINGS_TITLE))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                let lang_label = match self.lang_input.as_str() {
                    "en" => "English".to_string(),
                    "de" => "Deutsch".to_string(),
                    _ => tr.t(keys::SETTINGS_LANGUAGE_AUTO),
                };
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(lang_label)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            tr.t(keys::SETTINGS_LANGUAGE_AUTO),
                        );
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "de".into(), "Deutsch");
                    });
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_THEME));
                ui.horizontal(|ui| {
                    for (theme, key) in [
                        (ThemeChoice::System, keys::SETTINGS_THEME_SYSTEM),
                        (ThemeChoice::Light, keys::SETTINGS_THEME_LIGHT),
                        (ThemeChoice::Dark, keys::SETTINGS_THEME_DARK),
                    ] {
                        ui.selectable_value(&mut self.config.theme, theme, tr.t(key));
                    }
                });
                ui.separator();
                ui.checkbox(
                    &mut self.config.show_fluid_ounces,
                    tr.t(keys::SETTINGS_FLUID_OUNCES),
                );
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_PACK_DIR));
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.pack_dir_input);
                    if ui.button(tr.t(keys::SETTINGS_PACK_BROWSE)).clicked() {
                        if let Some(dir) = FileDialog::new().pick_folder() {
                            self.pack_dir_input = dir.display().to_string();
                        }
                    }
                });
                ui.separator();
                if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
        if save_clicked {
            self.save_settings();
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui, now: Instant) {
        let tr = self.tr.clone();
        let ctx = ui.ctx().clone();
        let outcome = self.session.outcome();
        let error_color = ui.visuals().error_fg_color;
        let fuel_err = outcome.error.is_some_and(|e| e.is_fuel_error());
        let ratio_err = outcome.error.is_some_and(|e| e.is_ratio_error());

        // 연료량
        ui.horizontal(|ui| {
            ui.strong(tr.t(keys::FUEL_LABEL));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(tr.t(keys::FUEL_UNIT));
            });
        });
        let mut fuel = self.session.state().fuel_input.clone();
        let fuel_resp = ui
            .horizontal(|ui| {
                let mut edit = egui::TextEdit::singleline(&mut fuel)
                    .hint_text(tr.t(keys::FUEL_PLACEHOLDER))
                    .desired_width(ui.available_width() - 24.0);
                if fuel_err {
                    edit = edit.text_color(error_color);
                }
                let resp = ui.add(edit);
                ui.label("L");
                resp
            })
            .inner;
        if fuel_resp.changed() {
            self.session.edit_fuel(&fuel);
        }
        ui.add_space(12.0);

        // 모드 전환
        ui.strong(tr.t(keys::MODE_LABEL));
        let mut mode = self.session.state().mode;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, Mode::Preset, tr.t(keys::MODE_PRESET));
            ui.selectable_value(&mut mode, Mode::Custom, tr.t(keys::MODE_CUSTOM));
        });
        if mode != self.session.state().mode {
            self.session.set_mode(mode);
        }
        ui.add_space(12.0);

        match mode {
            Mode::Preset => {
                ui.strong(tr.t(keys::PRESET_LABEL));
                let mut selected = self.session.state().selected_preset_id.clone();
                let selected_label = self
                    .session
                    .catalog()
                    .find(&selected)
                    .map(|p| p.label.clone())
                    .unwrap_or_else(|| tr.t(keys::PRESET_SELECT_HINT));
                egui::ComboBox::from_id_source("preset_choice")
                    .selected_text(selected_label)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for p in self.session.catalog().presets() {
                            ui.selectable_value(&mut selected, p.id.clone(), p.label.as_str());
                        }
                    });
                if selected != self.session.state().selected_preset_id {
                    self.session.select_preset(&selected);
                }
                ui.small(mix::preset_hint(
                    self.session.state(),
                    self.session.catalog(),
                    &tr,
                ));
            }
            Mode::Custom => {
                ui.horizontal(|ui| {
                    ui.strong(tr.t(keys::CUSTOM_LABEL));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small("1 : X");
                    });
                });
                let mut ratio = self.session.state().custom_ratio_input.clone();
                let ratio_resp = ui
                    .horizontal(|ui| {
                        let mut edit = egui::TextEdit::singleline(&mut ratio)
                            .hint_text(tr.t(keys::CUSTOM_PLACEHOLDER))
                            .desired_width(ui.available_width() - 24.0);
                        if ratio_err {
                            edit = edit.text_color(error_color);
                        }
                        let resp = ui.add(edit);
                        ui.label("X");
                        resp
                    })
                    .inner;
                if ratio_resp.changed() {
                    self.session.edit_custom_ratio(&ratio);
                }
                ui.small(tr.t(keys::CUSTOM_HINT));
            }
        }
        ui.add_space(16.0);

        // 결과 카드. 입력 변경이 같은 프레임에 반영되도록 다시 계산한다.
        let outcome = self.session.outcome();
        let copy_text = self.session.copy_text(&tr);
        let mut reset_clicked = false;
        let mut copy_clicked = false;
        let mut share_clicked = false;
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(format!("{}:", tr.t(keys::SELECTED_RATIO)));
                    ui.strong(mix::ratio_display(&outcome));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(tr.t(keys::RESET)).clicked() {
                            reset_clicked = true;
                        }
                    });
                });
                ui.small(tr.t(keys::FORMULA_HINT));
                ui.add_space(10.0);

                if let Some(err) = mix::error_text(&outcome, &tr) {
                    ui.colored_label(error_color, err);
                } else if let Some(result) = outcome.result() {
                    ui.small(tr.t(keys::OIL_NEEDED).to_uppercase());
                    ui.label(
                        egui::RichText::new(mix::result_display(&result, tr.language()))
                            .size(32.0)
                            .strong(),
                    );
                    ui.small(mix::exact_display(&result, &tr));
                    if self.config.show_fluid_ounces {
                        ui.small(mix::fluid_ounces_display(&result, &tr));
                    }
                }
                ui.add_space(10.0);
                let enabled = !copy_text.is_empty();
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(enabled, egui::Button::new(tr.t(keys::COPY)))
                        .clicked()
                    {
                        copy_clicked = true;
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new(tr.t(keys::SHARE)))
                        .clicked()
                    {
                        share_clicked = true;
                    }
                });
            });

        if reset_clicked {
            self.session.reset(&tr, now);
        }
        if copy_clicked {
            self.session.copy(&mut EguiClipboard { ctx: &ctx }, &tr, now);
        }
        if share_clicked {
            self.session.share(&mut UrlSmsComposer { ctx: &ctx }, &tr);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.apply_theme(ctx, frame);
        let now = Instant::now();
        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(tr.t(keys::APP_TITLE));
                    ui.small(tr.t(keys::APP_SUBTITLE));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(tr.t(keys::SETTINGS_TITLE)).clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small(tr.t(keys::FOOTER_DISCLAIMER));
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_form(ui, now));
        });

        // 일시 알림
        if let Some(msg) = self.session.notice(now).map(str::to_owned) {
            egui::Area::new(egui::Id::new("notice"))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 64.0))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(msg);
                    });
                });
        }
        if let Some(remaining) = self.session.notice_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
