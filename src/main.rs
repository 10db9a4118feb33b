use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use two_stroke_mix::app::{self, CalcRequest, Collaborators};
use two_stroke_mix::config::{self, DEFAULT_CONFIG_PATH};
use two_stroke_mix::i18n::{self, keys, Translator};
use two_stroke_mix::session::MixSession;
use two_stroke_mix::share::{Osc52Clipboard, PrintSmsComposer};
use two_stroke_mix::ui_cli::Console;

/// 2행정 혼합유 계산기(터미널).
#[derive(Debug, Parser)]
#[command(name = "two_stroke_mix_cli", version, about)]
struct Cli {
    /// 표시 언어: auto / en / de
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어팩 디렉터리(설정값보다 우선)
    #[arg(long, global = true)]
    pack_dir: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 계산하고 종료한다.
    Calc {
        /// 연료량 [L]
        #[arg(short, long)]
        fuel: String,
        /// 프리셋 id (예: mz-33)
        #[arg(short, long, conflicts_with = "ratio")]
        preset: Option<String>,
        /// 사용자 지정 혼합비 X (1:X)
        #[arg(short, long)]
        ratio: Option<String>,
        /// 결과를 클립보드에 복사(OSC 52)
        #[arg(long)]
        copy: bool,
        /// SMS 공유 링크 출력
        #[arg(long)]
        share: bool,
    },
    /// 프리셋 목록을 출력한다.
    Presets,
    /// 메뉴 방식으로 입력한다(기본값).
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(two_stroke_mix::DEFAULT_LOG_DIRECTIVE)),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err((prefix, err)) => {
            eprintln!("{prefix}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<bool, (String, app::AppError)> {
    let cfg = config::load_or_default_at(&cli.config)
        .map_err(|e| (Translator::new("en").t(keys::ERROR_PREFIX), e.into()))?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let pack_dir = cli.pack_dir.as_deref().or(cfg.language_pack_dir.as_deref());
    let tr = Translator::new_with_pack(&lang, pack_dir);
    tracing::info!(lang = tr.language_code(), "language resolved");

    let mut session = MixSession::new(cfg.catalog(), cfg.notice_duration());
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let mut clipboard = Osc52Clipboard::new(io::stdout());
    let mut sms = PrintSmsComposer::new(io::stdout(), tr.t(keys::CLI_SMS_LINK));
    let collab = Collaborators {
        clipboard: &mut clipboard,
        sms: &mut sms,
    };

    let result = match cli.command.unwrap_or(Command::Interactive) {
        Command::Calc {
            fuel,
            preset,
            ratio,
            copy,
            share,
        } => {
            let req = CalcRequest {
                fuel,
                preset,
                ratio,
                copy,
                share,
            };
            app::calculate(&req, &mut session, &tr, cfg.show_fluid_ounces, &mut console, collab)
        }
        Command::Presets => console.list_presets(session.catalog()).map(|_| true),
        Command::Interactive => {
            app::run(&mut session, &tr, cfg.show_fluid_ounces, &mut console, collab).map(|_| true)
        }
    };
    result.map_err(|e| (tr.t(keys::ERROR_PREFIX), e))
}
