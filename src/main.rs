use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use solar_farm_roi::analytics::LogSink;
use solar_farm_roi::finance::CalculationInput;
use solar_farm_roi::i18n::Translator;
use solar_farm_roi::session::CalculatorSession;
use solar_farm_roi::{app, config, i18n::keys, report, ui_cli};

/// 태양광 발전소 투자 수익성 계산기 (CLI).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (auto/en/el)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 대화형 메뉴 (기본값)
    Interactive,
    /// 한 번 계산하고 결과를 출력
    Calc {
        #[command(flatten)]
        params: CalcParams,
        /// 상세 분해 출력
        #[arg(long)]
        detail: bool,
        /// 보고서 저장 경로 (.txt / .json)
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 모든 금융 옵션 비교
    Compare {
        #[command(flatten)]
        params: CalcParams,
    },
    /// 규모 프리셋과 금융 옵션 목록
    Presets,
}

/// 생략한 값은 설정 파일의 기본값을 쓴다.
#[derive(clap::Args, Debug)]
struct CalcParams {
    /// 규모 프리셋 키 (예: 5MW)
    #[arg(long)]
    size: Option<String>,
    /// 총 투자비 [€]. 0이면 프리셋 중간값
    #[arg(long)]
    investment: Option<f64>,
    /// 전력 단가 [€/kWh]
    #[arg(long)]
    rate: Option<f64>,
    /// 운영비 [% of revenue]
    #[arg(long)]
    opex: Option<f64>,
    /// 금융 옵션 키 (예: BANK_70)
    #[arg(long)]
    financing: Option<String>,
}

impl CalcParams {
    fn apply(self, mut input: CalculationInput) -> CalculationInput {
        if let Some(size) = self.size {
            input.size_key = size;
            input.custom_investment = None;
        }
        if let Some(v) = self.investment {
            input.custom_investment = (v != 0.0).then_some(v);
        }
        if let Some(v) = self.rate {
            input.electricity_rate = v;
        }
        if let Some(v) = self.opex {
            input.operating_cost_pct = v;
        }
        if let Some(f) = self.financing {
            input.financing_key = f;
        }
        input
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let mut cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let tr = app::translator_for(&cfg, cli.lang.as_deref());
    match try_run(cli, &mut cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), app::AppError> {
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(cfg, cli.lang.as_deref())?,
        Command::Calc {
            params,
            detail,
            report: report_path,
        } => {
            let input = params.apply(cfg.calculator.to_input());
            let session = CalculatorSession::new(cfg.load_tables()?, input, LogSink);
            session.result().map_err(|e| e.clone())?;
            ui_cli::print_session(tr, &session, detail);
            if let Some(path) = report_path {
                if let Some(report) = session.build_report() {
                    report::save_report(&report, Path::new(&path), tr)?;
                    println!(
                        "{}",
                        tr.fill(keys::REPORT_SAVED, &[("path", path.display().to_string())])
                    );
                }
            }
        }
        Command::Compare { params } => {
            let input = params.apply(cfg.calculator.to_input());
            let session = CalculatorSession::new(cfg.load_tables()?, input, LogSink);
            ui_cli::print_comparison(tr, &session.comparison()?);
        }
        Command::Presets => ui_cli::print_tables(tr, &cfg.load_tables()?),
    }
    Ok(())
}
