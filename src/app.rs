use crate::config::{CalculatorDefaults, Config, ConfigError};
use crate::finance::CalculationError;
use crate::i18n::{self, keys, Translator};
use crate::report::ReportError;
use crate::session::CalculatorSession;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정/테이블 로드 오류
    Config(ConfigError),
    /// 계산 입력 오류
    Calculation(CalculationError),
    /// 보고서 저장 오류
    Report(ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Calculation(e) => write!(f, "calculation error: {e}"),
            AppError::Report(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CalculationError> for AppError {
    fn from(value: CalculationError) -> Self {
        AppError::Calculation(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// 설정에 맞는 번역기를 만든다. `cli_lang`이 있으면 설정보다 우선한다.
pub fn translator_for(config: &Config, cli_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(&config.language));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, cli_lang: Option<&str>) -> Result<(), AppError> {
    let mut tr = translator_for(config, cli_lang);
    let tables = config.load_tables()?;
    let mut session = CalculatorSession::with_log_sink(tables, config.calculator.to_input());
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Calculator => {
                ui_cli::handle_calculator(&tr, &mut session)?;
                config.calculator = CalculatorDefaults::from_input(session.input());
            }
            MenuChoice::Compare => ui_cli::handle_compare(&tr, &session)?,
            MenuChoice::Presets => ui_cli::handle_presets(&tr, &session),
            MenuChoice::Report => ui_cli::handle_report(&tr, &session)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    tr = translator_for(config, None);
                }
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
