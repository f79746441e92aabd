use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::finance::{CalculationInput, CalculatorTables, TableError};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 계산기 시작 시 사용하는 기본 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub size_key: String,
    /// 0이면 프리셋 중간값
    pub custom_investment: f64,
    pub electricity_rate: f64,
    pub operating_cost_pct: f64,
    pub financing_key: String,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self::from_input(&CalculationInput::default())
    }
}

impl CalculatorDefaults {
    pub fn from_input(input: &CalculationInput) -> Self {
        Self {
            size_key: input.size_key.clone(),
            custom_investment: input.custom_investment.unwrap_or(0.0),
            electricity_rate: input.electricity_rate,
            operating_cost_pct: input.operating_cost_pct,
            financing_key: input.financing_key.clone(),
        }
    }

    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            size_key: self.size_key.clone(),
            custom_investment: (self.custom_investment > 0.0).then_some(self.custom_investment),
            electricity_rate: self.electricity_rate,
            operating_cost_pct: self.operating_cost_pct,
            financing_key: self.financing_key.clone(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/el)
    pub language: String,
    /// 언어팩 디렉터리. 없으면 ./locales
    pub language_pack_dir: Option<String>,
    /// 프리셋/금융 옵션 TOML 파일. 없으면 내장 테이블
    pub tables_path: Option<String>,
    pub calculator: CalculatorDefaults,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            tables_path: None,
            calculator: CalculatorDefaults::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 테이블 파일 오류
    Tables(TableError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialization error: {e}"),
            ConfigError::Tables(e) => write!(f, "table file error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<TableError> for ConfigError {
    fn from(value: TableError) -> Self {
        ConfigError::Tables(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::info!("config loaded from {}", path.display());
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        log::info!("default config written to {}", path.display());
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로(기본 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    /// 계산기에 주입할 테이블을 준비한다. `tables_path`가 상대 경로면
    /// 설정 파일 위치 기준으로 해석한다.
    pub fn load_tables(&self) -> Result<CalculatorTables, ConfigError> {
        let Some(rel) = self.tables_path.as_deref() else {
            return Ok(CalculatorTables::builtin());
        };
        let mut path = PathBuf::from(rel);
        if path.is_relative() {
            if let Some(dir) = self.path.as_deref().and_then(Path::parent) {
                path = dir.join(path);
            }
        }
        let content = fs::read_to_string(&path)?;
        let tables = CalculatorTables::from_toml_str(&content)?;
        log::info!(
            "tables loaded from {} ({} presets, {} financing options)",
            path.display(),
            tables.presets.len(),
            tables.financing.len()
        );
        Ok(tables)
    }
}
