use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::financing::FinancingTable;
use super::presets::{InvestmentSizePreset, PresetTable};

/// 프리셋/금융 옵션 테이블 검증 오류.
#[derive(Debug)]
pub enum TableError {
    /// 테이블이 비어 있음
    Empty(&'static str),
    /// 같은 키가 두 번 이상 등장
    DuplicateKey { table: &'static str, key: String },
    /// 프리셋 값이 잘못됨
    InvalidPreset { key: String, reason: &'static str },
    /// 금융 옵션 값이 잘못됨
    InvalidFinancing { key: String, reason: &'static str },
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Empty(table) => write!(f, "{table} table is empty"),
            TableError::DuplicateKey { table, key } => {
                write!(f, "duplicate key '{key}' in {table} table")
            }
            TableError::InvalidPreset { key, reason } => {
                write!(f, "invalid preset '{key}': {reason}")
            }
            TableError::InvalidFinancing { key, reason } => {
                write!(f, "invalid financing option '{key}': {reason}")
            }
            TableError::Parse(e) => write!(f, "table file parse error: {e}"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<toml::de::Error> for TableError {
    fn from(value: toml::de::Error) -> Self {
        TableError::Parse(value)
    }
}

/// 계산기에 주입되는 정적 조회 테이블 묶음.
///
/// TOML 테이블 파일 형식:
///
/// ```toml
/// [[presets]]
/// key = "1MW"
/// capacity_mw = 1.0
/// min_investment = 850000.0
/// # ...
///
/// [[financing]]
/// key = "CASH"
/// name = "Cash Purchase"
/// down_payment_pct = 100.0
/// loan_pct = 0.0
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorTables {
    pub presets: PresetTable,
    pub financing: FinancingTable,
}

impl Default for CalculatorTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CalculatorTables {
    pub fn builtin() -> Self {
        Self {
            presets: PresetTable::builtin(),
            financing: FinancingTable::builtin(),
        }
    }

    /// TOML 문자열에서 테이블을 읽고 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, TableError> {
        let tables: CalculatorTables = toml::from_str(src)?;
        tables.validate()?;
        Ok(tables)
    }

    /// 키 중복, 빈 테이블, 프리셋 범위, 금융 옵션 비율을 검사한다.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.presets.is_empty() {
            return Err(TableError::Empty("preset"));
        }
        if self.financing.is_empty() {
            return Err(TableError::Empty("financing"));
        }

        let mut seen = HashSet::new();
        for preset in self.presets.iter() {
            if !seen.insert(preset.key.as_str()) {
                return Err(TableError::DuplicateKey {
                    table: "preset",
                    key: preset.key.clone(),
                });
            }
            validate_preset(preset)?;
        }

        let mut seen = HashSet::new();
        for option in self.financing.iter() {
            if !seen.insert(option.key.as_str()) {
                return Err(TableError::DuplicateKey {
                    table: "financing",
                    key: option.key.clone(),
                });
            }
            option.validate()?;
        }
        Ok(())
    }
}

fn validate_preset(preset: &InvestmentSizePreset) -> Result<(), TableError> {
    let invalid = |reason| TableError::InvalidPreset {
        key: preset.key.clone(),
        reason,
    };
    if !(preset.capacity_mw.is_finite() && preset.capacity_mw > 0.0) {
        return Err(invalid("capacity must be a positive number of MW"));
    }
    if !(preset.min_investment.is_finite() && preset.min_investment > 0.0) {
        return Err(invalid("minimum investment must be positive"));
    }
    if !(preset.max_investment.is_finite() && preset.max_investment >= preset.min_investment) {
        return Err(invalid("maximum investment must not be below the minimum"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_valid() {
        CalculatorTables::builtin().validate().expect("builtin tables");
    }

    #[test]
    fn builtin_tables_survive_toml() {
        let src = toml::to_string_pretty(&CalculatorTables::builtin()).unwrap();
        let parsed = CalculatorTables::from_toml_str(&src).unwrap();
        assert_eq!(parsed, CalculatorTables::builtin());
    }

    #[test]
    fn duplicate_financing_key_rejected() {
        let mut tables = CalculatorTables::builtin();
        let mut options: Vec<_> = tables.financing.iter().cloned().collect();
        options.push(options[0].clone());
        tables.financing = FinancingTable::new(options);
        let err = tables.validate().unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey { table: "financing", .. }));
    }

    #[test]
    fn loan_row_without_term_rejected() {
        let mut options: Vec<_> = FinancingTable::builtin().iter().cloned().collect();
        let bank = options
            .iter_mut()
            .find(|o| o.key == "BANK_70")
            .expect("BANK_70 row");
        bank.loan_term_years = 0;
        let tables = CalculatorTables {
            presets: PresetTable::builtin(),
            financing: FinancingTable::new(options),
        };
        let src = toml::to_string_pretty(&tables).unwrap();
        assert!(matches!(
            CalculatorTables::from_toml_str(&src),
            Err(TableError::InvalidFinancing { key, .. }) if key == "BANK_70"
        ));
    }

    #[test]
    fn inverted_investment_range_rejected() {
        let mut presets: Vec<_> = PresetTable::builtin().iter().cloned().collect();
        presets[0].max_investment = presets[0].min_investment - 1.0;
        let tables = CalculatorTables {
            presets: PresetTable::new(presets),
            financing: FinancingTable::builtin(),
        };
        assert!(matches!(
            tables.validate(),
            Err(TableError::InvalidPreset { .. })
        ));
    }
}
