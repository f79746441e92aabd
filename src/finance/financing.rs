use serde::{Deserialize, Serialize};

use super::tables::TableError;

/// 자본 구조(자기자본/대출) 선택지.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingOption {
    /// 조회 키 (예: "BANK_70")
    pub key: String,
    /// 표시 이름
    pub name: String,
    /// 자기자본(계약금) 비율 [%]
    pub down_payment_pct: f64,
    /// 대출 비율 [%]. 항상 100 - 자기자본 비율.
    pub loan_pct: f64,
    /// 명목 연이율 [%]
    pub interest_rate_pct: f64,
    /// 대출 기간 [년]
    pub loan_term_years: u32,
    pub description: String,
}

impl FinancingOption {
    /// 자기자본 비율로부터 대출 비율을 채워 넣어 생성한다.
    pub fn new(
        key: &str,
        name: &str,
        down_payment_pct: f64,
        interest_rate_pct: f64,
        loan_term_years: u32,
        description: &str,
    ) -> Result<Self, TableError> {
        let option = Self {
            key: key.to_string(),
            name: name.to_string(),
            down_payment_pct,
            loan_pct: 100.0 - down_payment_pct,
            interest_rate_pct,
            loan_term_years,
            description: description.to_string(),
        };
        option.validate()?;
        Ok(option)
    }

    /// 비율 합계와 범위를 검사한다.
    pub fn validate(&self) -> Result<(), TableError> {
        let pct_ok = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !pct_ok(self.down_payment_pct) || !pct_ok(self.loan_pct) {
            return Err(TableError::InvalidFinancing {
                key: self.key.clone(),
                reason: "percentages must lie within 0..=100",
            });
        }
        if (self.down_payment_pct + self.loan_pct - 100.0).abs() > 1e-9 {
            return Err(TableError::InvalidFinancing {
                key: self.key.clone(),
                reason: "down payment and loan percentages must sum to 100",
            });
        }
        if !self.interest_rate_pct.is_finite() || self.interest_rate_pct < 0.0 {
            return Err(TableError::InvalidFinancing {
                key: self.key.clone(),
                reason: "interest rate must be a non-negative number",
            });
        }
        if self.loan_pct > 0.0 && self.loan_term_years == 0 {
            return Err(TableError::InvalidFinancing {
                key: self.key.clone(),
                reason: "a loan share needs a term of at least one year",
            });
        }
        Ok(())
    }

    pub fn is_cash(&self) -> bool {
        self.loan_pct <= 0.0
    }
}

/// 순서를 보존하는 금융 옵션 조회 테이블.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancingTable {
    options: Vec<FinancingOption>,
}

impl FinancingTable {
    pub fn new(options: Vec<FinancingOption>) -> Self {
        Self { options }
    }

    pub fn get(&self, key: &str) -> Option<&FinancingOption> {
        self.options.iter().find(|o| o.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinancingOption> {
        self.options.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// 내장 현금/70%/80% 대출 옵션.
    pub fn builtin() -> Self {
        Self::new(vec![
            FinancingOption {
                key: "CASH".into(),
                name: "Cash Purchase".into(),
                down_payment_pct: 100.0,
                loan_pct: 0.0,
                interest_rate_pct: 0.0,
                loan_term_years: 0,
                description: "Full payment upfront, no debt service.".into(),
            },
            FinancingOption {
                key: "BANK_70".into(),
                name: "Bank Financing 70%".into(),
                down_payment_pct: 30.0,
                loan_pct: 70.0,
                interest_rate_pct: 4.5,
                loan_term_years: 15,
                description: "30% equity, 70% bank loan at 4.5% over 15 years.".into(),
            },
            FinancingOption {
                key: "BANK_80".into(),
                name: "Bank Financing 80%".into(),
                down_payment_pct: 20.0,
                loan_pct: 80.0,
                interest_rate_pct: 5.0,
                loan_term_years: 15,
                description: "20% equity, 80% bank loan at 5.0% over 15 years.".into(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_options_satisfy_split_invariant() {
        for option in FinancingTable::builtin().iter() {
            option.validate().expect("builtin option");
            assert_eq!(option.down_payment_pct + option.loan_pct, 100.0);
        }
    }

    #[test]
    fn new_derives_loan_share() {
        let o = FinancingOption::new("BANK_60", "Bank 60%", 40.0, 4.0, 10, "").unwrap();
        assert_eq!(o.loan_pct, 60.0);
        assert!(!o.is_cash());
    }

    #[test]
    fn new_rejects_out_of_range_down_payment() {
        let err = FinancingOption::new("BAD", "Bad", 120.0, 4.0, 10, "").unwrap_err();
        assert!(matches!(err, TableError::InvalidFinancing { .. }));
    }

    #[test]
    fn loan_without_term_is_rejected() {
        let err = FinancingOption::new("BANK_0Y", "No term", 30.0, 4.5, 0, "").unwrap_err();
        assert!(matches!(err, TableError::InvalidFinancing { key, .. } if key == "BANK_0Y"));
        // 대출이 없으면 기간 0이 허용된다.
        FinancingOption::new("CASH", "Cash", 100.0, 0.0, 0, "").expect("cash option");
    }
}
