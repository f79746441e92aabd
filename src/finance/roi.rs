//! 태양광 발전소 투자 수익성(ROI) 계산 엔진.
//!
//! 입력과 주입된 조회 테이블만으로 결과를 만드는 순수 함수 모음이다.
//! 발전량은 일사량 모델이 아니라 고정 설비이용률로 산정하고, NPV는
//! 열화나 요금 인상 없이 동일한 연간 이익이 25년간 발생한다고 본다.

use serde::{Deserialize, Serialize};

use super::financing::FinancingTable;
use super::loan;
use super::presets::PresetTable;

/// 지역 평균 태양광 설비이용률
pub const CAPACITY_FACTOR: f64 = 0.22;
/// 평년 기준 연간 시간
pub const HOURS_PER_YEAR: f64 = 8760.0;
/// MWh → kWh
pub const KWH_PER_MWH: f64 = 1000.0;
/// NPV 할인율 (소수)
pub const DISCOUNT_RATE: f64 = 0.08;
/// NPV 분석 기간 [년]
pub const NPV_HORIZON_YEARS: u32 = 25;

pub const ELECTRICITY_RATE_MIN: f64 = 0.10;
pub const ELECTRICITY_RATE_MAX: f64 = 0.35;
pub const OPERATING_COST_MIN_PCT: f64 = 5.0;
pub const OPERATING_COST_MAX_PCT: f64 = 20.0;

/// 사용자가 조정하는 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 선택된 규모 프리셋 키
    pub size_key: String,
    /// 총 투자비 직접 입력 [€]. `None` 또는 0이면 프리셋 중간값을 쓴다.
    pub custom_investment: Option<f64>,
    /// 전력 판매 단가 [€/kWh]
    pub electricity_rate: f64,
    /// 운영비 비율 [% of revenue]
    pub operating_cost_pct: f64,
    /// 선택된 금융 옵션 키
    pub financing_key: String,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            size_key: "5MW".into(),
            custom_investment: None,
            electricity_rate: 0.15,
            operating_cost_pct: 8.0,
            financing_key: "CASH".into(),
        }
    }
}

/// 한 번의 계산 결과. 이전 결과를 통째로 대체한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub size_key: String,
    pub financing_key: String,
    pub financing_name: String,
    pub capacity_mw: f64,
    /// 총 사업비 [€]
    pub total_investment: f64,
    /// 연간 발전량 [MWh]
    pub annual_energy_mwh: f64,
    /// 연간 전력 판매 수익 [€]
    pub annual_revenue: f64,
    /// 연간 운영비 [€]
    pub operating_costs: f64,
    /// 연간 원리금 상환액 [€]
    pub annual_loan_payment: f64,
    /// 운영비와 원리금 상환 후 연간 이익 [€]. 음수일 수 있다.
    pub annual_profit: f64,
    /// 투입 현금 대비 수익률 [%]. 투입 현금이 0이면 `None`.
    pub roi_pct: Option<f64>,
    /// 투입 현금 회수기간 [년]. 투입 현금이 0이면 `None`.
    pub payback_years: Option<f64>,
    /// 25년 순현재가치 [€]
    pub npv_25y: f64,
    pub monthly_profit: f64,
    /// ceil(회수기간 × 12). 회수기간이 정의되지 않거나 무한대면 `None`.
    pub break_even_month: Option<i64>,
    /// 실제 투입 현금(자기자본) [€]
    pub cash_invested: f64,
    /// 대출 원금 [€]
    pub loan_amount: f64,
}

impl CalculationResult {
    /// 투입 현금이 0이라 현금 기준 지표를 정의할 수 없는 경우.
    pub fn is_degenerate(&self) -> bool {
        self.roi_pct.is_none()
    }

    /// 연간 이익이 음수인 경우. 정확히 0이면 손실이 아니다.
    pub fn is_loss(&self) -> bool {
        self.annual_profit < 0.0
    }
}

/// 계산 입력 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// 프리셋 테이블에 없는 규모 키
    InvalidPresetKey(String),
    /// 금융 테이블에 없는 금융 옵션 키
    InvalidFinancingKey(String),
    /// 전력 단가가 허용 범위를 벗어남
    ElectricityRateOutOfRange(f64),
    /// 운영비 비율이 허용 범위를 벗어남
    OperatingCostOutOfRange(f64),
    /// 음수 또는 유한하지 않은 투자비 입력
    InvalidInvestment(f64),
}

impl std::fmt::Display for CalculationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationError::InvalidPresetKey(k) => write!(f, "unknown investment size '{k}'"),
            CalculationError::InvalidFinancingKey(k) => {
                write!(f, "unknown financing option '{k}'")
            }
            CalculationError::ElectricityRateOutOfRange(v) => write!(
                f,
                "electricity rate {v} €/kWh outside {ELECTRICITY_RATE_MIN}..={ELECTRICITY_RATE_MAX}"
            ),
            CalculationError::OperatingCostOutOfRange(v) => write!(
                f,
                "operating cost {v}% outside {OPERATING_COST_MIN_PCT}..={OPERATING_COST_MAX_PCT}"
            ),
            CalculationError::InvalidInvestment(v) => {
                write!(f, "investment override must be a non-negative amount, got {v}")
            }
        }
    }
}

impl std::error::Error for CalculationError {}

/// 현가 계수: (1 - (1+r)^-n) / r. r = 0이면 n.
pub fn annuity_factor(rate: f64, years: u32) -> f64 {
    if rate == 0.0 {
        return f64::from(years);
    }
    (1.0 - (1.0 + rate).powi(-(years as i32))) / rate
}

/// 입력과 테이블로 수익성 결과를 계산한다.
pub fn compute_result(
    input: &CalculationInput,
    presets: &PresetTable,
    financing: &FinancingTable,
) -> Result<CalculationResult, CalculationError> {
    let preset = presets
        .get(&input.size_key)
        .ok_or_else(|| CalculationError::InvalidPresetKey(input.size_key.clone()))?;
    let option = financing
        .get(&input.financing_key)
        .ok_or_else(|| CalculationError::InvalidFinancingKey(input.financing_key.clone()))?;

    let rate = input.electricity_rate;
    if !(ELECTRICITY_RATE_MIN..=ELECTRICITY_RATE_MAX).contains(&rate) {
        return Err(CalculationError::ElectricityRateOutOfRange(rate));
    }
    let opex_pct = input.operating_cost_pct;
    if !(OPERATING_COST_MIN_PCT..=OPERATING_COST_MAX_PCT).contains(&opex_pct) {
        return Err(CalculationError::OperatingCostOutOfRange(opex_pct));
    }
    let total_investment = match input.custom_investment {
        Some(v) if !v.is_finite() || v < 0.0 => {
            return Err(CalculationError::InvalidInvestment(v));
        }
        Some(v) if v > 0.0 => v,
        _ => preset.midpoint_investment(),
    };

    let annual_energy_mwh = preset.capacity_mw * CAPACITY_FACTOR * HOURS_PER_YEAR;
    let annual_revenue = annual_energy_mwh * rate * KWH_PER_MWH;
    let operating_costs = annual_revenue * (opex_pct / 100.0);

    let cash_invested = total_investment * (option.down_payment_pct / 100.0);
    let loan_amount = total_investment * (option.loan_pct / 100.0);
    let annual_loan_payment = if loan_amount > 0.0 && option.loan_term_years > 0 {
        loan::annual_payment(loan_amount, option.interest_rate_pct, option.loan_term_years)
    } else {
        0.0
    };

    let annual_profit = annual_revenue - operating_costs - annual_loan_payment;

    let (roi_pct, payback_years, break_even_month) = cash_metrics(annual_profit, cash_invested);

    let npv_25y = -cash_invested + annual_profit * annuity_factor(DISCOUNT_RATE, NPV_HORIZON_YEARS);

    Ok(CalculationResult {
        size_key: preset.key.clone(),
        financing_key: option.key.clone(),
        financing_name: option.name.clone(),
        capacity_mw: preset.capacity_mw,
        total_investment,
        annual_energy_mwh,
        annual_revenue,
        operating_costs,
        annual_loan_payment,
        annual_profit,
        roi_pct,
        payback_years,
        npv_25y,
        monthly_profit: annual_profit / 12.0,
        break_even_month,
        cash_invested,
        loan_amount,
    })
}

/// 투입 현금 기준 (ROI %, 회수기간, 손익분기 월).
///
/// 투입 현금이 0이면 모두 `None`. 이익이 0이면 회수기간은 무한대이고
/// 손익분기 월은 `None`이다.
fn cash_metrics(annual_profit: f64, cash_invested: f64) -> (Option<f64>, Option<f64>, Option<i64>) {
    if cash_invested == 0.0 {
        return (None, None, None);
    }
    let roi_pct = annual_profit / cash_invested * 100.0;
    let payback_years = cash_invested / annual_profit;
    let break_even_month = payback_years
        .is_finite()
        .then(|| (payback_years * 12.0).ceil() as i64);
    (Some(roi_pct), Some(payback_years), break_even_month)
}

/// 같은 입력을 테이블의 모든 금융 옵션으로 계산한다 (테이블 순서 유지).
pub fn compare_financing(
    input: &CalculationInput,
    presets: &PresetTable,
    financing: &FinancingTable,
) -> Result<Vec<CalculationResult>, CalculationError> {
    financing
        .keys()
        .map(|key| {
            let scenario = CalculationInput {
                financing_key: key.to_string(),
                ..input.clone()
            };
            compute_result(&scenario, presets, financing)
        })
        .collect()
}

/// 결과의 대출 원금에 대한 상환 스케줄. 대출이 없거나 옵션을 찾지 못하면 빈 목록.
pub fn loan_schedule(
    result: &CalculationResult,
    financing: &FinancingTable,
) -> Vec<loan::AmortizationYear> {
    financing
        .get(&result.financing_key)
        .map(|o| {
            loan::amortization_schedule(result.loan_amount, o.interest_rate_pct, o.loan_term_years)
        })
        .unwrap_or_default()
}

/// 연도별 누적 현금 흐름.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedYear {
    pub year: u32,
    pub profit: f64,
    /// -투입현금 + 누적 이익
    pub cumulative: f64,
    /// -투입현금 + 할인 누적 이익
    pub discounted_cumulative: f64,
}

/// 결과의 연간 이익을 `years`년 동안 그대로 이어 붙인 현금 흐름.
pub fn project_cash_flows(result: &CalculationResult, years: u32) -> Vec<ProjectedYear> {
    let mut cumulative = -result.cash_invested;
    let mut discounted = -result.cash_invested;
    (1..=years)
        .map(|year| {
            cumulative += result.annual_profit;
            discounted += result.annual_profit / (1.0 + DISCOUNT_RATE).powi(year as i32);
            ProjectedYear {
                year,
                profit: result.annual_profit,
                cumulative,
                discounted_cumulative: discounted,
            }
        })
        .collect()
}
