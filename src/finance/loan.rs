//! 원리금 균등 상환(고정금리) 대출 계산.

use serde::Serialize;

/// 월 상환액을 계산한다.
///
/// 원금이 0 이하이거나 기간이 0이면 상환액은 0이다. 금리가 0이면
/// 공식의 분모가 0이 되므로 원금을 회차 수로 나눈다.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    if principal <= 0.0 || term_years == 0 {
        return 0.0;
    }
    let n = f64::from(term_years * 12);
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

/// 연간 상환액 = 월 상환액 × 12.
pub fn annual_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    monthly_payment(principal, annual_rate_pct, term_years) * 12.0
}

/// 상환 스케줄의 연도별 합계.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// 월 단위로 상환을 진행해 연도별로 묶은 스케줄을 만든다.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_pct: f64,
    term_years: u32,
) -> Vec<AmortizationYear> {
    let payment = monthly_payment(principal, annual_rate_pct, term_years);
    if payment <= 0.0 {
        return Vec::new();
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let mut balance = principal;
    let mut rows = Vec::with_capacity(term_years as usize);
    for year in 1..=term_years {
        let mut row = AmortizationYear {
            year,
            payment: 0.0,
            interest: 0.0,
            principal: 0.0,
            closing_balance: 0.0,
        };
        for _ in 0..12 {
            let interest = balance * r;
            let repaid = (payment - interest).min(balance);
            balance -= repaid;
            row.payment += interest + repaid;
            row.interest += interest;
            row.principal += repaid;
        }
        // 부동소수 잔여분 정리
        if balance.abs() < principal * 1e-9 {
            balance = 0.0;
        }
        row.closing_balance = balance;
        rows.push(row);
    }
    rows
}
