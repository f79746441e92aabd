//! 계산 결과를 화면/보고서용 문자열로 변환한다.
//!
//! 엔진은 음수 이익이나 정의되지 않은 지표를 그대로 돌려주므로, 여기서
//! 대체 문구("N/A", "Not reached")와 경고 톤을 결정한다.

use crate::finance::loan::AmortizationYear;
use crate::finance::{CalculationResult, InvestmentSizePreset, ProjectedYear};
use crate::i18n::{keys, Translator};

/// 표시 색상 힌트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Positive,
    Negative,
}

impl Tone {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Tone::Positive
        } else if value < 0.0 {
            Tone::Negative
        } else {
            Tone::Normal
        }
    }
}

/// 라벨-값 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl MetricRow {
    fn new(tr: &Translator, key: &str, value: String, tone: Tone) -> Self {
        Self {
            label: tr.t(key).to_string(),
            value,
            tone,
        }
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.push(n.to_string());
    groups.reverse();
    groups.join(",")
}

/// 유로 금액을 정수 단위, 천 단위 구분으로 표시한다 (예: `€1,445,400`, `-€12,000`).
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}€{}", group_thousands(rounded.abs() as u64))
}

/// 백분율을 소수 첫째 자리까지 표시한다.
pub fn format_percent(value: f64) -> String {
    let text = format!("{value:.1}");
    // -0.0 방지
    if text == "-0.0" {
        "0.0%".to_string()
    } else {
        format!("{text}%")
    }
}

pub fn format_energy(mwh: f64) -> String {
    format!("{} MWh", group_thousands(mwh.round().max(0.0) as u64))
}

/// 금액. 유한하지 않으면 N/A.
pub fn currency_or_na(value: f64, tr: &Translator) -> String {
    if value.is_finite() {
        format_currency(value)
    } else {
        tr.t(keys::NOT_AVAILABLE).to_string()
    }
}

/// ROI. 정의되지 않았거나 유한하지 않으면 N/A.
pub fn roi_text(roi_pct: Option<f64>, tr: &Translator) -> String {
    match roi_pct {
        Some(v) if v.is_finite() => format_percent(v),
        _ => tr.t(keys::NOT_AVAILABLE).to_string(),
    }
}

/// 회수기간. 정의되지 않으면 N/A, 이익이 0 이하라 회수가 불가능하면 "Not reached".
pub fn payback_text(payback_years: Option<f64>, tr: &Translator) -> String {
    match payback_years {
        None => tr.t(keys::NOT_AVAILABLE).to_string(),
        Some(v) if v.is_finite() && v > 0.0 => {
            tr.fill(keys::UNIT_YEARS, &[("value", format!("{v:.1}"))])
        }
        Some(_) => tr.t(keys::PAYBACK_NEVER).to_string(),
    }
}

pub fn break_even_text(result: &CalculationResult, tr: &Translator) -> String {
    match result.break_even_month {
        Some(m) if m > 0 => tr.fill(keys::UNIT_MONTH, &[("value", m.to_string())]),
        None if result.is_degenerate() => tr.t(keys::NOT_AVAILABLE).to_string(),
        _ => tr.t(keys::PAYBACK_NEVER).to_string(),
    }
}

/// 요약 카드에 표시하는 핵심 지표.
pub fn summary_rows(result: &CalculationResult, tr: &Translator) -> Vec<MetricRow> {
    let roi_tone = result.roi_pct.map(Tone::of).unwrap_or(Tone::Normal);
    vec![
        MetricRow::new(
            tr,
            keys::LABEL_INVESTMENT,
            format_currency(result.total_investment),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_CASH_INVESTED,
            format_currency(result.cash_invested),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_REVENUE,
            format_currency(result.annual_revenue),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_ANNUAL_PROFIT,
            currency_or_na(result.annual_profit, tr),
            Tone::of(result.annual_profit),
        ),
        MetricRow::new(
            tr,
            keys::LABEL_MONTHLY_PROFIT,
            currency_or_na(result.monthly_profit, tr),
            Tone::of(result.monthly_profit),
        ),
        MetricRow::new(tr, keys::LABEL_ROI, roi_text(result.roi_pct, tr), roi_tone),
        MetricRow::new(
            tr,
            keys::LABEL_PAYBACK,
            payback_text(result.payback_years, tr),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_BREAK_EVEN,
            break_even_text(result, tr),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_NPV,
            currency_or_na(result.npv_25y, tr),
            Tone::of(result.npv_25y),
        ),
    ]
}

/// 상세 분해(발전량, 비용, 대출).
pub fn detail_rows(result: &CalculationResult, tr: &Translator) -> Vec<MetricRow> {
    vec![
        MetricRow::new(
            tr,
            keys::LABEL_CAPACITY,
            format!("{} MW", result.capacity_mw),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_FINANCING,
            result.financing_name.clone(),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_ENERGY,
            format_energy(result.annual_energy_mwh),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_REVENUE,
            format_currency(result.annual_revenue),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_OPEX,
            format_currency(-result.operating_costs),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_LOAN_AMOUNT,
            format_currency(result.loan_amount),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_LOAN_PAYMENT,
            format_currency(-result.annual_loan_payment),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_ANNUAL_PROFIT,
            currency_or_na(result.annual_profit, tr),
            Tone::of(result.annual_profit),
        ),
    ]
}

/// 프리셋의 일반적인 범위.
pub fn typical_range_rows(preset: &InvestmentSizePreset, tr: &Translator) -> Vec<MetricRow> {
    let span = |lo: String, hi: String| format!("{lo} – {hi}");
    vec![
        MetricRow::new(
            tr,
            keys::LABEL_INVESTMENT,
            span(
                format_currency(preset.min_investment),
                format_currency(preset.max_investment),
            ),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_REVENUE,
            span(
                format_currency(preset.min_revenue),
                format_currency(preset.max_revenue),
            ),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_ROI,
            span(
                format_percent(preset.min_roi_pct),
                format_percent(preset.max_roi_pct),
            ),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_PAYBACK,
            tr.fill(
                keys::UNIT_YEARS,
                &[(
                    "value",
                    span(
                        format!("{:.1}", preset.min_payback_years),
                        format!("{:.1}", preset.max_payback_years),
                    ),
                )],
            ),
            Tone::Normal,
        ),
        MetricRow::new(
            tr,
            keys::LABEL_NPV,
            span(format_currency(preset.min_npv), format_currency(preset.max_npv)),
            Tone::Normal,
        ),
    ]
}

/// 경고/안내 문구.
pub fn notices<'a>(result: &CalculationResult, tr: &'a Translator) -> Vec<&'a str> {
    let mut out = Vec::new();
    if result.is_degenerate() {
        out.push(tr.t(keys::DEGENERATE_NOTE));
    }
    if result.is_loss() {
        out.push(tr.t(keys::LOSS_WARNING));
    }
    out
}

/// 상환 스케줄 표 (연도, 상환액, 이자, 원금, 잔액).
pub fn schedule_table(rows: &[AmortizationYear]) -> Vec<[String; 5]> {
    rows.iter()
        .map(|r| {
            [
                r.year.to_string(),
                format_currency(r.payment),
                format_currency(r.interest),
                format_currency(r.principal),
                format_currency(r.closing_balance),
            ]
        })
        .collect()
}

/// 누적 현금 흐름 표 (연도, 누적, 할인 누적).
pub fn projection_table(rows: &[ProjectedYear]) -> Vec<[String; 3]> {
    rows.iter()
        .map(|r| {
            [
                r.year.to_string(),
                format_currency(r.cumulative),
                format_currency(r.discounted_cumulative),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1_445_400.0), "€1,445,400");
        assert_eq!(format_currency(999.4), "€999");
        assert_eq!(format_currency(1_000.0), "€1,000");
        assert_eq!(format_currency(-12_000.2), "-€12,000");
    }

    #[test]
    fn currency_has_no_negative_zero() {
        assert_eq!(format_currency(-0.3), "€0");
        assert_eq!(format_percent(-0.01), "0.0%");
    }

    #[test]
    fn energy_is_whole_mwh() {
        assert_eq!(format_energy(9_636.000_000_1), "9,636 MWh");
    }
}
