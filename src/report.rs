//! "보고서 다운로드" 기능. 텍스트 또는 JSON 파일로 저장한다.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::finance::loan::AmortizationYear;
use crate::finance::roi::NPV_HORIZON_YEARS;
use crate::finance::{
    loan_schedule, project_cash_flows, CalculationInput, CalculationResult, CalculatorTables,
    InvestmentSizePreset, ProjectedYear,
};
use crate::i18n::{keys, Translator};
use crate::view;

/// 보고서 저장 오류.
#[derive(Debug)]
pub enum ReportError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "report write failed: {e}"),
            ReportError::Json(e) => write!(f, "report serialization failed: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        ReportError::Io(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

/// 파일 확장자로 정하는 보고서 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

/// 한 번의 계산을 정리한 보고서.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub typical_range: Option<InvestmentSizePreset>,
    pub amortization: Vec<AmortizationYear>,
    pub projection: Vec<ProjectedYear>,
}

impl Report {
    pub fn build(
        input: &CalculationInput,
        result: &CalculationResult,
        tables: &CalculatorTables,
    ) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            input: input.clone(),
            result: result.clone(),
            typical_range: tables.presets.get(&result.size_key).cloned(),
            amortization: loan_schedule(result, &tables.financing),
            projection: project_cash_flows(result, NPV_HORIZON_YEARS),
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 사람이 읽는 텍스트 보고서.
    pub fn to_text(&self, tr: &Translator) -> String {
        let mut out = String::new();
        let r = &self.result;
        // String에 대한 write!는 실패하지 않는다.
        let _ = writeln!(out, "{}", tr.t(keys::REPORT_TITLE));
        let _ = writeln!(out, "{}: {}", tr.t(keys::REPORT_GENERATED), self.generated_at);

        let _ = writeln!(out, "\n[{}]", tr.t(keys::REPORT_INPUTS));
        let _ = writeln!(out, "{}: {}", tr.t(keys::LABEL_SIZE), self.input.size_key);
        let _ = writeln!(out, "{}: {}", tr.t(keys::LABEL_FINANCING), r.financing_name);
        let _ = writeln!(
            out,
            "{}: €{:.2}/kWh",
            tr.t(keys::LABEL_ELECTRICITY_RATE),
            self.input.electricity_rate
        );
        let _ = writeln!(
            out,
            "{}: {}",
            tr.t(keys::LABEL_OPEX_PCT),
            view::format_percent(self.input.operating_cost_pct)
        );

        write_rows(&mut out, tr.t(keys::SUMMARY_HEADING), &view::summary_rows(r, tr));
        write_rows(&mut out, tr.t(keys::DETAIL_HEADING), &view::detail_rows(r, tr));
        if let Some(preset) = &self.typical_range {
            write_rows(
                &mut out,
                tr.t(keys::TYPICAL_RANGE_HEADING),
                &view::typical_range_rows(preset, tr),
            );
        }
        for notice in view::notices(r, tr) {
            let _ = writeln!(out, "\n! {notice}");
        }

        if !self.amortization.is_empty() {
            let _ = writeln!(out, "\n[{}]", tr.t(keys::SCHEDULE_HEADING));
            let _ = writeln!(out, "{}", tr.t(keys::SCHEDULE_COLUMNS));
            for row in view::schedule_table(&self.amortization) {
                let _ = writeln!(out, "{}", row.join(" | "));
            }
        }

        let _ = writeln!(out, "\n[{}]", tr.t(keys::PROJECTION_HEADING));
        let _ = writeln!(out, "{}", tr.t(keys::PROJECTION_COLUMNS));
        for row in view::projection_table(&self.projection) {
            let _ = writeln!(out, "{}", row.join(" | "));
        }

        let _ = writeln!(out, "\n{}", tr.t(keys::REPORT_DISCLAIMER));
        out
    }
}

fn write_rows(out: &mut String, heading: &str, rows: &[view::MetricRow]) {
    let _ = writeln!(out, "\n[{heading}]");
    for row in rows {
        let _ = writeln!(out, "{}: {}", row.label, row.value);
    }
}

/// 확장자에 맞는 형식으로 보고서를 저장한다.
pub fn save_report(
    report: &Report,
    path: &Path,
    tr: &Translator,
) -> Result<ReportFormat, ReportError> {
    let format = ReportFormat::from_path(path);
    let content = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Text => report.to_text(tr),
    };
    fs::write(path, content)?;
    log::info!("report written to {} ({format:?})", path.display());
    Ok(format)
}
