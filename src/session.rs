//! 입력이 바뀔 때마다 결과를 다시 계산하는 계산기 세션.
//!
//! CLI와 GUI가 같은 방식으로 사용한다. 세션마다 자기 입력/결과를 가지므로
//! 여러 세션이 동시에 있어도 서로 간섭하지 않는다.

use crate::analytics::{AnalyticsEvent, AnalyticsSink, LogSink};
use crate::finance::loan::AmortizationYear;
use crate::finance::roi::{
    ELECTRICITY_RATE_MAX, ELECTRICITY_RATE_MIN, NPV_HORIZON_YEARS, OPERATING_COST_MAX_PCT,
    OPERATING_COST_MIN_PCT,
};
use crate::finance::{
    compare_financing, compute_result, loan_schedule, project_cash_flows, CalculationError,
    CalculationInput, CalculationResult, CalculatorTables, InvestmentSizePreset, ProjectedYear,
};
use crate::report::Report;

pub struct CalculatorSession<S: AnalyticsSink = LogSink> {
    tables: CalculatorTables,
    input: CalculationInput,
    result: Result<CalculationResult, CalculationError>,
    sink: S,
}

impl CalculatorSession<LogSink> {
    pub fn with_log_sink(tables: CalculatorTables, input: CalculationInput) -> Self {
        Self::new(tables, input, LogSink)
    }
}

impl<S: AnalyticsSink> CalculatorSession<S> {
    /// 세션을 만들고 즉시 한 번 계산한다.
    pub fn new(tables: CalculatorTables, input: CalculationInput, sink: S) -> Self {
        let result = compute_result(&input, &tables.presets, &tables.financing);
        let session = Self {
            tables,
            input,
            result,
            sink,
        };
        session.announce();
        session
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn tables(&self) -> &CalculatorTables {
        &self.tables
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn result(&self) -> Result<&CalculationResult, &CalculationError> {
        self.result.as_ref()
    }

    pub fn preset(&self) -> Option<&InvestmentSizePreset> {
        self.tables.presets.get(&self.input.size_key)
    }

    /// 규모 탭 전환. 직접 입력한 투자비는 초기화한다.
    pub fn set_size(&mut self, key: &str) {
        self.update(|input| {
            input.size_key = key.to_string();
            input.custom_investment = None;
        });
    }

    pub fn set_custom_investment(&mut self, amount: Option<f64>) {
        self.update(|input| input.custom_investment = amount);
    }

    /// 슬라이더 범위로 제한해 반영한다.
    pub fn set_electricity_rate(&mut self, rate: f64) {
        self.update(|input| {
            input.electricity_rate = rate.clamp(ELECTRICITY_RATE_MIN, ELECTRICITY_RATE_MAX)
        });
    }

    /// 슬라이더 범위로 제한해 반영한다.
    pub fn set_operating_cost_pct(&mut self, pct: f64) {
        self.update(|input| {
            input.operating_cost_pct = pct.clamp(OPERATING_COST_MIN_PCT, OPERATING_COST_MAX_PCT)
        });
    }

    pub fn set_financing(&mut self, key: &str) {
        self.update(|input| input.financing_key = key.to_string());
    }

    /// 입력을 통째로 바꾼다. 값이 같으면 다시 계산하지 않는다.
    pub fn replace_input(&mut self, input: CalculationInput) {
        if input != self.input {
            self.input = input;
            self.recompute();
        }
    }

    fn update(&mut self, f: impl FnOnce(&mut CalculationInput)) {
        let mut next = self.input.clone();
        f(&mut next);
        self.replace_input(next);
    }

    fn recompute(&mut self) {
        self.result = compute_result(&self.input, &self.tables.presets, &self.tables.financing);
        self.announce();
    }

    fn announce(&self) {
        match &self.result {
            Ok(r) => self.sink.track(AnalyticsEvent::CalculationPerformed {
                size_key: r.size_key.clone(),
                investment: r.total_investment,
            }),
            Err(e) => log::warn!("calculation rejected: {e}"),
        }
    }

    /// 현재 입력을 모든 금융 옵션으로 비교한다.
    pub fn comparison(&self) -> Result<Vec<CalculationResult>, CalculationError> {
        compare_financing(&self.input, &self.tables.presets, &self.tables.financing)
    }

    /// 현재 결과의 대출 상환 스케줄. 대출이 없으면 빈 목록.
    pub fn schedule(&self) -> Vec<AmortizationYear> {
        match &self.result {
            Ok(r) => loan_schedule(r, &self.tables.financing),
            Err(_) => Vec::new(),
        }
    }

    pub fn projection(&self) -> Vec<ProjectedYear> {
        match &self.result {
            Ok(r) => project_cash_flows(r, NPV_HORIZON_YEARS),
            Err(_) => Vec::new(),
        }
    }

    /// 보고서를 만들고 요청 이벤트를 보낸다. 계산 결과가 없으면 `None`.
    pub fn build_report(&self) -> Option<Report> {
        let result = self.result.as_ref().ok()?;
        self.sink.track(AnalyticsEvent::ReportRequested {
            size_key: result.size_key.clone(),
            investment: result.total_investment,
        });
        Some(Report::build(&self.input, result, &self.tables))
    }
}
