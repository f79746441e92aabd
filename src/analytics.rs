//! 분석 이벤트 전달 경계. 전송 실패가 계산 흐름에 영향을 주지 않도록
//! `track`은 결과를 돌려주지 않는다.

use std::cell::RefCell;

/// 외부 분석 도구로 보내는 이벤트.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    CalculationPerformed { size_key: String, investment: f64 },
    ReportRequested { size_key: String, investment: f64 },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CalculationPerformed { .. } => "calculation_performed",
            AnalyticsEvent::ReportRequested { .. } => "report_requested",
        }
    }
}

/// 이벤트 수신자.
pub trait AnalyticsSink {
    fn track(&self, event: AnalyticsEvent);
}

/// 이벤트를 로그로만 남긴다.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&self, event: AnalyticsEvent) {
        match &event {
            AnalyticsEvent::CalculationPerformed {
                size_key,
                investment,
            }
            | AnalyticsEvent::ReportRequested {
                size_key,
                investment,
            } => log::info!(
                target: "analytics",
                "{} size={size_key} investment={investment:.0}",
                event.name()
            ),
        }
    }
}

/// 받은 이벤트를 보관한다. 테스트와 화면 디버깅용.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: AnalyticsEvent) {
        self.events.borrow_mut().push(event);
    }
}
