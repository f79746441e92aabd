use solar_farm_roi::{
    analytics::{AnalyticsEvent, RecordingSink},
    finance::{
        compute_result, CalculationInput, CalculatorTables, FinancingOption, FinancingTable,
        PresetTable,
    },
    i18n::{keys, Translator},
    report::{save_report, Report, ReportFormat},
    session::CalculatorSession,
    view::{self, Tone},
};

fn session(input: CalculationInput) -> CalculatorSession<RecordingSink> {
    CalculatorSession::new(CalculatorTables::builtin(), input, RecordingSink::default())
}

fn row_value<'a>(rows: &'a [view::MetricRow], label: &str) -> &'a view::MetricRow {
    rows.iter()
        .find(|r| r.label == label)
        .unwrap_or_else(|| panic!("row {label} missing"))
}

#[test]
fn summary_shows_cash_scenario() {
    let tr = Translator::new("en");
    let s = session(CalculationInput::default());
    let result = s.result().expect("default input computes");
    let rows = view::summary_rows(result, &tr);

    assert_eq!(row_value(&rows, "Annual revenue").value, "€1,445,400");
    let profit = row_value(&rows, "Annual profit");
    assert_eq!(profit.value, "€1,329,768");
    assert_eq!(profit.tone, Tone::Positive);
    assert_eq!(row_value(&rows, "Cash-on-cash ROI").value, "26.6%");
    assert_eq!(row_value(&rows, "Payback period").value, "3.8 years");
    assert_eq!(row_value(&rows, "Break-even month").value, "Month 46");
    assert!(view::notices(result, &tr).is_empty());
}

#[test]
fn overpriced_leveraged_plant_is_flagged_as_loss() {
    let tr = Translator::new("en");
    let s = session(CalculationInput {
        size_key: "1MW".into(),
        custom_investment: Some(5_000_000.0),
        financing_key: "BANK_80".into(),
        ..CalculationInput::default()
    });
    let result = s.result().expect("loss still computes");
    assert!(result.annual_profit < 0.0);

    let rows = view::summary_rows(result, &tr);
    let profit = row_value(&rows, "Annual profit");
    assert!(profit.value.starts_with("-€"), "{}", profit.value);
    assert_eq!(profit.tone, Tone::Negative);
    assert_eq!(row_value(&rows, "Cash-on-cash ROI").tone, Tone::Negative);
    assert_eq!(row_value(&rows, "Payback period").value, "Not reached");
    assert_eq!(row_value(&rows, "Break-even month").value, "Not reached");
    assert_eq!(view::notices(result, &tr), vec![tr.t(keys::LOSS_WARNING)]);
}

#[test]
fn zero_cash_financing_shows_not_available() {
    let tr = Translator::new("en");
    let presets = PresetTable::builtin();
    let financing = FinancingTable::new(vec![
        FinancingOption::new("FULL_LOAN", "Full Loan", 0.0, 5.0, 15, "").expect("option"),
    ]);
    let input = CalculationInput {
        financing_key: "FULL_LOAN".into(),
        ..CalculationInput::default()
    };
    let result = compute_result(&input, &presets, &financing).expect("full loan");
    let rows = view::summary_rows(&result, &tr);
    assert_eq!(row_value(&rows, "Cash-on-cash ROI").value, "N/A");
    assert_eq!(row_value(&rows, "Payback period").value, "N/A");
    assert_eq!(row_value(&rows, "Break-even month").value, "N/A");
    assert!(view::notices(&result, &tr).contains(&tr.t(keys::DEGENERATE_NOTE)));
}

#[test]
fn zero_profit_is_never_reached_without_loss_warning() {
    let tr = Translator::new("en");
    let s = session(CalculationInput::default());
    let mut result = s.result().expect("result").clone();
    result.annual_profit = 0.0;
    result.monthly_profit = 0.0;
    result.roi_pct = Some(0.0);
    result.payback_years = Some(f64::INFINITY);
    result.break_even_month = None;

    assert_eq!(view::payback_text(result.payback_years, &tr), "Not reached");
    assert_eq!(view::break_even_text(&result, &tr), "Not reached");
    assert!(!result.is_loss());
    assert!(view::notices(&result, &tr).is_empty());
    let rows = view::summary_rows(&result, &tr);
    assert_eq!(row_value(&rows, "Annual profit").tone, Tone::Normal);
    assert_eq!(row_value(&rows, "Cash-on-cash ROI").value, "0.0%");
}

#[test]
fn greek_report_has_greek_disclaimer() {
    let el = Translator::new("el");
    let en = Translator::new("en");
    let s = session(CalculationInput::default());
    let text = s.build_report().expect("report").to_text(&el);
    assert!(text.contains(el.t(keys::REPORT_DISCLAIMER)));
    assert!(!text.contains(en.t(keys::REPORT_DISCLAIMER)));
}

#[test]
fn greek_labels_replace_english() {
    let el = Translator::new("el");
    let s = session(CalculationInput::default());
    let rows = view::summary_rows(s.result().expect("result"), &el);
    assert!(rows.iter().all(|r| r.label != "Annual profit"));
    assert!(rows.iter().any(|r| r.value == "€1,445,400"));
}

#[test]
fn session_recomputes_only_on_change() {
    let mut s = session(CalculationInput::default());
    assert_eq!(s.sink().events().len(), 1);

    s.replace_input(CalculationInput::default());
    assert_eq!(s.sink().events().len(), 1, "unchanged input must not recompute");

    s.set_electricity_rate(0.20);
    assert_eq!(s.sink().events().len(), 2);
    let revenue = s.result().expect("result").annual_revenue;
    assert!((revenue - 9_636.0 * 0.20 * 1000.0).abs() < 1e-6);

    s.set_electricity_rate(0.90);
    assert_eq!(s.input().electricity_rate, 0.35);
    s.set_operating_cost_pct(1.0);
    assert_eq!(s.input().operating_cost_pct, 5.0);
    assert!(s.result().is_ok());
}

#[test]
fn switching_size_drops_custom_investment() {
    let mut s = session(CalculationInput::default());
    s.set_custom_investment(Some(6_000_000.0));
    assert_eq!(s.result().expect("custom").total_investment, 6_000_000.0);

    s.set_size("10MW");
    assert_eq!(s.input().custom_investment, None);
    assert_eq!(s.result().expect("10MW").total_investment, 10_000_000.0);
    assert_eq!(s.preset().map(|p| p.key.as_str()), Some("10MW"));
}

#[test]
fn rejected_input_keeps_session_usable() {
    let mut s = session(CalculationInput::default());
    s.set_size("3MW");
    assert!(s.result().is_err());
    assert!(s.build_report().is_none());
    assert!(s.schedule().is_empty());
    assert_eq!(s.sink().events().len(), 1);

    s.set_size("5MW");
    assert!(s.result().is_ok());
    assert_eq!(s.sink().events().len(), 2);
}

#[test]
fn report_request_is_tracked() {
    let s = session(CalculationInput {
        financing_key: "BANK_70".into(),
        ..CalculationInput::default()
    });
    let report = s.build_report().expect("report");
    assert_eq!(report.amortization.len(), 15);
    assert_eq!(report.projection.len(), 25);
    match s.sink().events().last() {
        Some(AnalyticsEvent::ReportRequested {
            size_key,
            investment,
        }) => {
            assert_eq!(size_key, "5MW");
            assert_eq!(*investment, 5_000_000.0);
        }
        other => panic!("unexpected last event {other:?}"),
    }
}

#[test]
fn text_report_lists_sections() {
    let tr = Translator::new("en");
    let tables = CalculatorTables::builtin();
    let input = CalculationInput {
        financing_key: "BANK_70".into(),
        ..CalculationInput::default()
    };
    let result = compute_result(&input, &tables.presets, &tables.financing).expect("result");
    let text = Report::build(&input, &result, &tables).to_text(&tr);
    for needle in [
        "Solar Farm Investment Report",
        "€1,445,400",
        "Typical range for this size",
        "Loan amortization",
        "Cash position (25 years)",
        tr.t(keys::REPORT_DISCLAIMER),
    ] {
        assert!(text.contains(needle), "missing {needle:?}");
    }

    let cash_input = CalculationInput::default();
    let cash = compute_result(&cash_input, &tables.presets, &tables.financing).expect("cash");
    let cash_text = Report::build(&cash_input, &cash, &tables).to_text(&tr);
    assert!(!cash_text.contains("Loan amortization"));
}

#[test]
fn json_report_is_saved_by_extension() {
    let tr = Translator::new("en");
    let s = session(CalculationInput::default());
    let report = s.build_report().expect("report");

    let path = std::env::temp_dir().join(format!("solar_roi_report_{}.json", std::process::id()));
    let format = save_report(&report, &path, &tr).expect("save json");
    assert_eq!(format, ReportFormat::Json);

    let content = std::fs::read_to_string(&path).expect("read back");
    let _ = std::fs::remove_file(&path);
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["input"]["size_key"], "5MW");
    let revenue = value["result"]["annual_revenue"].as_f64().expect("revenue");
    assert!((revenue - 1_445_400.0).abs() < 1e-6, "revenue {revenue}");
    assert_eq!(value["result"]["break_even_month"].as_i64(), Some(46));
    assert!(value["amortization"].as_array().is_some_and(|a| a.is_empty()));
}

#[test]
fn text_format_is_the_fallback() {
    assert_eq!(
        ReportFormat::from_path(std::path::Path::new("out.txt")),
        ReportFormat::Text
    );
    assert_eq!(
        ReportFormat::from_path(std::path::Path::new("out")),
        ReportFormat::Text
    );
    assert_eq!(
        ReportFormat::from_path(std::path::Path::new("OUT.JSON")),
        ReportFormat::Json
    );
}
