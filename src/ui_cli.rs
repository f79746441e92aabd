use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::analytics::AnalyticsSink;
use crate::app::AppError;
use crate::config::Config;
use crate::finance::CalculationResult;
use crate::i18n::{self, keys, Translator};
use crate::report;
use crate::session::CalculatorSession;
use crate::view::{self, MetricRow, Tone};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    Compare,
    Presets,
    Report,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CALCULATOR,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_PRESETS,
        keys::MAIN_MENU_REPORT,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let line = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(line.as_deref()) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 입력 한 줄을 해석한다. 입력이 끝났으면(`None`) 종료로 본다.
pub fn parse_menu_choice(line: Option<&str>) -> Option<MenuChoice> {
    let Some(line) = line else {
        return Some(MenuChoice::Exit);
    };
    match line.trim() {
        "1" => Some(MenuChoice::Calculator),
        "2" => Some(MenuChoice::Compare),
        "3" => Some(MenuChoice::Presets),
        "4" => Some(MenuChoice::Report),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 계산기 메뉴: 각 입력을 물어보고 바뀔 때마다 세션이 다시 계산한다.
pub fn handle_calculator<S: AnalyticsSink>(
    tr: &Translator,
    session: &mut CalculatorSession<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALCULATOR_HEADING));

    let size_keys: Vec<String> = session.tables().presets.keys().map(String::from).collect();
    let size = read_key_or_keep(tr, keys::PROMPT_SIZE, &size_keys, &session.input().size_key)?;
    if size != session.input().size_key {
        session.set_size(&size);
    }

    let current = session.input().custom_investment.unwrap_or(0.0);
    let investment = read_f64_or_keep(tr, keys::PROMPT_INVESTMENT, current)?;
    session.set_custom_investment((investment > 0.0).then_some(investment));

    let rate = read_f64_or_keep(tr, keys::PROMPT_RATE, session.input().electricity_rate)?;
    session.set_electricity_rate(rate);

    let opex = read_f64_or_keep(tr, keys::PROMPT_OPEX, session.input().operating_cost_pct)?;
    session.set_operating_cost_pct(opex);

    let financing_keys: Vec<String> =
        session.tables().financing.keys().map(String::from).collect();
    let financing = read_key_or_keep(
        tr,
        keys::PROMPT_FINANCING,
        &financing_keys,
        &session.input().financing_key,
    )?;
    session.set_financing(&financing);

    let detail = read_line(tr.t(keys::PROMPT_SHOW_DETAIL))?.unwrap_or_default();
    let detail = matches!(detail.trim(), "y" | "Y" | "yes");
    print_session(tr, session, detail);
    Ok(())
}

/// 현재 세션 결과를 출력한다. 계산이 거부된 경우 오류만 표시한다.
pub fn print_session<S: AnalyticsSink>(
    tr: &Translator,
    session: &CalculatorSession<S>,
    detail: bool,
) {
    let result = match session.result() {
        Ok(r) => r,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return;
        }
    };
    print_result(tr, result);
    if !detail {
        return;
    }
    print_rows(tr.t(keys::DETAIL_HEADING), &view::detail_rows(result, tr));
    if let Some(preset) = session.preset() {
        print_rows(
            tr.t(keys::TYPICAL_RANGE_HEADING),
            &view::typical_range_rows(preset, tr),
        );
    }
    let schedule = session.schedule();
    if !schedule.is_empty() {
        println!("\n{}", tr.t(keys::SCHEDULE_HEADING));
        println!("{}", tr.t(keys::SCHEDULE_COLUMNS));
        for row in view::schedule_table(&schedule) {
            println!("{}", row.join(" | "));
        }
    }
    println!("\n{}", tr.t(keys::PROJECTION_HEADING));
    println!("{}", tr.t(keys::PROJECTION_COLUMNS));
    for row in view::projection_table(&session.projection()) {
        println!("{}", row.join(" | "));
    }
}

/// 요약 지표와 경고를 출력한다.
pub fn print_result(tr: &Translator, result: &CalculationResult) {
    print_rows(tr.t(keys::SUMMARY_HEADING), &view::summary_rows(result, tr));
    for notice in view::notices(result, tr) {
        println!("! {notice}");
    }
}

fn print_rows(heading: &str, rows: &[MetricRow]) {
    println!("\n{heading}");
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    for row in rows {
        let marker = match row.tone {
            Tone::Negative => " (!)",
            _ => "",
        };
        let pad = width.saturating_sub(row.label.chars().count());
        println!("  {}{} : {}{marker}", row.label, " ".repeat(pad), row.value);
    }
}

/// 금융 옵션 비교 메뉴.
pub fn handle_compare<S: AnalyticsSink>(
    tr: &Translator,
    session: &CalculatorSession<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    print_comparison(tr, &session.comparison()?);
    Ok(())
}

pub fn print_comparison(tr: &Translator, results: &[CalculationResult]) {
    println!(
        "{:<22} {:>14} {:>14} {:>10} {:>14} {:>16}",
        tr.t(keys::LABEL_FINANCING),
        tr.t(keys::LABEL_CASH_INVESTED),
        tr.t(keys::LABEL_ANNUAL_PROFIT),
        tr.t(keys::LABEL_ROI),
        tr.t(keys::LABEL_PAYBACK),
        tr.t(keys::LABEL_NPV),
    );
    for r in results {
        println!(
            "{:<22} {:>14} {:>14} {:>10} {:>14} {:>16}",
            r.financing_name,
            view::format_currency(r.cash_invested),
            view::currency_or_na(r.annual_profit, tr),
            view::roi_text(r.roi_pct, tr),
            view::payback_text(r.payback_years, tr),
            view::currency_or_na(r.npv_25y, tr),
        );
    }
}

/// 프리셋/금융 옵션 테이블 출력.
pub fn handle_presets<S: AnalyticsSink>(tr: &Translator, session: &CalculatorSession<S>) {
    print_tables(tr, session.tables());
}

pub fn print_tables(tr: &Translator, tables: &crate::finance::CalculatorTables) {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    for preset in tables.presets.iter() {
        println!("[{}] {} MW", preset.key, preset.capacity_mw);
        for row in view::typical_range_rows(preset, tr) {
            println!("  {}: {}", row.label, row.value);
        }
    }
    println!("{}", tr.t(keys::FINANCING_HEADING));
    for option in tables.financing.iter() {
        if option.is_cash() {
            println!("[{}] {}: 100%", option.key, option.name);
        } else {
            println!(
                "[{}] {}: {:.0}% / {:.0}%, {:.2}%, {}y",
                option.key,
                option.name,
                option.down_payment_pct,
                option.loan_pct,
                option.interest_rate_pct,
                option.loan_term_years
            );
        }
        if !option.description.is_empty() {
            println!("  {}", option.description);
        }
    }
}

/// 보고서 저장 메뉴.
pub fn handle_report<S: AnalyticsSink>(
    tr: &Translator,
    session: &CalculatorSession<S>,
) -> Result<(), AppError> {
    let Some(report) = session.build_report() else {
        println!("{}", tr.t(keys::REPORT_NOTHING));
        return Ok(());
    };
    let Some(path) = read_line(tr.t(keys::REPORT_PROMPT_PATH))? else {
        return Ok(());
    };
    let path = match path.trim() {
        "" => "solar-roi-report.txt",
        p => p,
    };
    report::save_report(&report, Path::new(path), tr)?;
    println!("{}", tr.fill(keys::REPORT_SAVED, &[("path", path.to_string())]));
    Ok(())
}

/// 설정 메뉴. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language,
        tr.language_code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?.unwrap_or_default();
    if sel.trim().is_empty() {
        return Ok(false);
    }
    let language = match sel.trim() {
        "1" => "en",
        "2" => "el",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = language.to_string();
    let resolved = i18n::resolve_language(&cfg.language, None);
    println!("{} {resolved}", tr.t(keys::SETTINGS_SAVED));
    Ok(true)
}

fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) `None`.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn keep_hint(tr: &Translator, current: String) -> String {
    tr.fill(keys::KEEP_HINT, &[("value", current)])
}

fn read_f64_or_keep(tr: &Translator, prompt_key: &str, current: f64) -> Result<f64, AppError> {
    let prompt = format!("{}{} ", tr.t(prompt_key), keep_hint(tr, current.to_string()));
    loop {
        let Some(s) = read_line(&prompt)? else {
            return Ok(current);
        };
        if s.trim().is_empty() {
            return Ok(current);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_key_or_keep(
    tr: &Translator,
    prompt_key: &str,
    options: &[String],
    current: &str,
) -> Result<String, AppError> {
    let prompt = format!(
        "{}{} ",
        tr.fill(prompt_key, &[("options", options.join("/"))]),
        keep_hint(tr, current.to_string())
    );
    loop {
        let Some(s) = read_line(&prompt)? else {
            return Ok(current.to_string());
        };
        let s = s.trim();
        if s.is_empty() {
            return Ok(current.to_string());
        }
        if let Some(found) = options.iter().find(|o| o.eq_ignore_ascii_case(s)) {
            return Ok(found.clone());
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}
