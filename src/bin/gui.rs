#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use solar_farm_roi::{
    analytics::LogSink,
    app, config,
    finance::{
        roi::{
            ELECTRICITY_RATE_MAX, ELECTRICITY_RATE_MIN, OPERATING_COST_MAX_PCT,
            OPERATING_COST_MIN_PCT,
        },
        CalculationInput, CalculatorTables,
    },
    i18n::{self, keys, Translator},
    report,
    session::CalculatorSession,
    view::{self, MetricRow, Tone},
};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/el)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([980.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        log::error!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Solar Farm ROI Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn tone_color(tone: Tone) -> Option<egui::Color32> {
    match tone {
        Tone::Positive => Some(egui::Color32::from_rgb(40, 150, 70)),
        Tone::Negative => Some(egui::Color32::from_rgb(210, 60, 60)),
        Tone::Normal => None,
    }
}

fn rows_grid(ui: &mut egui::Ui, id: &str, rows: &[MetricRow]) {
    egui::Grid::new(id)
        .num_columns(2)
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for row in rows {
                ui.label(row.label.as_str());
                match tone_color(row.tone) {
                    Some(color) => ui.colored_label(color, egui::RichText::new(&row.value).strong()),
                    None => ui.label(egui::RichText::new(&row.value).strong()),
                };
                ui.end_row();
            }
        });
}

fn table_grid<const N: usize>(ui: &mut egui::Ui, id: &str, header: &str, rows: &[[String; N]]) {
    egui::Grid::new(id)
        .num_columns(N)
        .striped(true)
        .spacing([14.0, 4.0])
        .show(ui, |ui| {
            for title in header.split('|') {
                ui.strong(title.trim());
            }
            ui.end_row();
            for row in rows {
                for cell in row {
                    ui.label(cell.as_str());
                }
                ui.end_row();
            }
        });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Compare,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    session: CalculatorSession<LogSink>,
    tab: Tab,
    // 위젯에 묶인 입력값. 매 프레임 세션에 반영한다.
    draft: CalculationInput,
    use_custom_investment: bool,
    custom_investment: f64,
    show_detail: bool,
    lang_input: String,
    lang_pack_dir_input: String,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = app::translator_for(&config, None);
        log::info!(
            "GUI language resolved: {}, overrides_loaded={}",
            tr.language_code(),
            tr.has_overrides()
        );
        let (tables, status) = match config.load_tables() {
            Ok(t) => (t, None),
            Err(e) => {
                log::error!("table load failed, using built-in tables: {e}");
                (CalculatorTables::builtin(), Some(e.to_string()))
            }
        };
        let draft = config.calculator.to_input();
        let custom_investment = draft.custom_investment.unwrap_or(0.0);
        let session = CalculatorSession::with_log_sink(tables, draft.clone());
        Self {
            lang_input: config.language.clone(),
            lang_pack_dir_input: config.language_pack_dir.clone().unwrap_or_default(),
            config,
            tr,
            session,
            tab: Tab::Calculator,
            use_custom_investment: custom_investment > 0.0,
            custom_investment,
            draft,
            show_detail: false,
            status,
        }
    }

    /// 위젯 상태로 입력을 만들어 세션에 넘긴다. 바뀐 경우에만 다시 계산된다.
    fn sync_session(&mut self) {
        let mut input = self.draft.clone();
        input.custom_investment = (self.use_custom_investment && self.custom_investment > 0.0)
            .then_some(self.custom_investment);
        self.session.replace_input(input);
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let size_keys: Vec<String> = self
            .session
            .tables()
            .presets
            .keys()
            .map(String::from)
            .collect();
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::LABEL_SIZE));
            for key in size_keys {
                let selected = self.draft.size_key == key;
                if ui.selectable_label(selected, key.as_str()).clicked() && !selected {
                    self.draft.size_key = key;
                    self.use_custom_investment = false;
                }
            }
        });
        ui.add_space(6.0);

        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.checkbox(
                    &mut self.use_custom_investment,
                    tr.t(keys::GUI_USE_CUSTOM_INVESTMENT),
                );
                ui.add_enabled(
                    self.use_custom_investment,
                    egui::DragValue::new(&mut self.custom_investment)
                        .speed(10_000.0)
                        .clamp_range(0.0..=500_000_000.0)
                        .prefix("€ "),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_ELECTRICITY_RATE));
                ui.add(
                    egui::Slider::new(
                        &mut self.draft.electricity_rate,
                        ELECTRICITY_RATE_MIN..=ELECTRICITY_RATE_MAX,
                    )
                    .step_by(0.005)
                    .fixed_decimals(3)
                    .prefix("€")
                    .suffix("/kWh"),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_OPEX_PCT));
                ui.add(
                    egui::Slider::new(
                        &mut self.draft.operating_cost_pct,
                        OPERATING_COST_MIN_PCT..=OPERATING_COST_MAX_PCT,
                    )
                    .step_by(0.5)
                    .suffix("%"),
                );
                ui.end_row();

                ui.label(tr.t(keys::LABEL_FINANCING));
                let selected_name = self
                    .session
                    .tables()
                    .financing
                    .get(&self.draft.financing_key)
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| self.draft.financing_key.clone());
                egui::ComboBox::from_id_source("financing_choice")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for option in self.session.tables().financing.iter() {
                            ui.selectable_value(
                                &mut self.draft.financing_key,
                                option.key.clone(),
                                option.name.as_str(),
                            )
                            .on_hover_text(option.description.as_str());
                        }
                    });
                ui.end_row();
            });
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_TITLE));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| self.ui_inputs(ui));
        self.sync_session();
        ui.add_space(10.0);

        let result = match self.session.result() {
            Ok(r) => r.clone(),
            Err(e) => {
                ui.colored_label(
                    egui::Color32::from_rgb(210, 60, 60),
                    format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                );
                return;
            }
        };

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong(tr.t(keys::SUMMARY_HEADING));
            rows_grid(ui, "summary_grid", &view::summary_rows(&result, &tr));
            for notice in view::notices(&result, &tr) {
                ui.colored_label(egui::Color32::from_rgb(210, 120, 30), notice);
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_detail, tr.t(keys::GUI_SHOW_DETAIL));
            if ui.button(tr.t(keys::GUI_DOWNLOAD_REPORT)).clicked() {
                self.download_report();
            }
        });
        if let Some(msg) = &self.status {
            ui.label(msg.as_str());
        }

        if self.show_detail {
            ui.separator();
            ui.strong(tr.t(keys::DETAIL_HEADING));
            rows_grid(ui, "detail_grid", &view::detail_rows(&result, &tr));
            if let Some(preset) = self.session.preset() {
                ui.add_space(6.0);
                ui.strong(tr.t(keys::TYPICAL_RANGE_HEADING));
                rows_grid(ui, "range_grid", &view::typical_range_rows(preset, &tr));
            }
            let schedule = self.session.schedule();
            if !schedule.is_empty() {
                egui::CollapsingHeader::new(tr.t(keys::SCHEDULE_HEADING))
                    .default_open(false)
                    .show(ui, |ui| {
                        table_grid(
                            ui,
                            "schedule_grid",
                            tr.t(keys::SCHEDULE_COLUMNS),
                            &view::schedule_table(&schedule),
                        );
                    });
            }
            egui::CollapsingHeader::new(tr.t(keys::PROJECTION_HEADING))
                .default_open(false)
                .show(ui, |ui| {
                    table_grid(
                        ui,
                        "projection_grid",
                        tr.t(keys::PROJECTION_COLUMNS),
                        &view::projection_table(&self.session.projection()),
                    );
                });
        }
    }

    fn download_report(&mut self) {
        let Some(report) = self.session.build_report() else {
            self.status = Some(self.tr.t(keys::REPORT_NOTHING).to_string());
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("Text", &["txt"])
            .add_filter("JSON", &["json"])
            .set_file_name("solar-roi-report.txt")
            .save_file()
        else {
            return;
        };
        self.status = Some(match report::save_report(&report, &path, &self.tr) {
            Ok(_) => self
                .tr
                .fill(keys::REPORT_SAVED, &[("path", path.display().to_string())]),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_compare(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_TAB_COMPARE));
        ui.add_space(8.0);
        let results = match self.session.comparison() {
            Ok(r) => r,
            Err(e) => {
                ui.label(format!("{}: {e}", tr.t(keys::ERROR_PREFIX)));
                return;
            }
        };
        egui::Grid::new("compare_grid")
            .num_columns(6)
            .striped(true)
            .spacing([14.0, 6.0])
            .show(ui, |ui| {
                for key in [
                    keys::LABEL_FINANCING,
                    keys::LABEL_CASH_INVESTED,
                    keys::LABEL_LOAN_PAYMENT,
                    keys::LABEL_ANNUAL_PROFIT,
                    keys::LABEL_ROI,
                    keys::LABEL_NPV,
                ] {
                    ui.strong(tr.t(key));
                }
                ui.end_row();
                for r in &results {
                    let name = egui::RichText::new(&r.financing_name);
                    if r.financing_key == self.draft.financing_key {
                        ui.label(name.strong());
                    } else {
                        ui.label(name);
                    }
                    ui.label(view::format_currency(r.cash_invested));
                    ui.label(view::format_currency(r.annual_loan_payment));
                    let profit = view::currency_or_na(r.annual_profit, &tr);
                    match tone_color(if r.is_loss() { Tone::Negative } else { Tone::Normal }) {
                        Some(c) => ui.colored_label(c, profit),
                        None => ui.label(profit),
                    };
                    ui.label(view::roi_text(r.roi_pct, &tr));
                    ui.label(view::currency_or_na(r.npv_25y, &tr));
                    ui.end_row();
                }
            });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::GUI_TAB_SETTINGS));
        ui.add_space(8.0);
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::GUI_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "Auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "el".into(), "Ελληνικά");
                    });
                ui.end_row();
                ui.label(tr.t(keys::GUI_LANGUAGE_PACK_DIR));
                ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                ui.end_row();
            });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::GUI_APPLY)).clicked() {
            self.config.language = self.lang_input.clone();
            self.config.language_pack_dir = Some(self.lang_pack_dir_input.trim().to_string())
                .filter(|d| !d.is_empty());
            self.config.calculator = config::CalculatorDefaults::from_input(self.session.input());
            self.tr = app::translator_for(&self.config, None);
            self.status = Some(match self.config.save() {
                Ok(()) => format!(
                    "{} {}",
                    self.tr.t(keys::SETTINGS_SAVED),
                    self.tr.language_code()
                ),
                Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
            });
        }
        if let Some(msg) = &self.status {
            ui.label(msg.as_str());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (tab, key) in [
                    (Tab::Calculator, keys::GUI_TAB_CALCULATOR),
                    (Tab::Compare, keys::GUI_TAB_COMPARE),
                    (Tab::Settings, keys::GUI_TAB_SETTINGS),
                ] {
                    ui.selectable_value(&mut self.tab, tab, tr.t(key));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Compare => self.ui_compare(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
    }
}
