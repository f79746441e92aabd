use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const NOT_AVAILABLE: &str = "general.not_available";
    pub const PAYBACK_NEVER: &str = "general.payback_never";
    pub const KEEP_HINT: &str = "general.keep_hint";
    pub const UNIT_YEARS: &str = "unit.years";
    pub const UNIT_MONTH: &str = "unit.month";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALCULATOR_HEADING: &str = "calculator.heading";
    pub const PROMPT_SIZE: &str = "prompt.size";
    pub const PROMPT_INVESTMENT: &str = "prompt.investment";
    pub const PROMPT_RATE: &str = "prompt.rate";
    pub const PROMPT_OPEX: &str = "prompt.opex";
    pub const PROMPT_FINANCING: &str = "prompt.financing";
    pub const PROMPT_SHOW_DETAIL: &str = "prompt.show_detail";

    pub const LABEL_SIZE: &str = "label.size";
    pub const LABEL_CAPACITY: &str = "label.capacity";
    pub const LABEL_FINANCING: &str = "label.financing";
    pub const LABEL_ELECTRICITY_RATE: &str = "label.electricity_rate";
    pub const LABEL_OPEX_PCT: &str = "label.opex_pct";
    pub const LABEL_INVESTMENT: &str = "label.investment";
    pub const LABEL_CASH_INVESTED: &str = "label.cash_invested";
    pub const LABEL_LOAN_AMOUNT: &str = "label.loan_amount";
    pub const LABEL_ENERGY: &str = "label.energy";
    pub const LABEL_REVENUE: &str = "label.revenue";
    pub const LABEL_OPEX: &str = "label.opex";
    pub const LABEL_LOAN_PAYMENT: &str = "label.loan_payment";
    pub const LABEL_ANNUAL_PROFIT: &str = "label.annual_profit";
    pub const LABEL_MONTHLY_PROFIT: &str = "label.monthly_profit";
    pub const LABEL_ROI: &str = "label.roi";
    pub const LABEL_PAYBACK: &str = "label.payback";
    pub const LABEL_BREAK_EVEN: &str = "label.break_even";
    pub const LABEL_NPV: &str = "label.npv";

    pub const SUMMARY_HEADING: &str = "result.summary_heading";
    pub const DETAIL_HEADING: &str = "result.detail_heading";
    pub const LOSS_WARNING: &str = "result.loss_warning";
    pub const DEGENERATE_NOTE: &str = "result.degenerate_note";
    pub const TYPICAL_RANGE_HEADING: &str = "result.typical_range_heading";
    pub const SCHEDULE_HEADING: &str = "result.schedule_heading";
    pub const SCHEDULE_COLUMNS: &str = "result.schedule_columns";
    pub const PROJECTION_HEADING: &str = "result.projection_heading";
    pub const PROJECTION_COLUMNS: &str = "result.projection_columns";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const PRESETS_HEADING: &str = "presets.heading";
    pub const FINANCING_HEADING: &str = "presets.financing_heading";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_GENERATED: &str = "report.generated";
    pub const REPORT_INPUTS: &str = "report.inputs";
    pub const REPORT_DISCLAIMER: &str = "report.disclaimer";
    pub const REPORT_PROMPT_PATH: &str = "report.prompt_path";
    pub const REPORT_SAVED: &str = "report.saved";
    pub const REPORT_NOTHING: &str = "report.nothing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_TITLE: &str = "gui.title";
    pub const GUI_TAB_CALCULATOR: &str = "gui.tab_calculator";
    pub const GUI_TAB_COMPARE: &str = "gui.tab_compare";
    pub const GUI_TAB_SETTINGS: &str = "gui.tab_settings";
    pub const GUI_USE_CUSTOM_INVESTMENT: &str = "gui.use_custom_investment";
    pub const GUI_SHOW_DETAIL: &str = "gui.show_detail";
    pub const GUI_DOWNLOAD_REPORT: &str = "gui.download_report";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_LANGUAGE_PACK_DIR: &str = "gui.language_pack_dir";
    pub const GUI_APPLY: &str = "gui.apply";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    El,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("el") || c.starts_with("gr") {
            Language::El
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::El => "el",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Translator {
    /// 언어 코드(en/el)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            log::info!("language pack loaded for '{lang_code}'");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    pub fn has_overrides(&self) -> bool {
        self.overrides.is_some()
    }

    /// 번역을 가져온다. 언어팩 > 선택 언어 > 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in = match self.lang {
            Language::El => el(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or("[missing translation]")
    }

    /// `{name}` 자리표시자를 채운 번역을 만든다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

/// `{name}` 형태의 자리표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("el") || other.starts_with("gr") => Some("el".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "el" => Some("el".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 맵 (중첩 테이블은 점으로 연결).
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Goodbye.",
        NOT_AVAILABLE => "N/A",
        PAYBACK_NEVER => "Not reached",
        KEEP_HINT => "(press enter to keep {value})",
        UNIT_YEARS => "{value} years",
        UNIT_MONTH => "Month {value}",
        MAIN_MENU_TITLE => "\n=== Solar Farm ROI Calculator ===",
        MAIN_MENU_CALCULATOR => "1) Calculate returns",
        MAIN_MENU_COMPARE => "2) Compare financing options",
        MAIN_MENU_PRESETS => "3) Investment sizes & financing",
        MAIN_MENU_REPORT => "4) Save report",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALCULATOR_HEADING => "\n-- ROI Calculator --",
        PROMPT_SIZE => "Investment size ({options}): ",
        PROMPT_INVESTMENT => "Total investment override [€] (0 = preset midpoint): ",
        PROMPT_RATE => "Electricity rate [€/kWh] (0.10-0.35): ",
        PROMPT_OPEX => "Operating costs [% of revenue] (5-20): ",
        PROMPT_FINANCING => "Financing ({options}): ",
        PROMPT_SHOW_DETAIL => "Show detailed breakdown? (y/N): ",
        LABEL_SIZE => "Investment size",
        LABEL_CAPACITY => "Capacity",
        LABEL_FINANCING => "Financing",
        LABEL_ELECTRICITY_RATE => "Electricity rate",
        LABEL_OPEX_PCT => "Operating costs",
        LABEL_INVESTMENT => "Total investment",
        LABEL_CASH_INVESTED => "Cash invested",
        LABEL_LOAN_AMOUNT => "Loan amount",
        LABEL_ENERGY => "Annual energy yield",
        LABEL_REVENUE => "Annual revenue",
        LABEL_OPEX => "Annual operating costs",
        LABEL_LOAN_PAYMENT => "Annual loan payment",
        LABEL_ANNUAL_PROFIT => "Annual profit",
        LABEL_MONTHLY_PROFIT => "Monthly profit",
        LABEL_ROI => "Cash-on-cash ROI",
        LABEL_PAYBACK => "Payback period",
        LABEL_BREAK_EVEN => "Break-even month",
        LABEL_NPV => "25-year NPV",
        SUMMARY_HEADING => "Summary",
        DETAIL_HEADING => "Detailed breakdown",
        LOSS_WARNING => "Warning: operating costs and debt service exceed revenue.",
        DEGENERATE_NOTE => "No cash is invested under this financing, so ROI and payback are undefined.",
        TYPICAL_RANGE_HEADING => "Typical range for this size",
        SCHEDULE_HEADING => "Loan amortization",
        SCHEDULE_COLUMNS => "Year | Payment | Interest | Principal | Balance",
        PROJECTION_HEADING => "Cash position (25 years)",
        PROJECTION_COLUMNS => "Year | Cumulative | Discounted",
        COMPARE_HEADING => "\n-- Financing comparison --",
        PRESETS_HEADING => "\n-- Investment sizes --",
        FINANCING_HEADING => "\n-- Financing options --",
        REPORT_TITLE => "Solar Farm Investment Report",
        REPORT_GENERATED => "Generated",
        REPORT_INPUTS => "Inputs",
        REPORT_DISCLAIMER => "Estimates use a fixed 22% capacity factor, a flat electricity rate and an 8% discount rate. Figures are indicative and not an offer.",
        REPORT_PROMPT_PATH => "Report file (.txt or .json): ",
        REPORT_SAVED => "Report saved to {path}",
        REPORT_NOTHING => "Run a calculation first.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) English  2) Ελληνικά  3) Auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        GUI_TITLE => "Solar Farm ROI Calculator",
        GUI_TAB_CALCULATOR => "Calculator",
        GUI_TAB_COMPARE => "Compare financing",
        GUI_TAB_SETTINGS => "Settings",
        GUI_USE_CUSTOM_INVESTMENT => "Custom total investment",
        GUI_SHOW_DETAIL => "Show detailed breakdown",
        GUI_DOWNLOAD_REPORT => "Download report",
        GUI_LANGUAGE => "Language (auto/en/el)",
        GUI_LANGUAGE_PACK_DIR => "Language pack folder",
        GUI_APPLY => "Apply",
        _ => return None,
    })
}

fn el(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Σφάλμα",
        APP_EXIT => "Αντίο.",
        NOT_AVAILABLE => "Μ/Δ",
        PAYBACK_NEVER => "Δεν επιτυγχάνεται",
        KEEP_HINT => "(enter για διατήρηση {value})",
        UNIT_YEARS => "{value} έτη",
        UNIT_MONTH => "Μήνας {value}",
        MAIN_MENU_TITLE => "\n=== Υπολογιστής Απόδοσης Φωτοβολταϊκού Πάρκου ===",
        MAIN_MENU_CALCULATOR => "1) Υπολογισμός απόδοσης",
        MAIN_MENU_COMPARE => "2) Σύγκριση χρηματοδότησης",
        MAIN_MENU_PRESETS => "3) Μεγέθη επένδυσης & χρηματοδότηση",
        MAIN_MENU_REPORT => "4) Αποθήκευση αναφοράς",
        MAIN_MENU_SETTINGS => "5) Ρυθμίσεις",
        MAIN_MENU_EXIT => "0) Έξοδος",
        PROMPT_MENU_SELECT => "Επιλογή: ",
        INVALID_SELECTION_RETRY => "Μη έγκυρη επιλογή. Δοκιμάστε ξανά.",
        ERROR_INVALID_NUMBER => "Εισάγετε αριθμό.",
        CALCULATOR_HEADING => "\n-- Υπολογιστής ROI --",
        PROMPT_SIZE => "Μέγεθος επένδυσης ({options}): ",
        PROMPT_INVESTMENT => "Συνολική επένδυση [€] (0 = μέση τιμή): ",
        PROMPT_RATE => "Τιμή ηλεκτρικής ενέργειας [€/kWh] (0.10-0.35): ",
        PROMPT_OPEX => "Λειτουργικά έξοδα [% εσόδων] (5-20): ",
        PROMPT_FINANCING => "Χρηματοδότηση ({options}): ",
        PROMPT_SHOW_DETAIL => "Εμφάνιση αναλυτικών στοιχείων; (y/N): ",
        LABEL_SIZE => "Μέγεθος επένδυσης",
        LABEL_CAPACITY => "Ισχύς",
        LABEL_FINANCING => "Χρηματοδότηση",
        LABEL_ELECTRICITY_RATE => "Τιμή ενέργειας",
        LABEL_OPEX_PCT => "Λειτουργικά έξοδα",
        LABEL_INVESTMENT => "Συνολική επένδυση",
        LABEL_CASH_INVESTED => "Ίδια κεφάλαια",
        LABEL_LOAN_AMOUNT => "Ποσό δανείου",
        LABEL_ENERGY => "Ετήσια παραγωγή",
        LABEL_REVENUE => "Ετήσια έσοδα",
        LABEL_OPEX => "Ετήσια λειτουργικά έξοδα",
        LABEL_LOAN_PAYMENT => "Ετήσια δόση δανείου",
        LABEL_ANNUAL_PROFIT => "Ετήσιο κέρδος",
        LABEL_MONTHLY_PROFIT => "Μηνιαίο κέρδος",
        LABEL_ROI => "Απόδοση ιδίων κεφαλαίων",
        LABEL_PAYBACK => "Περίοδος αποπληρωμής",
        LABEL_BREAK_EVEN => "Μήνας νεκρού σημείου",
        LABEL_NPV => "Καθαρή παρούσα αξία 25 ετών",
        SUMMARY_HEADING => "Σύνοψη",
        DETAIL_HEADING => "Αναλυτικά στοιχεία",
        LOSS_WARNING => "Προσοχή: τα έξοδα και οι δόσεις υπερβαίνουν τα έσοδα.",
        DEGENERATE_NOTE => "Δεν επενδύονται ίδια κεφάλαια, άρα η απόδοση και η αποπληρωμή δεν ορίζονται.",
        TYPICAL_RANGE_HEADING => "Τυπικό εύρος για αυτό το μέγεθος",
        SCHEDULE_HEADING => "Αποπληρωμή δανείου",
        SCHEDULE_COLUMNS => "Έτος | Δόση | Τόκος | Κεφάλαιο | Υπόλοιπο",
        PROJECTION_HEADING => "Ταμειακή θέση (25 έτη)",
        PROJECTION_COLUMNS => "Έτος | Σωρευτικά | Προεξοφλημένα",
        COMPARE_HEADING => "\n-- Σύγκριση χρηματοδότησης --",
        PRESETS_HEADING => "\n-- Μεγέθη επένδυσης --",
        FINANCING_HEADING => "\n-- Επιλογές χρηματοδότησης --",
        REPORT_TITLE => "Αναφορά Επένδυσης Φωτοβολταϊκού Πάρκου",
        REPORT_GENERATED => "Δημιουργήθηκε",
        REPORT_INPUTS => "Παράμετροι",
        REPORT_DISCLAIMER => "Οι εκτιμήσεις βασίζονται σε σταθερό συντελεστή απόδοσης 22%, σταθερή τιμή ενέργειας και προεξοφλητικό επιτόκιο 8%. Τα ποσά είναι ενδεικτικά και δεν αποτελούν προσφορά.",
        REPORT_PROMPT_PATH => "Αρχείο αναφοράς (.txt ή .json): ",
        REPORT_SAVED => "Η αναφορά αποθηκεύτηκε στο {path}",
        REPORT_NOTHING => "Εκτελέστε πρώτα έναν υπολογισμό.",
        SETTINGS_HEADING => "\n-- Ρυθμίσεις --",
        SETTINGS_CURRENT_LANGUAGE => "Τρέχουσα γλώσσα:",
        SETTINGS_OPTIONS => "1) English  2) Ελληνικά  3) Αυτόματα",
        SETTINGS_PROMPT_CHANGE => "Αριθμός για αλλαγή (enter για ακύρωση): ",
        SETTINGS_INVALID => "Μη έγκυρη επιλογή· η γλώσσα δεν άλλαξε.",
        SETTINGS_SAVED => "Η γλώσσα άλλαξε σε:",
        GUI_TITLE => "Υπολογιστής Απόδοσης Φωτοβολταϊκού Πάρκου",
        GUI_TAB_CALCULATOR => "Υπολογιστής",
        GUI_TAB_COMPARE => "Σύγκριση",
        GUI_TAB_SETTINGS => "Ρυθμίσεις",
        GUI_USE_CUSTOM_INVESTMENT => "Προσαρμοσμένη επένδυση",
        GUI_SHOW_DETAIL => "Εμφάνιση αναλυτικών",
        GUI_DOWNLOAD_REPORT => "Λήψη αναφοράς",
        GUI_LANGUAGE => "Γλώσσα (auto/en/el)",
        GUI_LANGUAGE_PACK_DIR => "Φάκελος πακέτου γλώσσας",
        GUI_APPLY => "Εφαρμογή",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greek_covers_report_and_settings_strings() {
        let tr = Translator::new("el-GR");
        assert_eq!(tr.language(), Language::El);
        assert_eq!(tr.t(keys::NOT_AVAILABLE), "Μ/Δ");
        for key in [
            keys::REPORT_DISCLAIMER,
            keys::SETTINGS_OPTIONS,
            keys::GUI_LANGUAGE_PACK_DIR,
        ] {
            assert!(el(key).is_some(), "{key} has no Greek text");
            assert_ne!(tr.t(key), en(key).unwrap_or_default(), "{key}");
        }
    }

    #[test]
    fn unknown_greek_key_is_marked() {
        let tr = Translator::new("el");
        assert_eq!(el("no.such.key"), None);
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn unknown_key_is_marked() {
        assert_eq!(Translator::new("en").t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn placeholders_are_filled() {
        let tr = Translator::new("en");
        let msg = tr.fill(keys::REPORT_SAVED, &[("path", "out.txt".into())]);
        assert_eq!(msg, "Report saved to out.txt");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("el", Some("en")), "el");
        assert_eq!(resolve_language("auto", Some("en-GB")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[label]\nroi = \"Yield\"\n").unwrap();
        assert_eq!(map.get("label.roi").map(String::as_str), Some("Yield"));
    }
}
