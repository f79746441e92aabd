//! 수익성 계산 회귀 테스트. 대표 시나리오 값은 손으로 검산한 값이다.
use solar_farm_roi::finance::{
    compare_financing, compute_result, loan::annual_payment, CalculationError, CalculationInput,
    FinancingOption, FinancingTable, PresetTable,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn input(size: &str, financing: &str) -> CalculationInput {
    CalculationInput {
        size_key: size.into(),
        financing_key: financing.into(),
        ..CalculationInput::default()
    }
}

fn builtin() -> (PresetTable, FinancingTable) {
    (PresetTable::builtin(), FinancingTable::builtin())
}

#[test]
fn cash_purchase_of_5mw_at_default_rates() {
    let (presets, financing) = builtin();
    let r = compute_result(&input("5MW", "CASH"), &presets, &financing).expect("cash 5MW");
    assert_close("investment", r.total_investment, 5_000_000.0, 1e-12);
    assert_close("energy", r.annual_energy_mwh, 9_636.0, 1e-12);
    assert_close("revenue", r.annual_revenue, 1_445_400.0, 1e-12);
    assert_close("opex", r.operating_costs, 115_632.0, 1e-12);
    assert_eq!(r.annual_loan_payment, 0.0);
    assert_eq!(r.loan_amount, 0.0);
    assert_close("profit", r.annual_profit, 1_329_768.0, 1e-12);
    assert_close("roi", r.roi_pct.expect("roi"), 26.595_36, 1e-9);
    assert_close("payback", r.payback_years.expect("payback"), 3.760_054, 1e-6);
    assert_eq!(r.break_even_month, Some(46));
    assert_close("npv", r.npv_25y, 9_194_976.0, 1e-4);
    assert_close("monthly", r.monthly_profit, 110_814.0, 1e-12);
}

#[test]
fn bank_70_levers_cash_return() {
    let (presets, financing) = builtin();
    let cash = compute_result(&input("5MW", "CASH"), &presets, &financing).expect("cash");
    let bank = compute_result(&input("5MW", "BANK_70"), &presets, &financing).expect("bank 70");

    assert_close("cash invested", bank.cash_invested, 1_500_000.0, 1e-12);
    assert_close("loan", bank.loan_amount, 3_500_000.0, 1e-12);
    assert_close(
        "payment",
        bank.annual_loan_payment,
        annual_payment(3_500_000.0, 4.5, 15),
        1e-12,
    );
    assert!(
        (315_000.0..330_000.0).contains(&bank.annual_loan_payment),
        "annual payment {}",
        bank.annual_loan_payment
    );
    assert_close(
        "profit",
        bank.annual_profit,
        1_445_400.0 - 115_632.0 - bank.annual_loan_payment,
        1e-12,
    );
    assert!(bank.roi_pct.expect("roi") > cash.roi_pct.expect("roi"));
    assert!(bank.payback_years.expect("payback") < cash.payback_years.expect("payback"));
}

#[test]
fn zero_down_payment_leaves_cash_metrics_undefined() {
    let presets = PresetTable::builtin();
    let financing = FinancingTable::new(vec![FinancingOption::new(
        "FULL_LOAN",
        "Full Loan",
        0.0,
        5.0,
        15,
        "100% bank financed",
    )
    .expect("full loan option")]);
    let r = compute_result(&input("5MW", "FULL_LOAN"), &presets, &financing).expect("full loan");
    assert_eq!(r.cash_invested, 0.0);
    assert_close("loan", r.loan_amount, 5_000_000.0, 1e-12);
    assert_eq!(r.roi_pct, None);
    assert_eq!(r.payback_years, None);
    assert_eq!(r.break_even_month, None);
    assert!(r.is_degenerate());
    // NPV는 투입 현금 0에서도 정의된다.
    assert!(r.npv_25y.is_finite());
}

#[test]
fn every_builtin_combination_is_well_formed() {
    let (presets, financing) = builtin();
    for size in presets.keys() {
        for fin in financing.keys() {
            let r = compute_result(&input(size, fin), &presets, &financing)
                .unwrap_or_else(|e| panic!("{size}/{fin}: {e}"));
            assert!(r.annual_revenue >= 0.0, "{size}/{fin}");
            assert!(r.total_investment > 0.0, "{size}/{fin}");
            assert_close(
                "capital split",
                r.cash_invested + r.loan_amount,
                r.total_investment,
                1e-12,
            );
            let cash = r.cash_invested;
            let roi = r.roi_pct.expect("builtin options always carry cash");
            assert_close("roi identity", roi, r.annual_profit / cash * 100.0, 1e-12);
            let payback = r.payback_years.expect("payback");
            assert_eq!(r.break_even_month, Some((payback * 12.0).ceil() as i64));
        }
    }
}

#[test]
fn higher_interest_never_raises_profit() {
    let presets = PresetTable::builtin();
    let mut last_profit = f64::INFINITY;
    for rate in [0.0, 3.0, 4.5, 6.0, 9.0] {
        let financing = FinancingTable::new(vec![
            FinancingOption::new("BANK", "Bank", 30.0, rate, 15, "").expect("option"),
        ]);
        let r = compute_result(&input("10MW", "BANK"), &presets, &financing).expect("bank");
        assert!(
            r.annual_profit <= last_profit,
            "rate {rate}: profit {} > {last_profit}",
            r.annual_profit
        );
        last_profit = r.annual_profit;
    }
}

#[test]
fn loan_payment_rises_strictly_with_interest_rate() {
    let presets = PresetTable::builtin();
    let mut last_payment = 0.0;
    for rate in [0.5, 3.0, 4.5, 6.0, 9.0] {
        let financing = FinancingTable::new(vec![
            FinancingOption::new("BANK", "Bank", 30.0, rate, 15, "").expect("option"),
        ]);
        let r = compute_result(&input("10MW", "BANK"), &presets, &financing).expect("bank");
        assert!(r.annual_loan_payment > 0.0, "rate {rate}: no loan service");
        assert!(
            r.annual_loan_payment > last_payment,
            "rate {rate}: payment {} not above {last_payment}",
            r.annual_loan_payment
        );
        last_payment = r.annual_loan_payment;
    }
}

#[test]
fn zero_interest_loan_repays_linearly() {
    let presets = PresetTable::builtin();
    let financing = FinancingTable::new(vec![
        FinancingOption::new("FREE", "Interest free", 50.0, 0.0, 10, "").expect("option"),
    ]);
    let r = compute_result(&input("1MW", "FREE"), &presets, &financing).expect("free loan");
    assert_close("payment", r.annual_loan_payment, 500_000.0 / 10.0, 1e-12);
}

#[test]
fn repeated_calls_are_identical() {
    let (presets, financing) = builtin();
    let i = CalculationInput {
        custom_investment: Some(4_800_000.0),
        electricity_rate: 0.21,
        operating_cost_pct: 12.5,
        ..input("5MW", "BANK_80")
    };
    let a = compute_result(&i, &presets, &financing).expect("first");
    let b = compute_result(&i, &presets, &financing).expect("second");
    assert_eq!(a, b);
    assert_close("override", a.total_investment, 4_800_000.0, 1e-12);
}

#[test]
fn bounds_are_inclusive() {
    let (presets, financing) = builtin();
    for (rate, opex) in [(0.10, 5.0), (0.35, 20.0), (0.10, 20.0), (0.35, 5.0)] {
        let i = CalculationInput {
            electricity_rate: rate,
            operating_cost_pct: opex,
            ..CalculationInput::default()
        };
        let r = compute_result(&i, &presets, &financing)
            .unwrap_or_else(|e| panic!("rate {rate} opex {opex}: {e}"));
        assert_close("opex share", r.operating_costs, r.annual_revenue * opex / 100.0, 1e-12);
    }
}

#[test]
fn out_of_range_inputs_are_rejected() {
    let (presets, financing) = builtin();
    let with = |rate: f64, opex: f64| CalculationInput {
        electricity_rate: rate,
        operating_cost_pct: opex,
        ..CalculationInput::default()
    };
    assert_eq!(
        compute_result(&with(0.099, 8.0), &presets, &financing),
        Err(CalculationError::ElectricityRateOutOfRange(0.099))
    );
    assert_eq!(
        compute_result(&with(0.351, 8.0), &presets, &financing),
        Err(CalculationError::ElectricityRateOutOfRange(0.351))
    );
    assert_eq!(
        compute_result(&with(0.15, 4.9), &presets, &financing),
        Err(CalculationError::OperatingCostOutOfRange(4.9))
    );
    assert_eq!(
        compute_result(&with(0.15, 20.1), &presets, &financing),
        Err(CalculationError::OperatingCostOutOfRange(20.1))
    );
    let negative = CalculationInput {
        custom_investment: Some(-1.0),
        ..CalculationInput::default()
    };
    assert_eq!(
        compute_result(&negative, &presets, &financing),
        Err(CalculationError::InvalidInvestment(-1.0))
    );
}

#[test]
fn unknown_keys_are_reported_before_bounds() {
    let (presets, financing) = builtin();
    let bad_size = CalculationInput {
        electricity_rate: 9.0,
        ..input("3MW", "LEASE")
    };
    assert_eq!(
        compute_result(&bad_size, &presets, &financing),
        Err(CalculationError::InvalidPresetKey("3MW".into()))
    );
    assert_eq!(
        compute_result(&input("5MW", "LEASE"), &presets, &financing),
        Err(CalculationError::InvalidFinancingKey("LEASE".into()))
    );
}

#[test]
fn comparison_covers_each_option_in_table_order() {
    let (presets, financing) = builtin();
    let results =
        compare_financing(&input("1MW", "BANK_80"), &presets, &financing).expect("compare");
    let keys: Vec<&str> = results.iter().map(|r| r.financing_key.as_str()).collect();
    assert_eq!(keys, vec!["CASH", "BANK_70", "BANK_80"]);
    let revenue = results[0].annual_revenue;
    assert!(results.iter().all(|r| r.annual_revenue == revenue));
}
