//! 투자 수익성 계산: 규모 프리셋, 금융 옵션, 대출 상환, ROI 엔진.

pub mod financing;
pub mod loan;
pub mod presets;
pub mod roi;
pub mod tables;

pub use financing::{FinancingOption, FinancingTable};
pub use presets::{InvestmentSizePreset, PresetTable};
pub use roi::{
    compare_financing, compute_result, loan_schedule, project_cash_flows, CalculationError,
    CalculationInput, CalculationResult, ProjectedYear,
};
pub use tables::{CalculatorTables, TableError};
