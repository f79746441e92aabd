//! 태양광 발전소 투자 수익성 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod analytics;
pub mod app;
pub mod config;
pub mod finance;
pub mod i18n;
pub mod report;
pub mod session;
pub mod ui_cli;
pub mod view;
