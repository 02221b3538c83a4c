//! Reports module - data assembly for rendered documents.
//!
//! Assembles plain, serializable report data from the aggregation engine
//! and the record listings. Document layout and rendering belong to the
//! boundary layer.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{
    ExpenseReport, ExpenseReportRow, FinanceReport, IncomeReport, IncomeReportRow,
};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
