//! Summary module - the aggregation engine.
//!
//! Computes dashboard totals and monthly summaries over the four ledger
//! record kinds. Every aggregation is a pure function of (user, optional
//! period, reference date, ledger contents): the services hold no state
//! beyond their repository handles and perform no writes.

mod dashboard_service;
mod monthly_summary_service;
mod overdue;
mod summary_model;
mod summary_traits;



pub use dashboard_service::DashboardService;
pub use monthly_summary_service::MonthlySummaryService;
pub use overdue::is_overdue;
pub use summary_model::{DashboardSummary, MonthlySummary};
pub use summary_traits::{DashboardServiceTrait, MonthlySummaryServiceTrait};
