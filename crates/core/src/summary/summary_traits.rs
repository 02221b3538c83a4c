//! Aggregation engine traits.

use chrono::NaiveDate;

use super::summary_model::{DashboardSummary, MonthlySummary};
use crate::errors::Result;

/// Trait defining the contract for the dashboard aggregation.
///
/// Read-only: implementations issue a bounded number of sum queries per
/// call and never write to the Ledger Store.
pub trait DashboardServiceTrait: Send + Sync {
    /// Computes the dashboard for the user, capturing "today" once for
    /// the overdue metrics.
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary>;

    /// Computes the dashboard with an explicit reference date, so callers
    /// and tests can pin the overdue boundary.
    fn get_dashboard_as_of(&self, user_id: &str, as_of: NaiveDate) -> Result<DashboardSummary>;
}

/// Trait defining the contract for the monthly summary aggregation.
pub trait MonthlySummaryServiceTrait: Send + Sync {
    /// Computes the summary for one calendar month. An unresolvable
    /// (year, month) pair is rejected as an invalid period.
    fn get_monthly_summary(&self, user_id: &str, year: i32, month: u32)
        -> Result<MonthlySummary>;
}
