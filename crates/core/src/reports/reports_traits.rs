use super::reports_model::{ExpenseReport, FinanceReport, IncomeReport};
use crate::errors::Result;

/// Trait defining the contract for report data assembly.
///
/// Implementations return plain data for a document renderer; they never
/// render or persist anything themselves.
pub trait ReportServiceTrait: Send + Sync {
    /// Assembles the month's finance overview.
    fn finance_report(&self, user_id: &str, year: i32, month: u32) -> Result<FinanceReport>;

    /// Assembles the month's income listing.
    fn income_report(&self, user_id: &str, year: i32, month: u32) -> Result<IncomeReport>;

    /// Assembles the month's expense listing, ordered by day.
    fn expense_report(&self, user_id: &str, year: i32, month: u32) -> Result<ExpenseReport>;
}
