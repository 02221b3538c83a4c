use log::debug;
use std::sync::Arc;

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::reports_model::{
    ExpenseReport, ExpenseReportRow, FinanceReport, IncomeReport, IncomeReportRow,
};
use super::reports_traits::ReportServiceTrait;
use crate::borrowings::BorrowingRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::ExpenseRepositoryTrait;
use crate::incomes::IncomeRepositoryTrait;
use crate::lendings::LendingRepositoryTrait;
use crate::summary::MonthlySummaryServiceTrait;
use crate::utils::time_utils::month_range;

/// Assembles report data from the aggregation engine and record listings.
pub struct ReportService {
    monthly_summary_service: Arc<dyn MonthlySummaryServiceTrait>,
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
    lending_repository: Arc<dyn LendingRepositoryTrait>,
}

impl ReportService {
    /// Creates a new ReportService instance.
    pub fn new(
        monthly_summary_service: Arc<dyn MonthlySummaryServiceTrait>,
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
        lending_repository: Arc<dyn LendingRepositoryTrait>,
    ) -> Self {
        ReportService {
            monthly_summary_service,
            income_repository,
            expense_repository,
            borrowing_repository,
            lending_repository,
        }
    }

    fn year_range(year: i32) -> Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(Error::Validation(ValidationError::InvalidPeriod(format!(
                "no calendar bounds for year {year}"
            )))),
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn finance_report(&self, user_id: &str, year: i32, month: u32) -> Result<FinanceReport> {
        debug!(
            "Assembling finance report for user {} ({}-{:02})",
            user_id, year, month
        );
        let summary = self
            .monthly_summary_service
            .get_monthly_summary(user_id, year, month)?;

        // The rendered report presents borrowing/lending activity for the
        // whole year alongside the month's cash flow.
        let (year_start, year_end) = Self::year_range(year)?;
        let total_borrowed =
            self.borrowing_repository
                .sum_for_user_in_range(user_id, year_start, year_end)?;
        let total_lent =
            self.lending_repository
                .sum_for_user_in_range(user_id, year_start, year_end)?;

        Ok(FinanceReport {
            year,
            month,
            total_income: summary.total_income.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_expense: summary.total_expense.round_dp(DISPLAY_DECIMAL_PRECISION),
            savings: summary.savings.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_borrowed: total_borrowed.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_lent: total_lent.round_dp(DISPLAY_DECIMAL_PRECISION),
        })
    }

    fn income_report(&self, user_id: &str, year: i32, month: u32) -> Result<IncomeReport> {
        let (start, end) = month_range(year, month)?;
        let incomes = self
            .income_repository
            .list_for_user_in_range(user_id, start, end)?;

        let total_income = incomes
            .iter()
            .fold(Decimal::zero(), |acc, income| acc + income.amount);
        let rows = incomes
            .into_iter()
            .map(|income| IncomeReportRow {
                income_date: income.income_date,
                source: income.source,
                amount: income.amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            })
            .collect();

        Ok(IncomeReport {
            year,
            month,
            rows,
            total_income: total_income.round_dp(DISPLAY_DECIMAL_PRECISION),
        })
    }

    fn expense_report(&self, user_id: &str, year: i32, month: u32) -> Result<ExpenseReport> {
        let (start, end) = month_range(year, month)?;
        let mut expenses = self
            .expense_repository
            .list_for_user_in_range(user_id, start, end)?;
        expenses.sort_by_key(|expense| expense.expense_date);

        let total_expense = expenses
            .iter()
            .fold(Decimal::zero(), |acc, expense| acc + expense.amount);
        let rows = expenses
            .into_iter()
            .map(|expense| ExpenseReportRow {
                expense_date: expense.expense_date,
                description: expense.description,
                category: expense.category,
                amount: expense.amount.round_dp(DISPLAY_DECIMAL_PRECISION),
            })
            .collect();

        Ok(ExpenseReport {
            year,
            month,
            rows,
            total_expense: total_expense.round_dp(DISPLAY_DECIMAL_PRECISION),
        })
    }
}
