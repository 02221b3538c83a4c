use log::debug;
use std::sync::Arc;

use super::summary_model::MonthlySummary;
use super::summary_traits::MonthlySummaryServiceTrait;
use crate::borrowings::BorrowingRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::incomes::IncomeRepositoryTrait;
use crate::lendings::LendingRepositoryTrait;
use crate::utils::time_utils::month_range;

/// Computes the calendar-month summary for one user.
pub struct MonthlySummaryService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
    lending_repository: Arc<dyn LendingRepositoryTrait>,
}

impl MonthlySummaryService {
    /// Creates a new MonthlySummaryService instance.
    pub fn new(
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
        lending_repository: Arc<dyn LendingRepositoryTrait>,
    ) -> Self {
        MonthlySummaryService {
            income_repository,
            expense_repository,
            borrowing_repository,
            lending_repository,
        }
    }
}

impl MonthlySummaryServiceTrait for MonthlySummaryService {
    fn get_monthly_summary(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary> {
        let (start, end) = month_range(year, month)?;
        debug!(
            "Computing monthly summary for user {} over [{}, {}]",
            user_id, start, end
        );

        let total_income = self
            .income_repository
            .sum_for_user_in_range(user_id, start, end)?;
        let total_expense = self
            .expense_repository
            .sum_for_user_in_range(user_id, start, end)?;

        // Scoped by origination date: these answer "how much new borrowing
        // / lending occurred this month", not what is outstanding.
        let total_borrowed = self
            .borrowing_repository
            .sum_for_user_in_range(user_id, start, end)?;
        let total_lent = self
            .lending_repository
            .sum_for_user_in_range(user_id, start, end)?;

        // The outstanding balance is deliberately not month-scoped: every
        // unsettled obligation counts, whenever it originated.
        let total_unsettled = self.borrowing_repository.sum_unsettled_for_user(user_id)?
            + self.lending_repository.sum_unsettled_for_user(user_id)?;

        Ok(MonthlySummary {
            total_income,
            total_expense,
            savings: total_income - total_expense,
            total_borrowed,
            total_lent,
            total_unsettled,
        })
    }
}
