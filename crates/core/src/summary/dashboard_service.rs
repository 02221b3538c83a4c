use log::debug;
use std::sync::Arc;

use chrono::NaiveDate;

use super::summary_model::DashboardSummary;
use super::summary_traits::DashboardServiceTrait;
use crate::borrowings::BorrowingRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::incomes::IncomeRepositoryTrait;
use crate::lendings::LendingRepositoryTrait;
use crate::utils::time_utils::today_utc;

/// Computes the point-in-time dashboard totals for one user.
///
/// Every metric comes from a store-side sum; an empty result set
/// contributes the additive identity rather than an absent value. Store
/// failures are propagated unchanged - a read aggregate can always be
/// retried by the caller.
pub struct DashboardService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
    lending_repository: Arc<dyn LendingRepositoryTrait>,
}

impl DashboardService {
    /// Creates a new DashboardService instance.
    pub fn new(
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        borrowing_repository: Arc<dyn BorrowingRepositoryTrait>,
        lending_repository: Arc<dyn LendingRepositoryTrait>,
    ) -> Self {
        DashboardService {
            income_repository,
            expense_repository,
            borrowing_repository,
            lending_repository,
        }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary> {
        // Captured once so the overdue metrics stay consistent across a
        // midnight boundary within a single computation.
        let as_of = today_utc();
        self.get_dashboard_as_of(user_id, as_of)
    }

    fn get_dashboard_as_of(&self, user_id: &str, as_of: NaiveDate) -> Result<DashboardSummary> {
        debug!("Computing dashboard for user {} as of {}", user_id, as_of);

        let total_income = self.income_repository.sum_for_user(user_id)?;
        let total_expense = self.expense_repository.sum_for_user(user_id)?;

        // Outstanding obligations only; settled records drop out of every
        // dashboard metric.
        let total_borrowed = self.borrowing_repository.sum_unsettled_for_user(user_id)?;
        let total_lent = self.lending_repository.sum_unsettled_for_user(user_id)?;

        let overdue_borrowed = self
            .borrowing_repository
            .sum_overdue_for_user(user_id, as_of)?;
        let overdue_lent = self.lending_repository.sum_overdue_for_user(user_id, as_of)?;

        Ok(DashboardSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            total_borrowed,
            total_lent,
            overdue_borrowed,
            overdue_lent,
        })
    }
}
