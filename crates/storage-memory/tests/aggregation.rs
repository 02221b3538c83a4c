//! End-to-end aggregation tests: the engine driven through the in-memory
//! Ledger Store.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use cashtrack_core::borrowings::{
    BorrowingRepositoryTrait, BorrowingService, BorrowingServiceTrait, NewBorrowing,
};
use cashtrack_core::expenses::{
    ExpenseRepositoryTrait, ExpenseService, ExpenseServiceTrait, NewExpense,
};
use cashtrack_core::incomes::{IncomeRepositoryTrait, IncomeService, IncomeServiceTrait, NewIncome};
use cashtrack_core::lendings::{
    LendingRepositoryTrait, LendingService, LendingServiceTrait, NewLending,
};
use cashtrack_core::reports::{ReportService, ReportServiceTrait};
use cashtrack_core::summary::{
    DashboardService, DashboardServiceTrait, MonthlySummaryService, MonthlySummaryServiceTrait,
};
use cashtrack_core::users::User;
use cashtrack_core::utils::time_utils::parse_month;
use cashtrack_storage_memory::{
    MemoryBorrowingRepository, MemoryExpenseRepository, MemoryIncomeRepository,
    MemoryLedgerStore, MemoryLendingRepository,
};

struct Fixture {
    user: User,
    incomes: IncomeService,
    expenses: ExpenseService,
    borrowings: BorrowingService,
    lendings: LendingService,
    dashboard: DashboardService,
    monthly: Arc<MonthlySummaryService>,
    reports: ReportService,
}

fn fixture() -> Fixture {
    let store = Arc::new(MemoryLedgerStore::new());
    let user = store.insert_user("person@example.com");

    let income_repository: Arc<dyn IncomeRepositoryTrait> =
        Arc::new(MemoryIncomeRepository::new(store.clone()));
    let expense_repository: Arc<dyn ExpenseRepositoryTrait> =
        Arc::new(MemoryExpenseRepository::new(store.clone()));
    let borrowing_repository: Arc<dyn BorrowingRepositoryTrait> =
        Arc::new(MemoryBorrowingRepository::new(store.clone()));
    let lending_repository: Arc<dyn LendingRepositoryTrait> =
        Arc::new(MemoryLendingRepository::new(store));

    let monthly = Arc::new(MonthlySummaryService::new(
        income_repository.clone(),
        expense_repository.clone(),
        borrowing_repository.clone(),
        lending_repository.clone(),
    ));

    Fixture {
        user,
        incomes: IncomeService::new(income_repository.clone()),
        expenses: ExpenseService::new(expense_repository.clone()),
        borrowings: BorrowingService::new(borrowing_repository.clone()),
        lendings: LendingService::new(lending_repository.clone()),
        dashboard: DashboardService::new(
            income_repository.clone(),
            expense_repository.clone(),
            borrowing_repository.clone(),
            lending_repository.clone(),
        ),
        monthly: monthly.clone(),
        reports: ReportService::new(
            monthly,
            income_repository,
            expense_repository,
            borrowing_repository,
            lending_repository,
        ),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_income(amount: rust_decimal::Decimal, income_date: NaiveDate) -> NewIncome {
    NewIncome {
        id: None,
        amount,
        source: "Salary".to_string(),
        description: None,
        income_date,
    }
}

fn new_expense(amount: rust_decimal::Decimal, expense_date: NaiveDate) -> NewExpense {
    NewExpense {
        id: None,
        amount,
        category: "Groceries".to_string(),
        description: "weekly shop".to_string(),
        expense_date,
    }
}

fn new_borrowing(
    amount: rust_decimal::Decimal,
    borrow_date: NaiveDate,
    due_date: NaiveDate,
) -> NewBorrowing {
    NewBorrowing {
        id: None,
        counterparty: "Alice".to_string(),
        amount,
        borrow_date,
        due_date,
    }
}

fn new_lending(
    amount: rust_decimal::Decimal,
    lend_date: NaiveDate,
    due_date: NaiveDate,
) -> NewLending {
    NewLending {
        id: None,
        counterparty: "Bob".to_string(),
        amount,
        lend_date,
        due_date,
    }
}

#[test]
fn empty_ledger_produces_all_zero_aggregates() {
    let fx = fixture();

    let dashboard = fx
        .dashboard
        .get_dashboard_as_of(&fx.user.id, date(2025, 6, 15))
        .unwrap();
    assert_eq!(dashboard, Default::default());

    let monthly = fx.monthly.get_monthly_summary(&fx.user.id, 2025, 6).unwrap();
    assert_eq!(monthly, Default::default());
}

#[test]
fn unknown_owner_is_reported_as_not_found() {
    let fx = fixture();

    let err = fx
        .dashboard
        .get_dashboard_as_of("no-such-user", date(2025, 6, 15))
        .unwrap_err();
    assert!(err.is_not_found());

    let err = fx
        .monthly
        .get_monthly_summary("no-such-user", 2025, 6)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn dashboard_reflects_the_whole_ledger() {
    let fx = fixture();
    let user = &fx.user.id;
    let as_of = date(2025, 6, 15);
    let yesterday = date(2025, 6, 14);
    let tomorrow = date(2025, 6, 16);

    fx.incomes
        .add_income(user, new_income(dec!(1000), date(2024, 11, 3)))
        .await
        .unwrap();
    fx.incomes
        .add_income(user, new_income(dec!(500), date(2025, 3, 20)))
        .await
        .unwrap();
    fx.expenses
        .add_expense(user, new_expense(dec!(300), date(2025, 3, 12)))
        .await
        .unwrap();

    // One borrowing stays open past its due date, one is repaid.
    fx.borrowings
        .add_borrowing(user, new_borrowing(dec!(200), date(2025, 5, 1), yesterday))
        .await
        .unwrap();
    let repaid = fx
        .borrowings
        .add_borrowing(user, new_borrowing(dec!(300), date(2025, 5, 2), yesterday))
        .await
        .unwrap();
    fx.borrowings
        .settle_borrowing(user, &repaid.id)
        .await
        .unwrap();

    fx.lendings
        .add_lending(user, new_lending(dec!(150), date(2025, 6, 1), tomorrow))
        .await
        .unwrap();

    let dashboard = fx.dashboard.get_dashboard_as_of(user, as_of).unwrap();

    assert_eq!(dashboard.total_income, dec!(1500));
    assert_eq!(dashboard.total_expense, dec!(300));
    assert_eq!(dashboard.balance, dec!(1200));
    assert_eq!(dashboard.total_borrowed, dec!(200));
    assert_eq!(dashboard.total_lent, dec!(150));
    assert_eq!(dashboard.overdue_borrowed, dec!(200));
    assert_eq!(dashboard.overdue_lent, dec!(0));
}

#[tokio::test]
async fn monthly_summary_scopes_activity_but_not_outstanding_balance() {
    let fx = fixture();
    let user = &fx.user.id;

    fx.incomes
        .add_income(user, new_income(dec!(1000), date(2025, 3, 5)))
        .await
        .unwrap();
    fx.incomes
        .add_income(user, new_income(dec!(500), date(2025, 3, 20)))
        .await
        .unwrap();
    fx.expenses
        .add_expense(user, new_expense(dec!(300), date(2025, 3, 12)))
        .await
        .unwrap();

    // Originated in January, still open: outside March activity, inside
    // the outstanding balance.
    fx.borrowings
        .add_borrowing(
            user,
            new_borrowing(dec!(300), date(2025, 1, 5), date(2025, 7, 1)),
        )
        .await
        .unwrap();
    // Originated and repaid in March: March activity, no longer owed.
    let repaid = fx
        .borrowings
        .add_borrowing(
            user,
            new_borrowing(dec!(200), date(2025, 3, 10), date(2025, 7, 1)),
        )
        .await
        .unwrap();
    fx.borrowings
        .settle_borrowing(user, &repaid.id)
        .await
        .unwrap();

    fx.lendings
        .add_lending(
            user,
            new_lending(dec!(150), date(2025, 3, 18), date(2025, 8, 1)),
        )
        .await
        .unwrap();

    let summary = fx.monthly.get_monthly_summary(user, 2025, 3).unwrap();

    assert_eq!(summary.total_income, dec!(1500));
    assert_eq!(summary.total_expense, dec!(300));
    assert_eq!(summary.savings, dec!(1200));
    assert_eq!(summary.total_borrowed, dec!(200));
    assert_eq!(summary.total_lent, dec!(150));
    assert_eq!(summary.total_unsettled, dec!(450));

    // A different month sees no March activity, but the same outstanding
    // balance.
    let february = fx.monthly.get_monthly_summary(user, 2025, 2).unwrap();
    assert_eq!(february.total_income, dec!(0));
    assert_eq!(february.total_borrowed, dec!(0));
    assert_eq!(february.total_unsettled, dec!(450));
}

#[tokio::test]
async fn settling_moves_dashboard_totals_without_rewriting_history() {
    let fx = fixture();
    let user = &fx.user.id;
    let as_of = date(2025, 6, 15);

    let borrowing = fx
        .borrowings
        .add_borrowing(
            user,
            new_borrowing(dec!(200), date(2025, 3, 10), date(2025, 6, 1)),
        )
        .await
        .unwrap();

    let before = fx.dashboard.get_dashboard_as_of(user, as_of).unwrap();
    assert_eq!(before.total_borrowed, dec!(200));
    assert_eq!(before.overdue_borrowed, dec!(200));

    fx.borrowings
        .settle_borrowing(user, &borrowing.id)
        .await
        .unwrap();

    let after = fx.dashboard.get_dashboard_as_of(user, as_of).unwrap();
    assert_eq!(after.total_borrowed, dec!(0));
    assert_eq!(after.overdue_borrowed, dec!(0));

    let march = fx.monthly.get_monthly_summary(user, 2025, 3).unwrap();
    assert_eq!(march.total_borrowed, dec!(200));
    assert_eq!(march.total_unsettled, dec!(0));
}

#[tokio::test]
async fn finance_report_pairs_month_cash_flow_with_year_obligations() {
    let fx = fixture();
    let user = &fx.user.id;

    fx.incomes
        .add_income(user, new_income(dec!(1500), date(2025, 3, 5)))
        .await
        .unwrap();
    fx.expenses
        .add_expense(user, new_expense(dec!(300), date(2025, 3, 12)))
        .await
        .unwrap();
    fx.borrowings
        .add_borrowing(
            user,
            new_borrowing(dec!(100), date(2025, 1, 15), date(2025, 9, 1)),
        )
        .await
        .unwrap();
    fx.lendings
        .add_lending(
            user,
            new_lending(dec!(50), date(2025, 11, 2), date(2026, 1, 1)),
        )
        .await
        .unwrap();
    // Previous year's borrowing stays off this year's report.
    fx.borrowings
        .add_borrowing(
            user,
            new_borrowing(dec!(999), date(2024, 6, 1), date(2025, 1, 1)),
        )
        .await
        .unwrap();

    let report = fx.reports.finance_report(user, 2025, 3).unwrap();

    assert_eq!(report.total_income, dec!(1500));
    assert_eq!(report.total_expense, dec!(300));
    assert_eq!(report.savings, dec!(1200));
    assert_eq!(report.total_borrowed, dec!(100));
    assert_eq!(report.total_lent, dec!(50));
}

#[tokio::test]
async fn expense_report_lists_the_month_ordered_by_day() {
    let fx = fixture();
    let user = &fx.user.id;

    fx.expenses
        .add_expense(user, new_expense(dec!(30), date(2025, 3, 25)))
        .await
        .unwrap();
    fx.expenses
        .add_expense(user, new_expense(dec!(10), date(2025, 3, 2)))
        .await
        .unwrap();
    fx.expenses
        .add_expense(user, new_expense(dec!(99), date(2025, 4, 1)))
        .await
        .unwrap();

    let report = fx.reports.expense_report(user, 2025, 3).unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].expense_date, date(2025, 3, 2));
    assert_eq!(report.rows[1].expense_date, date(2025, 3, 25));
    assert_eq!(report.total_expense, dec!(40));
}

#[tokio::test]
async fn month_names_resolve_before_aggregation() {
    let fx = fixture();
    let user = &fx.user.id;

    fx.incomes
        .add_income(user, new_income(dec!(750), date(2025, 2, 14)))
        .await
        .unwrap();

    let month = parse_month("February").unwrap();
    let summary = fx.monthly.get_monthly_summary(user, 2025, month).unwrap();

    assert_eq!(summary.total_income, dec!(750));
    assert!(parse_month("Febtober").is_err());
}
