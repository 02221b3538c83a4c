//! Report data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month-level finance overview for the finance report document.
///
/// Income, expense, and savings are month-scoped; borrowed and lent cover
/// the whole calendar year, which is the period the rendered report
/// presents them for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceReport {
    pub year: i32,
    pub month: u32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub savings: Decimal,
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
}

/// One income line on the income report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReportRow {
    pub income_date: NaiveDate,
    pub source: String,
    pub amount: Decimal,
}

/// Month listing of incomes plus their total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<IncomeReportRow>,
    pub total_income: Decimal,
}

/// One expense line on the expense report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReportRow {
    pub expense_date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
}

/// Month listing of expenses, ordered by day, plus their total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReport {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<ExpenseReportRow>,
    pub total_expense: Decimal,
}
