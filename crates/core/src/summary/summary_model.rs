//! Aggregation output models.
//!
//! One canonical field per metric; boundary layers rename if a consumer
//! needs a legacy spelling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time totals for the summary view.
///
/// Income, expense, and balance are all-time; borrowed/lent cover only
/// unsettled obligations; the overdue fields are relative to the reference
/// date the aggregation was computed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`, signed; never clamped.
    pub balance: Decimal,
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
    pub overdue_borrowed: Decimal,
    pub overdue_lent: Decimal,
}

/// Totals for one calendar month.
///
/// Borrowed/lent are scoped by origination date within the month;
/// `total_unsettled` is the all-time outstanding balance across both
/// obligation kinds, not restricted to the month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`, signed; never clamped.
    pub savings: Decimal,
    pub total_borrowed: Decimal,
    pub total_lent: Decimal,
    pub total_unsettled: Decimal,
}
