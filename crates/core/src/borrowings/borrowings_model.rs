//! Borrowing domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::summary::is_overdue;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing money the user owes to a counterparty.
///
/// `settled` starts false and is flipped exactly once by the settle
/// operation; no other write path touches it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Borrowing {
    pub id: String,
    pub user_id: String,
    pub counterparty: String,
    pub amount: Decimal,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub settled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Borrowing {
    /// True when this obligation is unsettled and due on or before `as_of`.
    pub fn is_overdue_as_of(&self, as_of: NaiveDate) -> bool {
        is_overdue(self.settled, self.due_date, as_of)
    }
}

fn validate_obligation(
    counterparty: &str,
    amount: Decimal,
    origination: NaiveDate,
    due: NaiveDate,
) -> Result<()> {
    if counterparty.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "counterparty".to_string(),
        )));
    }
    if amount.is_sign_negative() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount cannot be negative".to_string(),
        )));
    }
    if due < origination {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Due date cannot precede the origination date".to_string(),
        )));
    }
    Ok(())
}

/// Input model for recording a new borrowing. The record always starts
/// unsettled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBorrowing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub counterparty: String,
    pub amount: Decimal,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl NewBorrowing {
    pub fn validate(&self) -> Result<()> {
        validate_obligation(
            &self.counterparty,
            self.amount,
            self.borrow_date,
            self.due_date,
        )
    }
}

/// Input model for editing an existing borrowing.
///
/// Carries no settled flag: settling is a separate, one-way operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowingUpdate {
    pub id: String,
    pub counterparty: String,
    pub amount: Decimal,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl BorrowingUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_obligation(
            &self.counterparty,
            self.amount,
            self.borrow_date,
            self.due_date,
        )
    }
}
