//! Income domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a single income record.
///
/// Immutable from the engine's perspective; mutated only by the explicit
/// edit/delete operations on [`crate::incomes::IncomeService`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    pub source: String,
    pub description: Option<String>,
    pub income_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for recording a new income.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Decimal,
    pub source: String,
    pub description: Option<String>,
    pub income_date: NaiveDate,
}

impl NewIncome {
    /// Validates the new income data.
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount cannot be negative".to_string(),
            )));
        }
        if self.source.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "source".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for editing an existing income.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub id: String,
    pub amount: Decimal,
    pub source: String,
    pub description: Option<String>,
    pub income_date: NaiveDate,
}

impl IncomeUpdate {
    /// Validates the income update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.amount.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount cannot be negative".to_string(),
            )));
        }
        if self.source.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "source".to_string(),
            )));
        }
        Ok(())
    }
}
