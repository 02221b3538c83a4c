//! Calendar helpers shared by the aggregation engine and the services.

use chrono::{Month, NaiveDate, Utc};

use crate::constants::{MAX_MONTH, MIN_MONTH};
use crate::errors::{Error, Result, ValidationError};

/// Returns the current UTC calendar date.
///
/// This is the single source of truth for "today". Aggregations capture it
/// once per call and thread it through as an explicit parameter so a single
/// computation stays internally consistent across a midnight boundary.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Resolves a month given either its number ("2") or its English name
/// ("February", "feb"), case-insensitive.
///
/// Fails with an invalid-period error instead of defaulting.
pub fn parse_month(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        if (MIN_MONTH..=MAX_MONTH).contains(&number) {
            return Ok(number);
        }
        return Err(Error::Validation(ValidationError::InvalidPeriod(format!(
            "month number {number} is out of range 1-12"
        ))));
    }

    trimmed
        .parse::<Month>()
        .map(|month| month.number_from_month())
        .map_err(|_| {
            Error::Validation(ValidationError::InvalidPeriod(format!(
                "unrecognized month '{trimmed}'"
            )))
        })
}

/// Returns the inclusive `[first day, last day]` bounds of a calendar month.
///
/// Month length and leap years follow the calendar; an unresolvable
/// (year, month) pair is an invalid period, never a silent default.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidPeriod(format!(
            "no calendar month for year {year}, month {month}"
        )))
    })?;

    let (next_year, next_month) = if month == MAX_MONTH {
        (year + 1, MIN_MONTH)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidPeriod(format!(
                "no calendar month following year {year}, month {month}"
            )))
        })?;

    Ok((start, end))
}
