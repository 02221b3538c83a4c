/// Decimal precision for amounts shown on summaries and reports.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Lower bound of the calendar month range accepted by period queries.
pub const MIN_MONTH: u32 = 1;

/// Upper bound of the calendar month range accepted by period queries.
pub const MAX_MONTH: u32 = 12;
