//! Calendar-aware age arithmetic.

use jiff::civil::Date;

use crate::error::CoreError;

/// Whole years elapsed between `birth` and `as_of`.
///
/// A birthday not yet reached in the `as_of` year does not count. A birth
/// date after `as_of` yields 0.
pub fn age_on(birth: Date, as_of: Date) -> u32 {
    let mut years = i32::from(as_of.year()) - i32::from(birth.year());
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<Date, CoreError> {
    raw.trim()
        .parse::<Date>()
        .map_err(|source| CoreError::InvalidDate {
            value: raw.to_string(),
            source,
        })
}
