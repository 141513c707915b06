//! Input checks matching the column definitions
//!
//! SQLite does not enforce VARCHAR lengths or decimal precision, so the
//! limits are checked here to behave the same on every backend.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::StoreError;

/// Largest magnitude a DECIMAL(10, 2) column holds
const MONEY_LIMIT: i64 = 100_000_000;

pub(crate) fn check_len(field: &str, value: &str, max: usize) -> Result<(), StoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(StoreError::Invalid(format!(
            "{field} is {len} characters long (max {max})"
        )));
    }
    Ok(())
}

pub(crate) fn check_money(field: &str, amount: Decimal) -> Result<(), StoreError> {
    if amount.normalize().scale() > 2 {
        return Err(StoreError::Invalid(format!(
            "{field} has more than 2 decimal places: {amount}"
        )));
    }
    if amount.abs() >= Decimal::from(MONEY_LIMIT) {
        return Err(StoreError::Invalid(format!(
            "{field} exceeds 10 digits: {amount}"
        )));
    }
    Ok(())
}

pub(crate) fn check_window(
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<(), StoreError> {
    if starts_at > ends_at {
        return Err(StoreError::Invalid(format!(
            "start {starts_at} is after end {ends_at}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_len_counts_characters() {
        assert!(check_len("name", "Águilas", 7).is_ok());
        assert!(check_len("name", "Águilas!", 7).is_err());
    }

    #[test]
    fn test_check_money_scale() {
        assert!(check_money("amount", dec!(25.50)).is_ok());
        assert!(check_money("amount", dec!(25.500)).is_ok());
        assert!(check_money("amount", dec!(0.00)).is_ok());
        assert!(check_money("amount", dec!(-3.10)).is_ok());
        assert!(check_money("amount", dec!(25.505)).is_err());
    }

    #[test]
    fn test_check_money_magnitude() {
        assert!(check_money("amount", dec!(99999999.99)).is_ok());
        assert!(check_money("amount", dec!(100000000.00)).is_err());
    }

    #[test]
    fn test_check_window() {
        let start = Utc.with_ymd_and_hms(2025, 4, 12, 8, 0, 0).unwrap();
        assert!(check_window(start, start).is_ok());
        assert!(check_window(start, start + Duration::days(2)).is_ok());
        assert!(check_window(start + Duration::hours(1), start).is_err());
    }
}
