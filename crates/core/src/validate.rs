//! Pure input validation.
//!
//! The interaction shell owns all retry loops; these functions only decide
//! whether one piece of input is acceptable.

use chrono::NaiveDate;

use crate::error::{InventoryError, InventoryResult};

/// Parse `text` as an ISO `YYYY-MM-DD` expiry date and reject dates strictly
/// before `today`.
pub fn validate_expiry(text: &str, today: NaiveDate) -> InventoryResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| InventoryError::InvalidFormat(text.trim().to_string()))?;
    if date < today {
        return Err(InventoryError::PastDate(date));
    }
    Ok(date)
}

/// Parse `text` as a strictly positive decimal quantity/amount.
pub fn parse_amount(text: &str) -> InventoryResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| InventoryError::NotANumber(text.trim().to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(InventoryError::NonPositive(value));
    }
    Ok(value)
}

/// Trim `text` and reject empty units.
pub fn validate_unit(text: &str) -> InventoryResult<String> {
    let unit = text.trim();
    if unit.is_empty() {
        return Err(InventoryError::EmptyUnit);
    }
    Ok(unit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_future_date_is_accepted() {
        let today = day(2025, 1, 1);
        assert_eq!(validate_expiry("2025-08-01", today).unwrap(), day(2025, 8, 1));
    }

    #[test]
    fn today_is_not_expired() {
        let today = day(2025, 1, 1);
        assert_eq!(validate_expiry("2025-01-01", today).unwrap(), today);
    }

    #[test]
    fn past_date_is_rejected() {
        let today = day(2025, 1, 1);
        assert_eq!(
            validate_expiry("2020-01-01", today).unwrap_err(),
            InventoryError::PastDate(day(2020, 1, 1))
        );
    }

    #[test]
    fn unparseable_date_is_rejected() {
        let today = day(2025, 1, 1);
        match validate_expiry("not-a-date", today).unwrap_err() {
            InventoryError::InvalidFormat(s) => assert_eq!(s, "not-a-date"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn amounts_must_be_numeric_and_positive() {
        assert_eq!(parse_amount("2.5").unwrap(), 2.5);
        assert!(matches!(
            parse_amount("three").unwrap_err(),
            InventoryError::NotANumber(_)
        ));
        assert!(matches!(
            parse_amount("0").unwrap_err(),
            InventoryError::NonPositive(_)
        ));
        assert!(matches!(
            parse_amount("-1.5").unwrap_err(),
            InventoryError::NonPositive(_)
        ));
    }

    #[test]
    fn units_are_trimmed_and_non_empty() {
        assert_eq!(validate_unit(" kg ").unwrap(), "kg");
        assert_eq!(validate_unit("   ").unwrap_err(), InventoryError::EmptyUnit);
    }
}
