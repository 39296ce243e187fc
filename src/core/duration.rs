//! Elapsed-month calculation for recurring cost multipliers

use chrono::NaiveDate;

use crate::consts::DAYS_PER_MONTH;
use crate::error::EngineError;

/// Elapsed months between two dates, used as the multiplier for monthly
/// recurring costs.
///
/// Fractional by policy: a 45-day range is 1.5 months, a same-day range is
/// zero. The divisor is the same 30-day nominal month the rate-based
/// consumable rule extrapolates to.
pub(crate) fn duration_in_months(start: NaiveDate, end: NaiveDate) -> Result<f64, EngineError> {
    if end < start {
        return Err(EngineError::InvalidDateRange { start, end });
    }
    let days = (end - start).num_days();
    Ok(days as f64 / DAYS_PER_MONTH)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn same_day_is_zero_months() {
        assert_eq!(
            duration_in_months(d(2026, 3, 1), d(2026, 3, 1)).unwrap(),
            0.0
        );
    }

    #[test]
    fn thirty_days_is_one_month() {
        assert_eq!(
            duration_in_months(d(2026, 3, 1), d(2026, 3, 31)).unwrap(),
            1.0
        );
    }

    #[test]
    fn forty_five_days_is_fractional() {
        assert_eq!(
            duration_in_months(d(2026, 3, 1), d(2026, 4, 15)).unwrap(),
            1.5
        );
    }

    #[test]
    fn multi_year_range() {
        // 2026-01-01 to 2028-01-01 = 730 days
        let months = duration_in_months(d(2026, 1, 1), d(2028, 1, 1)).unwrap();
        assert!((months - 730.0 / 30.0).abs() < 1e-12);
        assert!(months > 24.0);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = duration_in_months(d(2026, 6, 1), d(2026, 5, 1)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDateRange {
                start: d(2026, 6, 1),
                end: d(2026, 5, 1),
            }
        );
    }
}
