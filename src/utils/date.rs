use chrono::{Datelike, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// First day of the month containing `date`
pub(crate) fn month_floor(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Linear month index (year * 12 + zero-based month), for month arithmetic
pub(crate) fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Inverse of `month_index`: the first day of the indexed month
pub(crate) fn month_from_index(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), (index.rem_euclid(12) + 1) as u32, 1)
}

/// "YYYY-MM" label for a month
pub(crate) fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Monday of the week containing `date` (ISO week)
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    date - chrono::Duration::days(weekday as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_date_both_formats() {
        assert_eq!(parse_date("20260301").unwrap(), d(2026, 3, 1));
        assert_eq!(parse_date("2026-03-01").unwrap(), d(2026, 3, 1));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }

    #[test]
    fn month_floor_mid_month() {
        assert_eq!(month_floor(d(2026, 3, 17)), d(2026, 3, 1));
        assert_eq!(month_floor(d(2026, 3, 1)), d(2026, 3, 1));
    }

    #[test]
    fn month_index_round_trip() {
        let m = d(2026, 12, 1);
        assert_eq!(month_from_index(month_index(m)), Some(m));
    }

    #[test]
    fn month_index_spans_year_boundary() {
        assert_eq!(month_index(d(2027, 1, 1)) - month_index(d(2026, 12, 1)), 1);
    }

    #[test]
    fn week_start_returns_monday() {
        // 2026-03-04 is a Wednesday
        assert_eq!(week_start(d(2026, 3, 4)), d(2026, 3, 2));
        // already Monday
        assert_eq!(week_start(d(2026, 3, 2)), d(2026, 3, 2));
        // cross-year: 2026-01-01 is a Thursday
        assert_eq!(week_start(d(2026, 1, 1)), d(2025, 12, 29));
    }

    #[test]
    fn month_label_format() {
        assert_eq!(month_label(d(2026, 3, 1)), "2026-03");
    }
}
