//! Period-over-period reporting metrics
//!
//! Display metrics only; they never feed back into cost totals. A zero
//! denominator resolves to zero so the UI never sees NaN or Infinity.

use chrono::Datelike;

use crate::core::series::MonthlySeries;

pub(crate) fn pct_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Change between the last two buckets of an ordered series
pub(crate) fn period_over_period(values: &[f64]) -> f64 {
    match values {
        [.., previous, current] => pct_change(*current, *previous),
        _ => 0.0,
    }
}

/// Change between the calendar year of the latest month and the year
/// before it
pub(crate) fn year_over_year(series: &MonthlySeries) -> f64 {
    let Some((latest, _)) = series.points.last() else {
        return 0.0;
    };
    let year = latest.year();
    let sum_for = |y: i32| -> f64 {
        series
            .points
            .iter()
            .filter(|(month, _)| month.year() == y)
            .map(|(_, point)| point.total())
            .sum()
    };
    pct_change(sum_for(year), sum_for(year - 1))
}
