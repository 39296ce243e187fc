//! Forward projection of recurring spend under compounding inflation
//!
//! The inflation rate steps once per 12-month block, so months 1-12 carry
//! the baseline unchanged, months 13-24 one compounding step, and so on.
//! The one-time cost applies to month 1 only.

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProjectedMonth {
    /// 1-based month number
    pub(crate) month: u32,
    pub(crate) amount: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct Projection {
    pub(crate) months: Vec<ProjectedMonth>,
    pub(crate) annual_rate: f64,
}

impl Projection {
    pub(crate) fn total(&self) -> f64 {
        self.months.iter().map(|m| m.amount).sum()
    }

    /// Sum of each 12-month block; the final block may be partial.
    pub(crate) fn yearly(&self) -> Vec<f64> {
        self.months
            .chunks(12)
            .map(|block| block.iter().map(|m| m.amount).sum())
            .collect()
    }
}

pub(crate) fn project(
    baseline_monthly: f64,
    one_time: f64,
    horizon_months: u32,
    annual_rate: f64,
) -> Projection {
    let months = (1..=horizon_months)
        .map(|month| {
            let factor = (1.0 + annual_rate).powi(((month - 1) / 12) as i32);
            let mut amount = baseline_monthly * factor;
            if month == 1 {
                amount += one_time;
            }
            ProjectedMonth { month, amount }
        })
        .collect();
    Projection {
        months,
        annual_rate,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn one_time_applies_to_first_month_only() {
        let p = project(10000.0, 5000.0, 25, 0.03);
        assert_eq!(p.months[0].amount, 15000.0);
        assert_eq!(p.months[1].amount, 10000.0);
    }

    #[test]
    fn inflation_steps_at_each_year_boundary() {
        let p = project(10000.0, 5000.0, 25, 0.03);
        // month 12 still uninflated, month 13 one step, month 25 two steps
        assert_eq!(p.months[11].amount, 10000.0);
        assert!((p.months[12].amount - 10300.0).abs() < 1e-9);
        assert!((p.months[24].amount - 10609.0).abs() < 1e-9);
    }

    #[test]
    fn default_horizon_is_five_years() {
        use crate::consts::{DEFAULT_INFLATION_RATE, DEFAULT_PROJECTION_MONTHS};
        let p = project(1000.0, 0.0, DEFAULT_PROJECTION_MONTHS, DEFAULT_INFLATION_RATE);
        assert_eq!(p.months.len(), 60);
        assert_eq!(p.yearly().len(), 5);
        assert_eq!(p.annual_rate, 0.03);
    }

    #[test]
    fn yearly_rollups_sum_twelve_month_blocks() {
        let p = project(1000.0, 500.0, 24, 0.10);
        let yearly = p.yearly();
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0], 12000.0 + 500.0);
        assert!((yearly[1] - 12.0 * 1100.0).abs() < 1e-9);
        assert!((p.total() - (yearly[0] + yearly[1])).abs() < 1e-9);
    }

    #[test]
    fn partial_final_block() {
        let p = project(1000.0, 0.0, 14, 0.0);
        let yearly = p.yearly();
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[1], 2000.0);
    }

    #[test]
    fn zero_baseline_projects_only_one_time() {
        let p = project(0.0, 7500.0, 12, 0.03);
        assert_eq!(p.total(), 7500.0);
    }

    #[test]
    fn zero_horizon_is_empty() {
        let p = project(1000.0, 500.0, 0, 0.03);
        assert!(p.months.is_empty());
        assert!(p.yearly().is_empty());
    }
}
