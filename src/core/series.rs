//! Gap-free monthly cost series and coarser regrouping
//!
//! Built in two steps: accumulate sparse per-month figures into a
//! key-sorted map, then freeze it into a zero-filled sequence spanning the
//! earliest to the latest month seen. The freeze is a barrier: the bounds
//! are unknowable until every month has been recorded.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::core::cost::ExerciseCost;
use crate::utils::{month_floor, month_from_index, month_index, month_label, week_start};

/// Cost figures for one time bucket, split by sub-category
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CostPoint {
    pub(crate) hardware: f64,
    pub(crate) fsr: f64,
    pub(crate) consumables: f64,
}

impl CostPoint {
    pub(crate) fn add(&mut self, other: &CostPoint) {
        self.hardware += other.hardware;
        self.fsr += other.fsr;
        self.consumables += other.consumables;
    }

    pub(crate) fn total(&self) -> f64 {
        self.hardware + self.fsr + self.consumables
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Granularity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
            Granularity::Quarter => "Quarter",
            Granularity::Year => "Year",
        }
    }
}

/// Bucket key for a monthly point at the target granularity. Monthly data
/// is the resolution floor, so day/week keys use the month's first day;
/// every month maps to exactly one bucket at every granularity, which is
/// what keeps regrouping sum-preserving.
pub(crate) fn bucket_key(month: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => month.format("%Y-%m-%d").to_string(),
        Granularity::Week => week_start(month).format("%Y-%m-%d").to_string(),
        Granularity::Month => month_label(month),
        Granularity::Quarter => format!("{}-Q{}", month.year(), month.month0() / 3 + 1),
        Granularity::Year => month.year().to_string(),
    }
}

/// Sparse accumulation stage. Keys are floored to the first of the month.
#[derive(Debug, Default)]
pub(crate) struct SeriesBuilder {
    months: BTreeMap<NaiveDate, CostPoint>,
}

impl SeriesBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, month: NaiveDate, point: CostPoint) {
        self.months.entry(month_floor(month)).or_default().add(&point);
    }

    /// Attribute an exercise's costs to calendar months: hardware lands in
    /// the start month, the monthly recurring amount in every month from
    /// start through end inclusive.
    pub(crate) fn add_exercise(&mut self, ex: &ExerciseCost) {
        self.record(
            ex.start,
            CostPoint {
                hardware: ex.hardware(),
                ..CostPoint::default()
            },
        );

        let recurring = CostPoint {
            hardware: 0.0,
            fsr: ex.fsr_monthly(),
            consumables: ex.consumables_monthly(),
        };
        for index in month_index(ex.start)..=month_index(ex.end) {
            if let Some(month) = month_from_index(index) {
                self.record(month, recurring);
            }
        }
    }

    /// Freeze into the gap-free series, zero-filling months with no
    /// recorded activity between the earliest and latest month present.
    pub(crate) fn build(self) -> MonthlySeries {
        let (Some(first), Some(last)) = (
            self.months.keys().next().copied(),
            self.months.keys().next_back().copied(),
        ) else {
            return MonthlySeries::default();
        };

        let points = (month_index(first)..=month_index(last))
            .filter_map(month_from_index)
            .map(|month| {
                let point = self.months.get(&month).copied().unwrap_or_default();
                (month, point)
            })
            .collect();
        MonthlySeries { points }
    }
}

/// Gap-free ordered monthly series
#[derive(Debug, Clone, Default)]
pub(crate) struct MonthlySeries {
    pub(crate) points: Vec<(NaiveDate, CostPoint)>,
}

impl MonthlySeries {
    pub(crate) fn from_costs(costs: &[ExerciseCost]) -> Self {
        let mut builder = SeriesBuilder::new();
        for ex in costs {
            builder.add_exercise(ex);
        }
        builder.build()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn total(&self) -> f64 {
        self.points.iter().map(|(_, p)| p.total()).sum()
    }

    pub(crate) fn monthly_totals(&self) -> Vec<f64> {
        self.points.iter().map(|(_, p)| p.total()).collect()
    }

    /// Regroup into coarser (or equal) buckets by summing every monthly
    /// entry that falls within each period.
    pub(crate) fn regroup(&self, granularity: Granularity) -> Vec<(String, CostPoint)> {
        let mut buckets: BTreeMap<String, CostPoint> = BTreeMap::new();
        for (month, point) in &self.points {
            buckets
                .entry(bucket_key(*month, granularity))
                .or_default()
                .add(point);
        }
        buckets.into_iter().collect()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::cost::AllocationCost;
    use crate::core::types::ExerciseStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn point(hardware: f64, fsr: f64, consumables: f64) -> CostPoint {
        CostPoint {
            hardware,
            fsr,
            consumables,
        }
    }

    fn exercise(start: NaiveDate, end: NaiveDate, hardware: f64, fsr: f64) -> ExerciseCost {
        ExerciseCost {
            id: "ex".to_string(),
            name: "EX".to_string(),
            status: ExerciseStatus::Approved,
            location: None,
            start,
            end,
            months: 1.0,
            allocations: vec![AllocationCost {
                system_name: "X".to_string(),
                hardware,
                fsr_monthly: fsr,
                consumables_monthly: 0.0,
            }],
            skipped: 0,
        }
    }

    #[test]
    fn build_fills_gaps_with_zero() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2026, 1, 15), point(100.0, 0.0, 0.0));
        builder.record(d(2026, 4, 2), point(50.0, 0.0, 0.0));
        let series = builder.build();

        assert_eq!(series.len(), 4);
        assert_eq!(series.points[0].0, d(2026, 1, 1));
        assert_eq!(series.points[1], (d(2026, 2, 1), CostPoint::default()));
        assert_eq!(series.points[2], (d(2026, 3, 1), CostPoint::default()));
        assert_eq!(series.points[3].1.hardware, 50.0);
    }

    #[test]
    fn gap_fill_spans_year_boundary() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2026, 11, 1), point(1.0, 0.0, 0.0));
        builder.record(d(2027, 2, 1), point(1.0, 0.0, 0.0));
        let series = builder.build();
        let months: Vec<_> = series.points.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            months,
            [d(2026, 11, 1), d(2026, 12, 1), d(2027, 1, 1), d(2027, 2, 1)]
        );
    }

    #[test]
    fn same_month_entries_accumulate() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2026, 3, 1), point(100.0, 10.0, 0.0));
        builder.record(d(2026, 3, 28), point(50.0, 0.0, 5.0));
        let series = builder.build();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].1, point(150.0, 10.0, 5.0));
    }

    #[test]
    fn exercise_hardware_lands_in_start_month() {
        let series = MonthlySeries::from_costs(&[exercise(d(2026, 3, 10), d(2026, 5, 10), 9000.0, 100.0)]);
        assert_eq!(series.points[0].1.hardware, 9000.0);
        assert_eq!(series.points[1].1.hardware, 0.0);
        // recurring hits March, April and May
        assert_eq!(series.len(), 3);
        assert!(series.points.iter().all(|(_, p)| p.fsr == 100.0));
    }

    #[test]
    fn empty_builder_builds_empty_series() {
        assert!(SeriesBuilder::new().build().is_empty());
        assert!(MonthlySeries::from_costs(&[]).is_empty());
    }

    #[test]
    fn regroup_preserves_total_at_every_granularity() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2025, 11, 1), point(100.0, 10.0, 1.0));
        builder.record(d(2026, 1, 1), point(200.0, 20.0, 2.0));
        builder.record(d(2026, 2, 1), point(0.0, 30.0, 3.0));
        builder.record(d(2026, 7, 1), point(50.0, 0.0, 4.0));
        let series = builder.build();
        let total = series.total();

        for granularity in [
            Granularity::Day,
            Granularity::Week,
            Granularity::Month,
            Granularity::Quarter,
            Granularity::Year,
        ] {
            let regrouped = series.regroup(granularity);
            let sum: f64 = regrouped.iter().map(|(_, p)| p.total()).sum();
            assert!((sum - total).abs() < 1e-9, "{granularity:?} lost value");
        }
    }

    #[test]
    fn single_month_regroups_to_single_bucket_everywhere() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2026, 3, 1), point(100.0, 0.0, 0.0));
        let series = builder.build();
        for granularity in [
            Granularity::Day,
            Granularity::Week,
            Granularity::Month,
            Granularity::Quarter,
            Granularity::Year,
        ] {
            assert_eq!(series.regroup(granularity).len(), 1);
        }
    }

    #[test]
    fn quarterly_keys_group_three_months() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2026, 1, 1), point(1.0, 0.0, 0.0));
        builder.record(d(2026, 3, 1), point(2.0, 0.0, 0.0));
        builder.record(d(2026, 4, 1), point(4.0, 0.0, 0.0));
        let regrouped = builder.build().regroup(Granularity::Quarter);
        assert_eq!(regrouped.len(), 2);
        assert_eq!(regrouped[0].0, "2026-Q1");
        assert_eq!(regrouped[0].1.total(), 3.0);
        assert_eq!(regrouped[1].0, "2026-Q2");
        assert_eq!(regrouped[1].1.total(), 4.0);
    }

    #[test]
    fn yearly_keys_group_calendar_years() {
        let mut builder = SeriesBuilder::new();
        builder.record(d(2025, 12, 1), point(1.0, 0.0, 0.0));
        builder.record(d(2026, 1, 1), point(2.0, 0.0, 0.0));
        let regrouped = builder.build().regroup(Granularity::Year);
        assert_eq!(regrouped.len(), 2);
        assert_eq!(regrouped[0].0, "2025");
        assert_eq!(regrouped[1].0, "2026");
    }

    #[test]
    fn bucket_keys_format() {
        let m = d(2026, 3, 1);
        assert_eq!(bucket_key(m, Granularity::Day), "2026-03-01");
        // 2026-03-01 is a Sunday; its ISO week starts 2026-02-23
        assert_eq!(bucket_key(m, Granularity::Week), "2026-02-23");
        assert_eq!(bucket_key(m, Granularity::Month), "2026-03");
        assert_eq!(bucket_key(m, Granularity::Quarter), "2026-Q1");
        assert_eq!(bucket_key(m, Granularity::Year), "2026");
    }
}
