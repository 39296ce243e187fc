use std::fmt::Write;

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::{CostSnapshot, Granularity, MonthlySeries, SystemRollup};
use crate::output::exercises::sorted_exercises;
use crate::output::table::sort_buckets;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn output_trend_csv(
    series: &MonthlySeries,
    granularity: Granularity,
    order: SortOrder,
) -> String {
    let mut buckets = series.regroup(granularity);
    sort_buckets(&mut buckets, order);

    let mut out = String::new();
    let _ = writeln!(out, "period,hardware,fsr,consumables,total");
    for (key, point) in &buckets {
        let _ = writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.2}",
            csv_escape(key),
            point.hardware,
            point.fsr,
            point.consumables,
            point.total(),
        );
    }
    out
}

pub(crate) fn output_breakdown_csv(rollup: &[SystemRollup]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "system,allocations,hardware,fsr,consumables,total,monthly_average,percentage"
    );
    for row in rollup {
        let _ = writeln!(
            out,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4}",
            csv_escape(&row.system_name),
            row.exercises,
            row.hardware,
            row.fsr,
            row.consumables,
            row.total,
            row.monthly_average,
            row.percentage,
        );
    }
    out
}

pub(crate) fn output_exercises_csv(snapshot: &CostSnapshot, order: SortOrder) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "id,name,status,start_date,end_date,months,hardware,monthly_recurring,total"
    );
    for ex in sorted_exercises(snapshot, order) {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{:.4},{:.2},{:.2},{:.2}",
            csv_escape(&ex.id),
            csv_escape(&ex.name),
            ex.status.label(),
            ex.start.format(DATE_FORMAT),
            ex.end.format(DATE_FORMAT),
            ex.months,
            ex.hardware(),
            ex.monthly_recurring(),
            ex.total(),
        );
    }
    out
}
