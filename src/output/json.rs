use serde_json::json;

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::{CostSnapshot, Granularity, MonthlySeries, Projection, SystemRollup};
use crate::output::exercises::sorted_exercises;
use crate::output::summary::Overview;
use crate::output::table::sort_buckets;
use crate::utils::month_label;

fn rollup_json(rollup: &[SystemRollup]) -> Vec<serde_json::Value> {
    rollup
        .iter()
        .map(|row| {
            json!({
                "system": row.system_name,
                "hardware": row.hardware,
                "fsr": row.fsr,
                "consumables": row.consumables,
                "total": row.total,
                "allocations": row.exercises,
                "monthly_average": row.monthly_average,
                "percentage": row.percentage,
            })
        })
        .collect()
}

fn series_json(series: &MonthlySeries) -> Vec<serde_json::Value> {
    series
        .points
        .iter()
        .map(|(month, point)| {
            json!({
                "month": month_label(*month),
                "hardware": point.hardware,
                "fsr": point.fsr,
                "consumables": point.consumables,
                "total": point.total(),
            })
        })
        .collect()
}

fn projection_json(projection: &Projection) -> serde_json::Value {
    json!({
        "annual_rate": projection.annual_rate,
        "horizon_months": projection.months.len(),
        "total": projection.total(),
        "months": projection.months.iter().map(|m| {
            json!({ "month": m.month, "amount": m.amount })
        }).collect::<Vec<_>>(),
        "yearly": projection.yearly(),
    })
}

/// The full structured payload: totals, change rates, breakdown, series,
/// and the projection when requested.
pub(crate) fn output_summary_json(
    snapshot: &CostSnapshot,
    series: &MonthlySeries,
    rollup: &[SystemRollup],
    projection: Option<&Projection>,
) -> String {
    let overview = Overview::compute(snapshot, series);
    let mut payload = json!({
        "total": overview.total,
        "monthly_average": overview.monthly_average,
        "month_over_month": overview.month_over_month,
        "year_over_year": overview.year_over_year,
        "exercises": snapshot.exercises.len(),
        "allocations_priced": snapshot.priced,
        "allocations_skipped": snapshot.skipped,
        "breakdown": rollup_json(rollup),
        "series": series_json(series),
    });
    if let Some(projection) = projection
        && let Some(map) = payload.as_object_mut()
    {
        map.insert("projection".to_string(), projection_json(projection));
    }
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}

pub(crate) fn output_trend_json(
    series: &MonthlySeries,
    granularity: Granularity,
    order: SortOrder,
) -> String {
    let mut buckets = series.regroup(granularity);
    sort_buckets(&mut buckets, order);

    let output: Vec<serde_json::Value> = buckets
        .iter()
        .map(|(key, point)| {
            json!({
                "period": key,
                "hardware": point.hardware,
                "fsr": point.fsr,
                "consumables": point.consumables,
                "total": point.total(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_breakdown_json(rollup: &[SystemRollup]) -> String {
    serde_json::to_string_pretty(&rollup_json(rollup)).unwrap_or_default()
}

pub(crate) fn output_exercises_json(snapshot: &CostSnapshot, order: SortOrder) -> String {
    let output: Vec<serde_json::Value> = sorted_exercises(snapshot, order)
        .iter()
        .map(|ex| {
            json!({
                "id": ex.id,
                "name": ex.name,
                "status": ex.status.label(),
                "location": ex.location,
                "start_date": ex.start.format(DATE_FORMAT).to_string(),
                "end_date": ex.end.format(DATE_FORMAT).to_string(),
                "months": ex.months,
                "hardware": ex.hardware(),
                "monthly_recurring": ex.monthly_recurring(),
                "total": ex.total(),
                "allocations": ex.allocations.len(),
                "skipped": ex.skipped,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_projection_json(
    projection: &Projection,
    baseline_monthly: f64,
    one_time: f64,
) -> String {
    let payload = json!({
        "baseline_monthly": baseline_monthly,
        "one_time": one_time,
        "projection": projection_json(projection),
    });
    serde_json::to_string_pretty(&payload).unwrap_or_default()
}
