use comfy_table::Cell;

use crate::core::{
    CostSnapshot, Granularity, MonthlySeries, Projection, SystemRollup, period_over_period,
    year_over_year,
};
use crate::output::breakdown::print_breakdown_table;
use crate::output::format::{create_styled_table, format_change, format_currency, header_cell, right_cell};
use crate::output::projection::print_projection_table;
use crate::output::table::{CostTableOptions, SummaryOptions, print_trend_table};

/// Headline figures for the overview
#[derive(Debug, Clone, Copy)]
pub(crate) struct Overview {
    pub(crate) total: f64,
    pub(crate) monthly_average: f64,
    pub(crate) month_over_month: f64,
    pub(crate) year_over_year: f64,
}

impl Overview {
    pub(crate) fn compute(snapshot: &CostSnapshot, series: &MonthlySeries) -> Self {
        let total = snapshot.grand_total();
        let months = series.len();
        Overview {
            total,
            monthly_average: if months > 0 { total / months as f64 } else { 0.0 },
            month_over_month: period_over_period(&series.monthly_totals()),
            year_over_year: year_over_year(series),
        }
    }
}

/// The full overview: headline stats, per-system breakdown, monthly series
/// and (when requested) the projection.
pub(crate) fn print_summary(
    snapshot: &CostSnapshot,
    series: &MonthlySeries,
    rollup: &[SystemRollup],
    projection: Option<&Projection>,
    options: CostTableOptions,
) {
    let overview = Overview::compute(snapshot, series);
    let c = options.use_color;
    let nf = options.number_format;

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Total Spend", c),
        header_cell("Monthly Avg", c),
        header_cell("MoM", c),
        header_cell("YoY", c),
    ]);
    table.add_row(vec![
        right_cell(&format_currency(overview.total, nf), None, true),
        right_cell(&format_currency(overview.monthly_average, nf), None, false),
        Cell::new(format_change(overview.month_over_month)),
        Cell::new(format_change(overview.year_over_year)),
    ]);

    println!("\n  Cost Overview\n");
    println!("{table}");

    print_breakdown_table(rollup, options);
    print_trend_table(
        series,
        Granularity::Month,
        SummaryOptions {
            priced: snapshot.priced,
            skipped: snapshot.skipped,
        },
        options,
    );

    if let Some(projection) = projection {
        print_projection_table(projection, options);
    }
}
