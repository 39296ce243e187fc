use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::core::{CostPoint, Granularity, MonthlySeries};
use crate::output::format::{
    NumberFormat, create_styled_table, format_currency, format_number, header_cell, right_cell,
    styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct CostTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryOptions {
    pub(crate) priced: i64,
    pub(crate) skipped: i64,
}

/// Print the allocation accounting line under a table
pub(crate) fn print_summary_line(priced: i64, skipped: i64, number_format: NumberFormat) {
    println!(
        "\n  {} allocations priced ({} skipped over unresolved references)\n",
        format_number(priced, number_format),
        format_number(skipped, number_format)
    );
}

fn title_for(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Day => "Daily Cost",
        Granularity::Week => "Weekly Cost",
        Granularity::Month => "Monthly Cost",
        Granularity::Quarter => "Quarterly Cost",
        Granularity::Year => "Yearly Cost",
    }
}

pub(crate) fn sort_buckets(buckets: &mut [(String, CostPoint)], order: SortOrder) {
    match order {
        SortOrder::Asc => buckets.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Desc => buckets.sort_by(|a, b| b.0.cmp(&a.0)),
    }
}

pub(crate) fn print_trend_table(
    series: &MonthlySeries,
    granularity: Granularity,
    summary: SummaryOptions,
    options: CostTableOptions,
) {
    let mut buckets = series.regroup(granularity);
    sort_buckets(&mut buckets, options.order);

    let mut table = create_styled_table();
    let c = options.use_color;
    let nf = options.number_format;

    if options.compact {
        table.set_header(vec![
            header_cell(granularity.label(), c),
            header_cell("Total", c),
        ]);
    } else {
        table.set_header(vec![
            header_cell(granularity.label(), c),
            header_cell("Hardware", c),
            header_cell("FSR", c),
            header_cell("Consumables", c),
            header_cell("Total", c),
        ]);
    }

    let mut total = CostPoint::default();
    for (key, point) in &buckets {
        total.add(point);
        if options.compact {
            table.add_row(vec![
                Cell::new(key),
                right_cell(&format_currency(point.total(), nf), None, false),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(key),
                right_cell(&format_currency(point.hardware, nf), None, false),
                right_cell(&format_currency(point.fsr, nf), None, false),
                right_cell(&format_currency(point.consumables, nf), None, false),
                right_cell(&format_currency(point.total(), nf), None, false),
            ]);
        }
    }

    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };
    if options.compact {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            right_cell(&format_currency(total.total(), nf), green, true),
        ]);
    } else {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            right_cell(&format_currency(total.hardware, nf), cyan, true),
            right_cell(&format_currency(total.fsr, nf), cyan, true),
            right_cell(&format_currency(total.consumables, nf), cyan, true),
            right_cell(&format_currency(total.total(), nf), green, true),
        ]);
    }

    println!("\n  {}\n", title_for(granularity));
    println!("{table}");
    print_summary_line(summary.priced, summary.skipped, nf);
}
