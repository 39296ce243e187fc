use comfy_table::{Cell, Color};

use crate::core::Projection;
use crate::output::format::{
    create_styled_table, format_currency, header_cell, right_cell, styled_cell,
};
use crate::output::table::CostTableOptions;

pub(crate) fn print_projection_table(projection: &Projection, options: CostTableOptions) {
    let mut table = create_styled_table();
    let c = options.use_color;
    let nf = options.number_format;

    table.set_header(vec![
        header_cell("Year", c),
        header_cell("Monthly Avg", c),
        header_cell("Total", c),
    ]);

    let yearly = projection.yearly();
    for (i, total) in yearly.iter().enumerate() {
        let months_in_block = projection.months.len().saturating_sub(i * 12).min(12);
        let monthly_avg = if months_in_block > 0 {
            total / months_in_block as f64
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(format!("Year {}", i + 1)),
            right_cell(&format_currency(monthly_avg, nf), None, false),
            right_cell(&format_currency(*total, nf), None, false),
        ]);
    }

    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        Cell::new(""),
        right_cell(&format_currency(projection.total(), nf), green, true),
    ]);

    println!(
        "\n  Projected Cost ({:.1}% annual inflation, {} months)\n",
        projection.annual_rate * 100.0,
        projection.months.len()
    );
    println!("{table}");
}
