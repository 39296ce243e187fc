use comfy_table::{Cell, Color};

use crate::core::SystemRollup;
use crate::output::format::{
    create_styled_table, format_currency, format_number, format_percent, header_cell, right_cell,
    styled_cell,
};
use crate::output::table::CostTableOptions;

/// Per-system breakdown table. Rows arrive already sorted by descending
/// total from the rollup builder; the order flag does not apply here.
pub(crate) fn print_breakdown_table(rollup: &[SystemRollup], options: CostTableOptions) {
    let mut table = create_styled_table();
    let c = options.use_color;
    let nf = options.number_format;

    if options.compact {
        table.set_header(vec![
            header_cell("System", c),
            header_cell("Total", c),
            header_cell("%", c),
        ]);
    } else {
        table.set_header(vec![
            header_cell("System", c),
            header_cell("Allocations", c),
            header_cell("Hardware", c),
            header_cell("FSR", c),
            header_cell("Consumables", c),
            header_cell("Total", c),
            header_cell("Monthly Avg", c),
            header_cell("%", c),
        ]);
    }

    let mut grand_total = 0.0;
    let mut hardware = 0.0;
    let mut fsr = 0.0;
    let mut consumables = 0.0;
    let mut count = 0i64;

    for row in rollup {
        grand_total += row.total;
        hardware += row.hardware;
        fsr += row.fsr;
        consumables += row.consumables;
        count += row.exercises;

        if options.compact {
            table.add_row(vec![
                Cell::new(&row.system_name),
                right_cell(&format_currency(row.total, nf), None, false),
                right_cell(&format_percent(row.percentage), None, false),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(&row.system_name),
                right_cell(&format_number(row.exercises, nf), None, false),
                right_cell(&format_currency(row.hardware, nf), None, false),
                right_cell(&format_currency(row.fsr, nf), None, false),
                right_cell(&format_currency(row.consumables, nf), None, false),
                right_cell(&format_currency(row.total, nf), None, false),
                right_cell(&format_currency(row.monthly_average, nf), None, false),
                right_cell(&format_percent(row.percentage), None, false),
            ]);
        }
    }

    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };
    let percentage_sum: f64 = rollup.iter().map(|r| r.percentage).sum();
    if options.compact {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            right_cell(&format_currency(grand_total, nf), green, true),
            right_cell(&format_percent(percentage_sum), cyan, true),
        ]);
    } else {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            right_cell(&format_number(count, nf), cyan, true),
            right_cell(&format_currency(hardware, nf), cyan, true),
            right_cell(&format_currency(fsr, nf), cyan, true),
            right_cell(&format_currency(consumables, nf), cyan, true),
            right_cell(&format_currency(grand_total, nf), green, true),
            Cell::new(""),
            right_cell(&format_percent(percentage_sum), cyan, true),
        ]);
    }

    println!("\n  Cost by System\n");
    println!("{table}");
}
