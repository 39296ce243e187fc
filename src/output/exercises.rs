use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::consts::{DATE_FORMAT, UNKNOWN};
use crate::core::{CostSnapshot, ExerciseCost};
use crate::output::format::{
    create_styled_table, format_currency, format_months, header_cell, right_cell, styled_cell,
};
use crate::output::table::{CostTableOptions, print_summary_line};

fn display_name(ex: &ExerciseCost) -> &str {
    if ex.name.is_empty() { UNKNOWN } else { &ex.name }
}

pub(crate) fn sorted_exercises(snapshot: &CostSnapshot, order: SortOrder) -> Vec<&ExerciseCost> {
    let mut exercises: Vec<_> = snapshot.exercises.iter().collect();
    // snapshot order is ascending by start date already
    if matches!(order, SortOrder::Desc) {
        exercises.reverse();
    }
    exercises
}

pub(crate) fn print_exercise_table(snapshot: &CostSnapshot, options: CostTableOptions) {
    let exercises = sorted_exercises(snapshot, options.order);

    let mut table = create_styled_table();
    let c = options.use_color;
    let nf = options.number_format;

    if options.compact {
        table.set_header(vec![
            header_cell("Exercise", c),
            header_cell("Status", c),
            header_cell("Total", c),
        ]);
    } else {
        table.set_header(vec![
            header_cell("Exercise", c),
            header_cell("Status", c),
            header_cell("Start", c),
            header_cell("End", c),
            header_cell("Months", c),
            header_cell("Hardware", c),
            header_cell("Monthly", c),
            header_cell("Total", c),
        ]);
    }

    let mut grand_total = 0.0;
    for ex in &exercises {
        let total = ex.total();
        grand_total += total;

        if options.compact {
            table.add_row(vec![
                Cell::new(display_name(ex)),
                Cell::new(ex.status.label()),
                right_cell(&format_currency(total, nf), None, false),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(display_name(ex)),
                Cell::new(ex.status.label()),
                Cell::new(ex.start.format(DATE_FORMAT).to_string()),
                Cell::new(ex.end.format(DATE_FORMAT).to_string()),
                right_cell(&format_months(ex.months), None, false),
                right_cell(&format_currency(ex.hardware(), nf), None, false),
                right_cell(&format_currency(ex.monthly_recurring(), nf), None, false),
                right_cell(&format_currency(total, nf), None, false),
            ]);
        }
    }

    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };
    if options.compact {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            Cell::new(""),
            right_cell(&format_currency(grand_total, nf), green, true),
        ]);
    } else {
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            right_cell(&format_currency(snapshot.hardware_total(), nf), cyan, true),
            right_cell(&format_currency(snapshot.monthly_recurring(), nf), cyan, true),
            right_cell(&format_currency(grand_total, nf), green, true),
        ]);
    }

    println!("\n  Exercise Costs\n");
    println!("{table}");
    print_summary_line(snapshot.priced, snapshot.skipped, nf);
}
