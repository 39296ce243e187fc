//! Command dispatch over a priced snapshot

use crate::cli::{Cli, Commands};
use crate::consts::{DEFAULT_INFLATION_RATE, DEFAULT_PROJECTION_MONTHS};
use crate::core::{CostSnapshot, Granularity, MonthlySeries, Projection, build_rollup, project};
use crate::output::{
    CostTableOptions, NumberFormat, SummaryOptions, output_breakdown_csv, output_breakdown_json,
    output_exercises_csv, output_exercises_json, output_projection_json, output_summary_json,
    output_trend_csv, output_trend_json, print_breakdown_table, print_exercise_table,
    print_projection_table, print_summary, print_trend_table,
};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) number_format: NumberFormat,
}

fn print_json(json: &str) {
    println!("{json}");
}

/// Projection inputs come from the priced snapshot: the recurring monthly
/// baseline and the hardware one-time. `rate` arrives in percent.
fn snapshot_projection(
    snapshot: &CostSnapshot,
    horizon: Option<u32>,
    rate: Option<f64>,
) -> Projection {
    project(
        snapshot.monthly_recurring(),
        snapshot.hardware_total(),
        horizon.unwrap_or(DEFAULT_PROJECTION_MONTHS),
        rate.map_or(DEFAULT_INFLATION_RATE, |pct| pct / 100.0),
    )
}

pub(crate) fn handle_command(snapshot: &CostSnapshot, ctx: &CommandContext<'_>) {
    let cli = ctx.cli;
    let options = CostTableOptions {
        order: cli.order,
        use_color: cli.use_color(),
        compact: cli.compact,
        number_format: ctx.number_format,
    };
    let summary_opts = SummaryOptions {
        priced: snapshot.priced,
        skipped: snapshot.skipped,
    };

    let series = MonthlySeries::from_costs(&snapshot.exercises);
    let rollup = build_rollup(&snapshot.exercises);

    let command = cli.command.as_ref();
    match command {
        None | Some(Commands::Summary { .. }) => {
            let with_projection = matches!(command, Some(Commands::Summary { project: true }));
            let projection = with_projection.then(|| snapshot_projection(snapshot, None, None));
            if cli.json {
                print_json(&output_summary_json(
                    snapshot,
                    &series,
                    &rollup,
                    projection.as_ref(),
                ));
            } else {
                print_summary(snapshot, &series, &rollup, projection.as_ref(), options);
            }
        }
        Some(Commands::Trend { group_by }) => {
            let granularity = Granularity::from(*group_by);
            if cli.json {
                print_json(&output_trend_json(&series, granularity, cli.order));
            } else if cli.csv {
                print!("{}", output_trend_csv(&series, granularity, cli.order));
            } else {
                print_trend_table(&series, granularity, summary_opts, options);
            }
        }
        Some(Commands::Breakdown) => {
            if cli.json {
                print_json(&output_breakdown_json(&rollup));
            } else if cli.csv {
                print!("{}", output_breakdown_csv(&rollup));
            } else {
                print_breakdown_table(&rollup, options);
            }
        }
        Some(Commands::Exercises) => {
            if cli.json {
                print_json(&output_exercises_json(snapshot, cli.order));
            } else if cli.csv {
                print!("{}", output_exercises_csv(snapshot, cli.order));
            } else {
                print_exercise_table(snapshot, options);
            }
        }
        Some(Commands::Projection { horizon, rate }) => {
            let projection = snapshot_projection(snapshot, *horizon, *rate);
            if cli.json {
                print_json(&output_projection_json(
                    &projection,
                    snapshot.monthly_recurring(),
                    snapshot.hardware_total(),
                ));
            } else {
                print_projection_table(&projection, options);
            }
        }
    }
}
