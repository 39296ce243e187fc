mod breakdown;
mod csv;
mod exercises;
mod format;
mod json;
mod projection;
mod summary;
mod table;

pub(crate) use breakdown::print_breakdown_table;
pub(crate) use csv::{output_breakdown_csv, output_exercises_csv, output_trend_csv};
pub(crate) use exercises::print_exercise_table;
pub(crate) use format::NumberFormat;
pub(crate) use json::{
    output_breakdown_json, output_exercises_json, output_projection_json, output_summary_json,
    output_trend_json,
};
pub(crate) use projection::print_projection_table;
pub(crate) use summary::print_summary;
pub(crate) use table::{CostTableOptions, SummaryOptions, print_trend_table};
