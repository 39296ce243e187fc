//! CLI subcommand definitions

use clap::Subcommand;

use super::args::GroupBy;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the cost overview: totals, change rates, breakdown and series (default)
    Summary {
        /// Append the multi-year projection to the payload
        #[arg(long)]
        project: bool,
    },
    /// Show the cost series over time
    Trend {
        /// Bucket granularity for the series
        #[arg(short, long, value_enum, default_value = "monthly")]
        group_by: GroupBy,
    },
    /// Show the per-system cost breakdown
    Breakdown,
    /// Show per-exercise costs
    Exercises,
    /// Project recurring spend forward under compounding inflation
    Projection {
        /// Projection horizon in months
        #[arg(long, value_name = "MONTHS")]
        horizon: Option<u32>,
        /// Annual inflation rate in percent
        #[arg(long, value_name = "PCT")]
        rate: Option<f64>,
    },
}
