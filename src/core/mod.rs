//! Core cost engine - pure computations over exercise snapshots

mod change;
mod consumable;
mod cost;
mod duration;
mod projection;
mod rollup;
mod series;
mod types;

pub(crate) use change::{pct_change, period_over_period, year_over_year};
pub(crate) use consumable::{classify, monthly_consumable_cost};
pub(crate) use cost::{AllocationCost, CostSnapshot, ExerciseCost, price_allocation, price_exercise, price_snapshot};
pub(crate) use duration::duration_in_months;
pub(crate) use projection::{Projection, project};
pub(crate) use rollup::{SystemRollup, build_rollup};
pub(crate) use series::{CostPoint, Granularity, MonthlySeries, SeriesBuilder, bucket_key};
pub(crate) use types::{
    Consumable, ConsumableAllocation, ConsumableKind, ConsumablePreset, DateFilter, Exercise,
    ExerciseStatus, FsrSupport, System, SystemAllocation,
};
