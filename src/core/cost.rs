//! Per-allocation and per-exercise cost calculation
//!
//! Pricing is pure over the snapshot records. Unresolved references skip
//! the affected allocation (partial-result semantics); an exercise with a
//! reversed date range is dropped with a diagnostic. Neither aborts the
//! aggregate.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::consts::UNKNOWN;
use crate::core::consumable::monthly_consumable_cost;
use crate::core::duration::duration_in_months;
use crate::core::types::{Exercise, ExerciseStatus, FsrSupport, SystemAllocation};
use crate::error::EngineError;
use crate::utils::debug_enabled;

/// Cost figures for one system allocation, split one-time vs. monthly
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AllocationCost {
    pub(crate) system_name: String,
    /// One-time acquisition cost: base price x quantity
    pub(crate) hardware: f64,
    pub(crate) fsr_monthly: f64,
    pub(crate) consumables_monthly: f64,
}

impl AllocationCost {
    pub(crate) fn monthly_recurring(&self) -> f64 {
        self.fsr_monthly + self.consumables_monthly
    }

    pub(crate) fn total_for(&self, months: f64) -> f64 {
        self.hardware + self.monthly_recurring() * months
    }
}

/// Price one allocation against its resolved system.
///
/// Returns `None` when the system reference is unresolved. The second
/// element counts consumable references that could not be resolved and
/// contributed nothing.
pub(crate) fn price_allocation(alloc: &SystemAllocation) -> Option<(AllocationCost, i64)> {
    let system = alloc.system.as_ref()?;

    let fsr_monthly = if alloc.fsr_support == FsrSupport::None {
        0.0
    } else {
        alloc.fsr_cost
    };

    let mut consumables_monthly = 0.0;
    let mut skipped = 0i64;
    for c in &alloc.consumables {
        match monthly_consumable_cost(c, alloc.launches_per_day) {
            Some(cost) => {
                if debug_enabled()
                    && let Some(consumable) = c.preset.as_ref().and_then(|p| p.consumable.as_ref())
                {
                    eprintln!(
                        "[DEBUG] consumable {} x{} {} -> ${cost:.2}/mo",
                        consumable.name, c.quantity, consumable.unit
                    );
                }
                consumables_monthly += cost;
            }
            None => {
                if debug_enabled() {
                    let preset = c.preset.as_ref().map_or(UNKNOWN, |p| p.name.as_str());
                    eprintln!("[DEBUG] unresolved consumable preset {preset} skipped");
                }
                skipped += 1;
            }
        }
    }

    let cost = AllocationCost {
        system_name: system.name.clone(),
        hardware: system.base_price * f64::from(alloc.quantity),
        fsr_monthly,
        consumables_monthly,
    };
    Some((cost, skipped))
}

/// An exercise with every allocation priced
#[derive(Debug, Clone)]
pub(crate) struct ExerciseCost {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) status: ExerciseStatus,
    pub(crate) location: Option<String>,
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) months: f64,
    pub(crate) allocations: Vec<AllocationCost>,
    /// Allocations or consumable references dropped as unresolved
    pub(crate) skipped: i64,
}

impl ExerciseCost {
    pub(crate) fn hardware(&self) -> f64 {
        self.allocations.iter().map(|a| a.hardware).sum()
    }

    pub(crate) fn fsr_monthly(&self) -> f64 {
        self.allocations.iter().map(|a| a.fsr_monthly).sum()
    }

    pub(crate) fn consumables_monthly(&self) -> f64 {
        self.allocations.iter().map(|a| a.consumables_monthly).sum()
    }

    pub(crate) fn monthly_recurring(&self) -> f64 {
        self.fsr_monthly() + self.consumables_monthly()
    }

    pub(crate) fn total(&self) -> f64 {
        self.hardware() + self.monthly_recurring() * self.months
    }
}

pub(crate) fn price_exercise(ex: &Exercise) -> Result<ExerciseCost, EngineError> {
    let months = duration_in_months(ex.start_date, ex.end_date)?;

    let mut allocations = Vec::with_capacity(ex.allocations.len());
    let mut skipped = 0i64;
    for alloc in &ex.allocations {
        match price_allocation(alloc) {
            Some((cost, dropped_consumables)) => {
                if dropped_consumables > 0 && debug_enabled() {
                    eprintln!(
                        "[DEBUG] {}: {} unresolved consumable reference(s) skipped",
                        ex.name, dropped_consumables
                    );
                }
                skipped += dropped_consumables;
                allocations.push(cost);
            }
            None => {
                if debug_enabled() {
                    eprintln!(
                        "[DEBUG] {}: allocation without system reference skipped",
                        ex.name
                    );
                }
                skipped += 1;
            }
        }
    }

    Ok(ExerciseCost {
        id: ex.id.clone(),
        name: ex.name.clone(),
        status: ex.status,
        location: ex.location.clone(),
        start: ex.start_date,
        end: ex.end_date,
        months,
        allocations,
        skipped,
    })
}

/// Every included exercise priced, with skipped/priced accounting
#[derive(Debug, Default)]
pub(crate) struct CostSnapshot {
    pub(crate) exercises: Vec<ExerciseCost>,
    /// Allocations successfully priced
    pub(crate) priced: i64,
    /// Allocations dropped over unresolved references or bad date ranges
    pub(crate) skipped: i64,
}

impl CostSnapshot {
    fn merge(mut self, other: Self) -> Self {
        self.exercises.extend(other.exercises);
        self.priced += other.priced;
        self.skipped += other.skipped;
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub(crate) fn grand_total(&self) -> f64 {
        self.exercises.iter().map(ExerciseCost::total).sum()
    }

    pub(crate) fn hardware_total(&self) -> f64 {
        self.exercises.iter().map(ExerciseCost::hardware).sum()
    }

    pub(crate) fn monthly_recurring(&self) -> f64 {
        self.exercises
            .iter()
            .map(ExerciseCost::monthly_recurring)
            .sum()
    }
}

/// Price a whole snapshot. Exercises are independent, so pricing runs in
/// parallel and partial results merge by addition.
pub(crate) fn price_snapshot(exercises: &[Exercise]) -> CostSnapshot {
    let mut snapshot = exercises
        .par_iter()
        .map(|ex| match price_exercise(ex) {
            Ok(cost) => CostSnapshot {
                priced: cost.allocations.len() as i64,
                skipped: cost.skipped,
                exercises: vec![cost],
            },
            Err(err) => {
                eprintln!("Skipping exercise {}: {err}", ex.name);
                CostSnapshot {
                    exercises: Vec::new(),
                    priced: 0,
                    skipped: ex.allocations.len() as i64,
                }
            }
        })
        .reduce(CostSnapshot::default, CostSnapshot::merge);

    snapshot
        .exercises
        .sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.name.cmp(&b.name)));
    snapshot
}
