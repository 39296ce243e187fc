//! Per-system cost rollup across exercises
//!
//! Two stages: a commutative accumulation pass whose partial results merge
//! by addition (safe to run per-exercise in parallel), then a finalize pass
//! that may only run once the grand total is known, because every
//! percentage depends on it.

use rayon::prelude::*;
use std::collections::HashMap;

use crate::core::cost::ExerciseCost;

#[derive(Debug, Clone, Copy, Default)]
struct RollupEntry {
    hardware: f64,
    fsr: f64,
    consumables: f64,
    count: i64,
}

impl RollupEntry {
    fn total(&self) -> f64 {
        self.hardware + self.fsr + self.consumables
    }
}

/// Pass-1 accumulator. Owned and returned by value so the two-stage
/// pipeline stays explicit: accumulate, merge, then finalize exactly once.
#[derive(Debug, Default)]
pub(crate) struct RollupAccumulator {
    entries: HashMap<String, RollupEntry>,
}

impl RollupAccumulator {
    pub(crate) fn add_exercise(mut self, ex: &ExerciseCost) -> Self {
        for alloc in &ex.allocations {
            let entry = self.entries.entry(alloc.system_name.clone()).or_default();
            entry.hardware += alloc.hardware;
            entry.fsr += alloc.fsr_monthly * ex.months;
            entry.consumables += alloc.consumables_monthly * ex.months;
            entry.count += 1;
        }
        self
    }

    pub(crate) fn merge(mut self, other: Self) -> Self {
        for (name, incoming) in other.entries {
            let entry = self.entries.entry(name).or_default();
            entry.hardware += incoming.hardware;
            entry.fsr += incoming.fsr;
            entry.consumables += incoming.consumables;
            entry.count += incoming.count;
        }
        self
    }

    /// Pass 2. Needs every contribution merged first: the grand total is a
    /// precondition for every percentage.
    pub(crate) fn finalize(self) -> Vec<SystemRollup> {
        let grand_total: f64 = self.entries.values().map(RollupEntry::total).sum();

        let mut rows: Vec<SystemRollup> = self
            .entries
            .into_iter()
            .map(|(name, entry)| {
                let total = entry.total();
                SystemRollup {
                    system_name: name,
                    hardware: entry.hardware,
                    fsr: entry.fsr,
                    consumables: entry.consumables,
                    total,
                    exercises: entry.count,
                    monthly_average: if entry.count > 0 {
                        total / entry.count as f64
                    } else {
                        0.0
                    },
                    percentage: percentage_of(total, grand_total),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.system_name.cmp(&b.system_name))
        });
        rows
    }
}

/// One row of the per-system breakdown
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SystemRollup {
    pub(crate) system_name: String,
    pub(crate) hardware: f64,
    pub(crate) fsr: f64,
    pub(crate) consumables: f64,
    pub(crate) total: f64,
    /// Occurrence count: allocations of this system across exercises
    pub(crate) exercises: i64,
    pub(crate) monthly_average: f64,
    pub(crate) percentage: f64,
}

fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

pub(crate) fn build_rollup(costs: &[ExerciseCost]) -> Vec<SystemRollup> {
    costs
        .par_iter()
        .fold(RollupAccumulator::default, RollupAccumulator::add_exercise)
        .reduce(RollupAccumulator::default, RollupAccumulator::merge)
        .finalize()
}
