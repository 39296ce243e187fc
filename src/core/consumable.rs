//! Monthly cost resolution for consumable allocations
//!
//! Two unrelated meanings of `quantity` coexist on the wire: a
//! fixed-quantity consumable stores a monthly figure, a rate-based one
//! stores a per-launch amount that is extrapolated to a 30-day month.
//! The explicit `kind` field disambiguates; older records are classified
//! by name.

use crate::consts::DAYS_PER_MONTH;
use crate::core::types::{Consumable, ConsumableAllocation, ConsumableKind};

/// Name tokens marking a per-launch lift-gas consumable in records that
/// predate the explicit `kind` field.
const RATE_BASED_TOKENS: [&str; 2] = ["helium", "lift gas"];

pub(crate) fn classify(consumable: &Consumable) -> ConsumableKind {
    if let Some(kind) = consumable.kind {
        return kind;
    }
    let name = consumable.name.to_lowercase();
    if RATE_BASED_TOKENS.iter().any(|t| name.contains(t)) {
        ConsumableKind::RateBased
    } else {
        ConsumableKind::Fixed
    }
}

/// Monthly cost contribution of one consumable allocation.
///
/// Rate-based consumption scales with the owning allocation's launch
/// cadence; zero launches per day means zero consumption, not an error.
/// Returns `None` when the preset or consumable reference is unresolved so
/// the caller can skip the allocation and keep going.
pub(crate) fn monthly_consumable_cost(
    alloc: &ConsumableAllocation,
    launches_per_day: f64,
) -> Option<f64> {
    let consumable = alloc.preset.as_ref()?.consumable.as_ref()?;
    let cost = match classify(consumable) {
        ConsumableKind::Fixed => consumable.unit_cost * alloc.quantity,
        ConsumableKind::RateBased => {
            consumable.unit_cost * alloc.quantity * launches_per_day * DAYS_PER_MONTH
        }
    };
    Some(cost)
}
