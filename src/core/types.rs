//! Exercise planning records as exported by the planning application
//!
//! Snapshots arrive fully dereferenced: allocations embed their catalog
//! system and consumable objects rather than bare identifiers. Absent
//! currency and quantity fields deserialize to zero; an unresolved
//! reference is `None` and causes that allocation to be skipped, never a
//! hard failure.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ExerciseStatus {
    #[default]
    Planning,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl ExerciseStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ExerciseStatus::Planning => "Planning",
            ExerciseStatus::Approved => "Approved",
            ExerciseStatus::InProgress => "In Progress",
            ExerciseStatus::Completed => "Completed",
            ExerciseStatus::Cancelled => "Cancelled",
        }
    }
}

/// Field-service-representative support level. Billing is monthly and flat
/// whenever support is enabled; the cadence itself does not scale the cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum FsrSupport {
    #[default]
    None,
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ConsumableKind {
    /// `quantity` is already a monthly figure
    Fixed,
    /// `quantity` is a per-launch amount, extrapolated to a 30-day month
    RateBased,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Consumable {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) unit: String,
    #[serde(default)]
    pub(crate) unit_cost: f64,
    /// Explicit classification. Records exported before the field existed
    /// omit it and fall back to the lexical classifier.
    #[serde(default)]
    pub(crate) kind: Option<ConsumableKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConsumablePreset {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) consumable: Option<Consumable>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ConsumableAllocation {
    #[serde(default)]
    pub(crate) quantity: f64,
    #[serde(default)]
    pub(crate) preset: Option<ConsumablePreset>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct System {
    #[serde(default)]
    pub(crate) name: String,
    /// One-time acquisition price per unit
    #[serde(default)]
    pub(crate) base_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SystemAllocation {
    #[serde(default)]
    pub(crate) quantity: u32,
    #[serde(default)]
    pub(crate) fsr_support: FsrSupport,
    #[serde(default)]
    pub(crate) fsr_cost: f64,
    #[serde(default)]
    pub(crate) launches_per_day: f64,
    #[serde(default)]
    pub(crate) system: Option<System>,
    #[serde(default)]
    pub(crate) consumables: Vec<ConsumableAllocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Exercise {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
    #[serde(default)]
    pub(crate) status: ExerciseStatus,
    #[serde(default)]
    pub(crate) location: Option<String>,
    #[serde(default)]
    pub(crate) allocations: Vec<SystemAllocation>,
}

/// Date window bounding which exercises a query includes
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    /// An exercise is included when its date range intersects the window.
    pub(crate) fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if let Some(s) = self.since
            && end < s
        {
            return false;
        }
        if let Some(u) = self.until
            && start > u
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn exercise_deserializes_with_defaults() {
        let ex: Exercise = serde_json::from_str(
            r#"{"start_date":"2026-03-01","end_date":"2026-09-01"}"#,
        )
        .unwrap();
        assert_eq!(ex.status, ExerciseStatus::Planning);
        assert!(ex.id.is_empty());
        assert!(ex.allocations.is_empty());
        assert!(ex.location.is_none());
    }

    #[test]
    fn allocation_currency_fields_default_to_zero() {
        let alloc: SystemAllocation = serde_json::from_str("{}").unwrap();
        assert_eq!(alloc.quantity, 0);
        assert_eq!(alloc.fsr_cost, 0.0);
        assert_eq!(alloc.launches_per_day, 0.0);
        assert_eq!(alloc.fsr_support, FsrSupport::None);
        assert!(alloc.system.is_none());
    }

    #[test]
    fn status_parses_snake_case() {
        let s: ExerciseStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(s, ExerciseStatus::InProgress);
        assert_eq!(s.label(), "In Progress");
    }

    #[test]
    fn consumable_kind_parses_snake_case() {
        let k: ConsumableKind = serde_json::from_str(r#""rate_based""#).unwrap();
        assert_eq!(k, ConsumableKind::RateBased);
        let c: Consumable = serde_json::from_str(r#"{"name":"Propane"}"#).unwrap();
        assert!(c.kind.is_none());
    }

    #[test]
    fn date_filter_no_bounds_includes_everything() {
        let f = DateFilter::default();
        assert!(f.overlaps(d(2020, 1, 1), d(2020, 1, 1)));
        assert!(f.overlaps(d(2099, 1, 1), d(2099, 12, 31)));
    }

    #[test]
    fn date_filter_overlap_is_inclusive() {
        let f = DateFilter::new(Some(d(2026, 3, 1)), Some(d(2026, 3, 31)));
        // ends exactly on the window start
        assert!(f.overlaps(d(2026, 2, 1), d(2026, 3, 1)));
        // starts exactly on the window end
        assert!(f.overlaps(d(2026, 3, 31), d(2026, 6, 1)));
        // fully before / fully after
        assert!(!f.overlaps(d(2026, 1, 1), d(2026, 2, 28)));
        assert!(!f.overlaps(d(2026, 4, 1), d(2026, 5, 1)));
    }

    #[test]
    fn date_filter_spanning_range_overlaps() {
        let f = DateFilter::new(Some(d(2026, 3, 1)), Some(d(2026, 3, 31)));
        assert!(f.overlaps(d(2026, 1, 1), d(2026, 12, 31)));
    }
}
