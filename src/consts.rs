/// Standard date format used throughout the codebase: "2026-03-01"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Nominal month length in days, shared by the duration calculator and the
/// rate-based consumable extrapolation so the two stay consistent.
pub(crate) const DAYS_PER_MONTH: f64 = 30.0;

/// Default annual inflation rate for projections (3%)
pub(crate) const DEFAULT_INFLATION_RATE: f64 = 0.03;

/// Default projection horizon: 60 months (5 years)
pub(crate) const DEFAULT_PROJECTION_MONTHS: u32 = 60;

/// Fallback label when an exercise or system name is unavailable
pub(crate) const UNKNOWN: &str = "unknown";
