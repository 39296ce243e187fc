pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::{month_floor, month_from_index, month_index, month_label, parse_date, week_start};
pub(crate) use debug::{debug_enabled, set_debug};
