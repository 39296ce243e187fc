pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, GroupBy, SortOrder, StatusArg, TimeRange};
pub(crate) use commands::Commands;
