//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::core::{ExerciseStatus, Granularity};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Preset windows anchored at today; `all` disables the bound.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum TimeRange {
    #[value(name = "1m")]
    OneMonth,
    #[value(name = "3m")]
    ThreeMonths,
    #[value(name = "6m")]
    SixMonths,
    #[value(name = "1y")]
    OneYear,
    #[default]
    All,
}

impl TimeRange {
    pub(crate) fn since(self, today: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            TimeRange::OneMonth => 1,
            TimeRange::ThreeMonths => 3,
            TimeRange::SixMonths => 6,
            TimeRange::OneYear => 12,
            TimeRange::All => return None,
        };
        today.checked_sub_months(chrono::Months::new(months))
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub(crate) enum StatusArg {
    Planning,
    Approved,
    InProgress,
    Completed,
    Cancelled,
}

impl From<StatusArg> for ExerciseStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Planning => ExerciseStatus::Planning,
            StatusArg::Approved => ExerciseStatus::Approved,
            StatusArg::InProgress => ExerciseStatus::InProgress,
            StatusArg::Completed => ExerciseStatus::Completed,
            StatusArg::Cancelled => ExerciseStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum GroupBy {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl From<GroupBy> for Granularity {
    fn from(group_by: GroupBy) -> Self {
        match group_by {
            GroupBy::Daily => Granularity::Day,
            GroupBy::Weekly => Granularity::Week,
            GroupBy::Monthly => Granularity::Month,
            GroupBy::Quarterly => Granularity::Quarter,
            GroupBy::Yearly => Granularity::Year,
        }
    }
}

#[derive(Parser)]
#[command(name = "excost")]
#[command(about = "Exercise cost aggregation and analytics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Snapshot file or directory (defaults to $EXCOST_DATA, then ./exercises.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) input: Option<String>,

    /// Preset time window bounding which exercises are included
    #[arg(short, long, global = true, value_enum, default_value = "all")]
    pub(crate) range: TimeRange,

    /// Include exercises overlapping from this date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) since: Option<String>,

    /// Include exercises overlapping until this date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) until: Option<String>,

    /// Only include exercises with this lifecycle status
    #[arg(long, global = true, value_enum)]
    pub(crate) status: Option<StatusArg>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Output as CSV
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Sort order for results
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Compact output (fewer columns, shorter names)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(ref order) = config.order
            && matches!(self.order, SortOrder::Asc)
            && order.eq_ignore_ascii_case("desc")
        {
            self.order = SortOrder::Desc;
        }

        if let Some(ref color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        // String options: only apply if CLI didn't set them
        if self.input.is_none() {
            self.input = config.input.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        // Projection defaults live in config; explicit flags win
        if let Some(Commands::Projection { horizon, rate }) = &mut self.command {
            if horizon.is_none() {
                *horizon = config.horizon;
            }
            if rate.is_none() {
                *rate = config.rate;
            }
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
