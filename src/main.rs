mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod snapshot;
mod utils;

use chrono::Local;
use clap::Parser;

use crate::app::CommandContext;
use crate::cli::Cli;
use crate::config::Config;
use crate::core::{DateFilter, ExerciseStatus, price_snapshot};
use crate::error::AppError;
use crate::output::NumberFormat;
use crate::utils::{parse_date, set_debug};

fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    let config = if cli.json || cli.csv {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    set_debug(cli.debug);

    let number_format = match NumberFormat::from_locale(cli.locale.as_deref()) {
        Ok(nf) => nf,
        Err(e) => exit_with(e),
    };

    let since = match cli.since.as_deref().map(parse_date).transpose() {
        Ok(d) => d,
        Err(e) => exit_with(e),
    };
    let until = match cli.until.as_deref().map(parse_date).transpose() {
        Ok(d) => d,
        Err(e) => exit_with(e),
    };

    // Preset window and explicit bound both apply; the narrower one wins
    let today = Local::now().date_naive();
    let since = match (cli.range.since(today), since) {
        (Some(preset), Some(explicit)) => Some(preset.max(explicit)),
        (preset, explicit) => preset.or(explicit),
    };
    let filter = DateFilter::new(since, until);

    let path = snapshot::resolve_input(cli.input.as_deref());
    let exercises = match snapshot::load(&path) {
        Ok(exercises) => exercises,
        Err(e) => exit_with(AppError::from(e)),
    };

    let status = cli.status.map(ExerciseStatus::from);
    let included: Vec<_> = exercises
        .into_iter()
        .filter(|ex| filter.overlaps(ex.start_date, ex.end_date))
        .filter(|ex| status.is_none_or(|s| ex.status == s))
        .collect();

    if included.is_empty() {
        println!("No exercise data in the selected range.");
        return;
    }

    let priced = price_snapshot(&included);
    if priced.is_empty() {
        println!("No exercise data in the selected range.");
        return;
    }

    let ctx = CommandContext {
        cli: &cli,
        number_format,
    };
    app::handle_command(&priced, &ctx);
}
