//! `lattice` binary.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use lattice::LatticeError;
use lattice_cli::{Args, error_adapter::to_reportables};

/// Parses `--log-level`, falling back to `warn` on an unknown level.
fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    })
}

/// Logs one rendered miette report per diagnostic in `err`.
fn report(err: &LatticeError) {
    let handler = GraphicalReportHandler::new();
    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, &reportable).is_err() {
            rendered = reportable.to_string();
        }
        error!("{rendered}");
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = level_filter(&args.log_level);
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Lattice");
    debug!(args:?; "Parsed arguments");

    match lattice_cli::run(&args) {
        Ok(()) => info!("Completed successfully"),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}
