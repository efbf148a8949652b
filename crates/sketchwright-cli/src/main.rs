//! Sketchwright CLI entry point.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use sketchwright_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = args.log_filter().unwrap_or_else(|| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Sketchwright");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = sketchwright_cli::run(&args) {
        error!(
            command:? = args.command,
            output_path = args.output.as_str();
            "Failed to generate diagram\n{}",
            error_adapter::render(&err)
        );
        process::exit(1);
    }

    info!("Completed successfully");
}
