//! Command-line argument definitions for the Sketchwright CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects what to draw; the shared options
//! control the output path, configuration file selection, and logging
//! verbosity.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use log::LevelFilter;

/// Command-line arguments for the Sketchwright diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the output Excalidraw file
    #[arg(short, long, global = true, default_value = "diagram.excalidraw")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Parsed `--log-level`, or `None` if it names no known level
    pub fn log_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }
}

/// What to draw
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a layout from keywords such as "chain", "router" or "parallel"
    Describe {
        /// Free-text description of the diagram
        text: String,
    },

    /// Draw the overview of every layout pattern
    Showcase,
}
