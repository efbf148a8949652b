//! Sketchwright CLI library
//!
//! This module contains the core CLI logic for the Sketchwright diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use log::info;

use sketchwright::{Sketch, SketchError, layout::Showcase};

/// Run the Sketchwright CLI application
///
/// This function builds the diagram selected by the subcommand and writes the
/// resulting Excalidraw document to the output file.
///
/// # Errors
///
/// Returns `SketchError` for:
/// - Configuration loading errors
/// - Layout errors
/// - File I/O and serialization errors
pub fn run(args: &Args) -> Result<(), SketchError> {
    info!(
        command:? = args.command,
        output_path = args.output;
        "Generating diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let mut sketch = Sketch::new(app_config);

    let created = match &args.command {
        Command::Describe { text } => sketch.apply_description(text)?,
        Command::Showcase => sketch.apply(&Showcase)?,
    };

    sketch.save(&args.output)?;

    info!(
        output_file = args.output,
        elements = created.len();
        "Excalidraw document exported successfully"
    );

    Ok(())
}
