//! CLI logic for the ClassForge export tool.
//!
//! This crate is the host adapter around the ClassForge pipeline: it loads
//! a snapshot document, applies the selection preconditions, and hands the
//! rendered Java source to the output file or stdout.

pub mod error_adapter;

mod args;
mod config;
mod document;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use classforge::{ExportBuilder, select_class};

use document::Document;

/// Run the ClassForge CLI application
///
/// This function reads the input snapshot document, exports the selected
/// class through the ClassForge pipeline, and writes the resulting Java
/// source to the output file (or stdout when no output path is given).
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot document parse errors
/// - Selection precondition violations
/// - Classification errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Processing snapshot document");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the snapshot document
    let source = fs::read_to_string(&args.input)?;
    let document = Document::parse(&source)?;

    // Apply the selection preconditions
    let selection = document.selected_snapshots();
    let element = select_class(&selection)?;

    // Export the selected class
    let builder = ExportBuilder::new(app_config);
    let model = builder.classify(element)?;
    let java_source = builder.render_java(&model);

    // The class name doubles as the display caption of the host dialog.
    info!(class_name = model.name(); "Java source generated");

    match &args.output {
        Some(path) => {
            fs::write(path, &java_source)?;
            info!(output_file = path; "Java source exported");
        }
        None => println!("{java_source}"),
    }

    Ok(())
}
