//! Command-line front end for the Lattice class diagram renderer.
//!
//! [`run`] wires the pieces together: configuration discovery, reading the
//! JSON description, rendering through [`lattice::DiagramBuilder`] and
//! writing the SVG document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use lattice::{DiagramBuilder, LatticeError};

/// Renders the diagram at `args.input` into `args.output`.
///
/// Nothing is written when any step fails.
///
/// # Errors
///
/// Returns `LatticeError` when the config file or input cannot be read, the
/// input is malformed or inconsistent, or the output cannot be written.
pub fn run(args: &Args) -> Result<(), LatticeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering class diagram"
    );

    let builder = DiagramBuilder::new(config::load_config(args.config.as_ref())?);

    let source = fs::read_to_string(&args.input)?;
    debug!(bytes = source.len(); "Input read");

    let diagram = builder.parse(&source)?;
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, &svg)?;
    info!(output_file = args.output, bytes = svg.len(); "SVG written");

    Ok(())
}
