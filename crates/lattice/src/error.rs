//! Error types for Lattice operations.
//!
//! This module provides the main error type [`LatticeError`] which wraps
//! the conditions that can stop a diagram build.

use std::io;

use thiserror::Error;

/// The main error type for Lattice operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text alongside the JSON error so
/// callers can point at the offending line and column.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Invalid layout input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for LatticeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl LatticeError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
