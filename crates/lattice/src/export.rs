pub mod svg;

use crate::layout::DiagramLayout;

/// Serializes a finished layout into an output document.
pub trait Exporter {
    fn export_layout(&self, layout: &DiagramLayout) -> Result<String, Error>;
}

#[derive(Debug)]
pub enum Error {
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
