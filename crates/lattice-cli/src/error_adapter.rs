//! Error adapter for converting LatticeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. JSON parse errors
//! point at the offending line and column of the input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use lattice::LatticeError;

/// Adapter for a JSON parse error together with the text it was raised on.
pub struct ParseAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> ParseAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the error location, if serde_json reported one.
    fn span(&self) -> Option<SourceSpan> {
        let offset = line_column_offset(self.src, self.err.line(), self.err.column())?;
        let len = usize::from(offset < self.src.len());
        Some(SourceSpan::new(offset.into(), len))
    }
}

impl fmt::Debug for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse diagram: {}", self.err)
    }
}

impl std::error::Error for ParseAdapter<'_> {}

impl MietteDiagnostic for ParseAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("lattice::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            Category::Syntax | Category::Eof => "the input must be a single JSON object",
            Category::Data => {
                "expected `classes` and `relationships` arrays; relationship `type` is one of \
                 Aggregation, Composition, Inheritance, Realization"
            }
            Category::Io => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        let message = match self.err.classify() {
            Category::Eof => "input ends here",
            Category::Data => "unexpected value",
            Category::Syntax | Category::Io => "invalid JSON",
        };
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(message.to_string()),
            span,
        ))))
    }
}

/// Adapter for non-parse [`LatticeError`] variants.
///
/// These errors carry no source location and are reported with a code only.
pub struct ErrorAdapter<'a>(pub &'a LatticeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            LatticeError::Io(_) => "lattice::io",
            LatticeError::Parse { .. } => "lattice::parse",
            LatticeError::InvalidInput(_) => "lattice::input",
            LatticeError::Config(_) => "lattice::config",
            LatticeError::Layout(_) => "lattice::layout",
            LatticeError::Export(_) => "lattice::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Parse(ParseAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Parse(p) => fmt::Display::fmt(p, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Parse(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Parse(p) => p.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Parse(p) => p.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Parse(p) => p.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Converts a 1-based line and column into a byte offset into `src`.
///
/// serde_json reports line 0 for errors that have no position.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>();
    let line_len = src[line_start..]
        .split('\n')
        .next()
        .map_or(0, str::len);

    Some(line_start + column.saturating_sub(1).min(line_len))
}

/// Convert a [`LatticeError`] into a list of reportable errors.
pub fn to_reportables(err: &LatticeError) -> Vec<Reportable<'_>> {
    match err {
        LatticeError::Parse { err, src } => vec![Reportable::Parse(ParseAdapter::new(err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
