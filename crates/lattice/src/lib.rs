//! Lattice - Auto-layout and orthogonal routing for UML class diagrams.
//!
//! A diagram is described as JSON: classes with fields, methods and position
//! hints, plus typed relationships between them. Lattice sizes each class box
//! from its text, pushes overlapping boxes apart, routes every relationship
//! along grid-aligned paths with A* search and writes the result as SVG.

pub mod config;
pub mod layout;

mod error;
mod export;
mod validate;

pub use lattice_core::{color, draw, geometry, identifier, metrics, model};

pub use error::LatticeError;
pub use validate::validate_diagram;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::{DiagramLayout, Engine};
use model::ClassDiagram;

/// Builder for parsing, laying out and rendering class diagrams.
///
/// # Examples
///
/// ```rust
/// use lattice::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{
///     "classes": [
///         { "name": "Animal", "fields": [{ "name": "name", "type": "String" }] },
///         { "name": "Dog", "x": 200, "y": 0 }
///     ],
///     "relationships": [
///         { "type": "Inheritance", "source": "Dog", "destination": "Animal" }
///     ]
/// }"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
///
/// assert!(svg.contains("+name:String"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON diagram description.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Parse`] if `source` is not valid JSON or does
    /// not match the diagram schema. Referential checks happen in
    /// [`DiagramBuilder::layout`].
    pub fn parse(&self, source: &str) -> Result<ClassDiagram, LatticeError> {
        info!("Parsing diagram");

        let diagram: ClassDiagram = serde_json::from_str(source)
            .map_err(|err| LatticeError::new_parse_error(err, source))?;

        debug!(
            classes = diagram.classes().len(),
            relationships = diagram.relationships().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Validate `diagram` and compute its layout.
    ///
    /// The diagram itself is left untouched; every position adjustment lives
    /// in the returned [`DiagramLayout`].
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidInput`] for empty or duplicate class
    /// names, unusable positions, or relationships naming unknown classes,
    /// and [`LatticeError::Config`] for an unusable metrics table.
    pub fn layout(&self, diagram: &ClassDiagram) -> Result<DiagramLayout, LatticeError> {
        validate_diagram(diagram)?;

        let metrics = self
            .config
            .metrics()
            .glyph_metrics()
            .map_err(LatticeError::Config)?;

        Engine::new(self.config.layout(), &metrics).build(diagram)
    }

    /// Lay out `diagram` and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`DiagramBuilder::layout`], a
    /// [`LatticeError::Config`] for unparseable style colors, and
    /// [`LatticeError::Export`] if the document cannot be rendered.
    pub fn render_svg(&self, diagram: &ClassDiagram) -> Result<String, LatticeError> {
        let layout = self.layout(diagram)?;

        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        let svg = exporter.export_layout(&layout)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
