//! SVG serialization of a finished layout.
//!
//! Every element gets a stable id and its visual properties go into a single
//! `<style>` block, so styling survives reordering of classes or
//! relationships. Elements are grouped into z-ordered layers.

mod class_box;
mod relationship;
mod style;

pub use style::StyleSheet;

use log::{debug, info};
use svg::{Document, node::element::Rectangle};

use lattice_core::{
    color::Color,
    draw::{ElementStyle, LayeredOutput, RenderLayer, StrokeDefinition},
    identifier::ElementId,
};

use crate::{LatticeError, config::StyleConfig, export, layout::DiagramLayout};

const STROKE_WIDTH: f32 = 1.0;

/// SVG exporter with resolved colors and font.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    stroke: Color,
    box_fill: Color,
    font_family: String,
}

impl Svg {
    fn stroke(&self) -> StrokeDefinition {
        StrokeDefinition::solid(self.stroke, STROKE_WIDTH)
    }

    /// Builds the SVG document for `layout`.
    pub fn render_document(&self, layout: &DiagramLayout) -> Document {
        let canvas = layout.canvas();
        let mut sheet = StyleSheet::new();
        let mut output = LayeredOutput::new();

        if let Some(background) = self.background {
            let id = ElementId::new("background");
            output.add_to_layer(
                RenderLayer::Background,
                Box::new(
                    Rectangle::new()
                        .set("id", id.as_str())
                        .set("x", 0)
                        .set("y", 0)
                        .set("width", canvas.width())
                        .set("height", canvas.height()),
                ),
            );
            sheet.insert(id, ElementStyle::new().with_fill(Some(background)));
        }

        for class_box in layout.boxes() {
            output.merge(self.render_class_box(class_box, &mut sheet));
        }
        for relationship in layout.relationships() {
            output.merge(self.render_relationship(relationship, &mut sheet));
        }
        debug!(rules = sheet.len(); "SVG elements rendered");

        let mut document = Document::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("viewBox", (0.0, 0.0, canvas.width(), canvas.height()))
            .add(sheet.to_svg());

        for node in output.render() {
            document = document.add(node);
        }

        document
    }
}

impl export::Exporter for Svg {
    fn export_layout(&self, layout: &DiagramLayout) -> Result<String, export::Error> {
        let canvas = layout.canvas();
        if !canvas.width().is_finite() || !canvas.height().is_finite() {
            return Err(export::Error::Render(format!(
                "canvas size {}x{} is not finite",
                canvas.width(),
                canvas.height()
            )));
        }

        let document = self.render_document(layout);
        info!(
            width = canvas.width(),
            height = canvas.height();
            "SVG document rendered"
        );
        Ok(document.to_string())
    }
}

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Config`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, LatticeError> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            background: style.background_color().map_err(LatticeError::Config)?,
            stroke: style.stroke_color().map_err(LatticeError::Config)?,
            box_fill: style.box_fill().map_err(LatticeError::Config)?,
            font_family: style.font_family().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use lattice_core::{
        metrics::GlyphMetrics,
        model::{ClassDiagram, ClassSpec, RelationshipKind, RelationshipSpec},
    };

    use super::*;
    use crate::{config::LayoutConfig, export::Exporter, layout::Engine};

    fn layout(diagram: &ClassDiagram) -> DiagramLayout {
        let config = LayoutConfig::default();
        let metrics = GlyphMetrics::default();
        Engine::new(&config, &metrics).build(diagram).unwrap()
    }

    fn export(diagram: &ClassDiagram) -> String {
        SvgBuilder::new()
            .build()
            .unwrap()
            .export_layout(&layout(diagram))
            .unwrap()
    }

    #[test]
    fn test_document_size_matches_canvas() {
        let diagram = ClassDiagram::new(vec![ClassSpec::new("A")], vec![]);
        let layout = layout(&diagram);
        let svg = export(&diagram);

        let width = layout.canvas().width();
        let height = layout.canvas().height();
        assert!(svg.contains(&format!("width=\"{width}\"")));
        assert!(svg.contains(&format!("height=\"{height}\"")));
        assert!(svg.contains(&format!("viewBox=\"0 0 {width} {height}\"")));
    }

    #[test]
    fn test_empty_diagram_renders() {
        let svg = export(&ClassDiagram::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<style"));
    }

    #[test]
    fn test_background_is_optional() {
        let diagram = ClassDiagram::new(vec![ClassSpec::new("A")], vec![]);
        assert!(!export(&diagram).contains("id=\"background\""));
    }

    #[test]
    fn test_one_element_per_box_and_row() {
        let diagram = ClassDiagram::new(
            vec![
                ClassSpec::new("Account")
                    .with_field("owner", "String")
                    .with_field("balance", "f64"),
                ClassSpec::new("Bank").with_position(300.0, 0.0),
            ],
            vec![RelationshipSpec::new(
                RelationshipKind::Aggregation,
                "Account",
                "Bank",
            )],
        );
        let svg = export(&diagram);

        assert_eq!(svg.matches("<rect").count(), 2);
        assert_eq!(svg.matches("<text").count(), 4);
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("+balance:f64"));
        assert!(svg.contains("#class-Account-field-balance {"));
        assert!(svg.contains("#rel-aggregation-Account-Bank-glyph {"));
    }

    #[test]
    fn test_invalid_color_is_a_config_error() {
        let style: StyleConfig =
            serde_json::from_value(serde_json::json!({ "stroke_color": "not a color" })).unwrap();
        let result = SvgBuilder::new().with_style(&style).build();
        assert!(matches!(result, Err(LatticeError::Config(_))));
    }

    #[test]
    fn test_background_color() {
        let style: StyleConfig =
            serde_json::from_value(serde_json::json!({ "background_color": "#f0f0f0" })).unwrap();
        let svg = SvgBuilder::new()
            .with_style(&style)
            .build()
            .unwrap()
            .export_layout(&layout(&ClassDiagram::default()))
            .unwrap();

        assert!(svg.contains("id=\"background\""));
        assert!(svg.contains("data-layer=\"background\""));
    }
}
