//! SVG rendering for relationship connectors and glyphs.

use svg::node::element::{Line, Polygon, Polyline};

use lattice_core::{
    draw::{ElementStyle, GlyphFill, LayeredOutput, RenderLayer},
    geometry::Point,
};

use super::{StyleSheet, Svg};
use crate::layout::RoutedRelationship;

fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Svg {
    /// Renders the connector line and the destination glyph.
    pub(super) fn render_relationship(
        &self,
        relationship: &RoutedRelationship,
        sheet: &mut StyleSheet,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let style = relationship.style();
        let id = relationship.id();
        let connector = relationship.connector();

        let line_stroke = self.stroke().with_style(style.line().stroke_style());
        sheet.insert(
            id.clone(),
            ElementStyle::new().with_stroke(&line_stroke).with_fill(None),
        );

        match connector {
            [start, .., end] if relationship.route().is_direct() => {
                output.add_to_layer(
                    RenderLayer::Connector,
                    Box::new(
                        Line::new()
                            .set("id", id.as_str())
                            .set("x1", start.x())
                            .set("y1", start.y())
                            .set("x2", end.x())
                            .set("y2", end.y()),
                    ),
                );
            }
            _ => {
                output.add_to_layer(
                    RenderLayer::Connector,
                    Box::new(
                        Polyline::new()
                            .set("id", id.as_str())
                            .set("points", points_attribute(connector)),
                    ),
                );
            }
        }

        let glyph = relationship.glyph();
        let glyph_id = id.child("glyph");
        let fill = match glyph.fill() {
            GlyphFill::Open => self.box_fill,
            GlyphFill::Filled => self.stroke,
        };
        output.add_to_layer(
            RenderLayer::Glyph,
            Box::new(
                Polygon::new()
                    .set("id", glyph_id.as_str())
                    .set("points", points_attribute(glyph.points())),
            ),
        );
        sheet.insert(
            glyph_id,
            ElementStyle::new()
                .with_stroke(&self.stroke())
                .with_fill(Some(fill)),
        );

        output
    }
}
