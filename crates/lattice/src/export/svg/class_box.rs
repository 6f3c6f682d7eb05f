//! SVG rendering for class boxes.

use svg::node::element::{Line, Rectangle, Text};

use lattice_core::draw::{
    ElementStyle, FontWeight, LayeredOutput, RenderLayer, TextAnchor, TextStyle,
};

use super::{Svg, StyleSheet};
use crate::layout::{ClassBox, RowKind, TextRow};

impl Svg {
    /// Renders the rectangle, compartment divider and text rows of a box.
    pub(super) fn render_class_box(
        &self,
        class_box: &ClassBox,
        sheet: &mut StyleSheet,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let rect = class_box.rect();

        output.add_to_layer(
            RenderLayer::Box,
            Box::new(
                Rectangle::new()
                    .set("id", class_box.id().as_str())
                    .set("x", rect.x())
                    .set("y", rect.y())
                    .set("width", rect.width())
                    .set("height", rect.height()),
            ),
        );
        sheet.insert(
            class_box.id().clone(),
            ElementStyle::new()
                .with_stroke(&self.stroke())
                .with_fill(Some(self.box_fill)),
        );

        let divider_id = class_box.id().child("divider");
        output.add_to_layer(
            RenderLayer::Box,
            Box::new(
                Line::new()
                    .set("id", divider_id.as_str())
                    .set("x1", rect.x())
                    .set("y1", class_box.divider_y())
                    .set("x2", rect.right())
                    .set("y2", class_box.divider_y()),
            ),
        );
        sheet.insert(divider_id, ElementStyle::new().with_stroke(&self.stroke()));

        for row in class_box.rows() {
            output.add_to_layer(RenderLayer::Text, Box::new(self.render_row(row, sheet)));
        }

        output
    }

    fn render_row(&self, row: &TextRow, sheet: &mut StyleSheet) -> Text {
        let text_style = TextStyle::new(&self.font_family, row.font_size()).with_color(self.stroke);
        let text_style = match row.kind() {
            RowKind::Name => text_style
                .with_weight(FontWeight::Bold)
                .with_anchor(TextAnchor::Middle),
            RowKind::Field | RowKind::Method => text_style.with_anchor(TextAnchor::Start),
        };
        sheet.insert(row.id().clone(), ElementStyle::new().with_text(&text_style));

        Text::new(row.text())
            .set("id", row.id().as_str())
            .set("x", row.position().x())
            .set("y", row.position().y())
            .set("dominant-baseline", "central")
    }
}
