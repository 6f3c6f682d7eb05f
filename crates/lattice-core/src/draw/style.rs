//! Per-element style declarations.
//!
//! The exporter gives every element an id and writes its visual properties
//! into a single `<style>` block. [`ElementStyle`] collects the declarations
//! for one element in a stable order.

use std::fmt::Write;

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextStyle},
};

/// Ordered CSS declarations for one element.
///
/// # Examples
///
/// ```
/// # use lattice_core::draw::{ElementStyle, StrokeDefinition};
/// let style = ElementStyle::new()
///     .with_stroke(&StrokeDefinition::default())
///     .with_fill(None);
///
/// assert_eq!(
///     style.to_css_rule("class-A"),
///     "#class-A { stroke: black; stroke-width: 1; fill: none; }"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementStyle {
    declarations: Vec<(&'static str, String)>,
}

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `stroke`, `stroke-width` and, for patterned lines, `stroke-dasharray`.
    pub fn with_stroke(mut self, stroke: &StrokeDefinition) -> Self {
        self.declarations.push(("stroke", stroke.color().to_string()));
        self.declarations
            .push(("stroke-width", stroke.width().to_string()));
        if let Some(dasharray) = stroke.style().dasharray() {
            self.declarations
                .push(("stroke-dasharray", dasharray.to_string()));
        }
        self
    }

    /// Adds `fill`; `None` renders as `fill: none`.
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        let value = fill.map_or_else(|| "none".to_string(), |color| color.to_string());
        self.declarations.push(("fill", value));
        self
    }

    /// Adds the font declarations and the text color as `fill`.
    pub fn with_text(mut self, text: &TextStyle) -> Self {
        self.declarations
            .push(("font-family", text.font_family().to_string()));
        self.declarations
            .push(("font-size", format!("{}px", text.font_size())));
        self.declarations
            .push(("font-weight", text.weight().to_svg_value().to_string()));
        self.declarations
            .push(("text-anchor", text.anchor().to_svg_value().to_string()));
        self.declarations.push(("fill", text.color().to_string()));
        self
    }

    /// Returns the value of a declared property, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the declarations as a CSS rule for the element with `id`.
    pub fn to_css_rule(&self, id: &str) -> String {
        let mut rule = format!("#{id} {{");
        for (name, value) in &self.declarations {
            // Writing to a String cannot fail
            let _ = write!(rule, " {name}: {value};");
        }
        rule.push_str(" }");
        rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FontWeight, StrokeStyle, TextAnchor};

    #[test]
    fn test_dashed_stroke_declares_dasharray() {
        let stroke = StrokeDefinition::default().with_style(StrokeStyle::Dashed);
        let style = ElementStyle::new().with_stroke(&stroke);
        assert_eq!(style.get("stroke-dasharray"), Some("6,4"));
    }

    #[test]
    fn test_solid_stroke_has_no_dasharray() {
        let style = ElementStyle::new().with_stroke(&StrokeDefinition::default());
        assert_eq!(style.get("stroke-dasharray"), None);
        assert_eq!(style.get("stroke"), Some("black"));
    }

    #[test]
    fn test_text_declarations() {
        let text = TextStyle::new("Helvetica", 14)
            .with_weight(FontWeight::Bold)
            .with_anchor(TextAnchor::Middle);
        let style = ElementStyle::new().with_text(&text);

        assert_eq!(style.get("font-family"), Some("Helvetica"));
        assert_eq!(style.get("font-size"), Some("14px"));
        assert_eq!(style.get("font-weight"), Some("bold"));
        assert_eq!(style.get("text-anchor"), Some("middle"));
        assert_eq!(style.get("fill"), Some("black"));
    }

    #[test]
    fn test_empty_rule() {
        assert_eq!(ElementStyle::new().to_css_rule("x"), "#x { }");
    }
}
