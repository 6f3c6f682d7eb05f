//! Text style definitions for class box rows.
//!
//! A [`TextStyle`] describes how a row is typeset: family, size, weight and
//! horizontal alignment. Sizes feed [`GlyphMetrics`](crate::metrics::GlyphMetrics)
//! for measurement; the remaining properties are only written to the style
//! block.
//!
//! # Examples
//!
//! ```
//! # use lattice_core::draw::{FontWeight, TextAnchor, TextStyle};
//! let title = TextStyle::new("Helvetica", 14)
//!     .with_weight(FontWeight::Bold)
//!     .with_anchor(TextAnchor::Middle);
//!
//! assert_eq!(title.font_size(), 14);
//! assert_eq!(title.weight(), FontWeight::Bold);
//! ```

use crate::color::Color;

/// Font weight of a text row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the CSS `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Horizontal alignment of a text row relative to its `x` coordinate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// `x` is the left edge of the text
    #[default]
    Start,
    /// `x` is the horizontal center of the text
    Middle,
}

impl TextAnchor {
    /// Returns the CSS `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Defines the visual style for a text row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    anchor: TextAnchor,
    color: Color,
}

impl TextStyle {
    /// Creates a normal-weight, start-aligned, black style.
    pub fn new(font_family: &str, font_size: u16) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            color: Color::default(),
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Font size in points
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_defaults() {
        let style = TextStyle::new("Arial", 12);
        assert_eq!(style.font_family(), "Arial");
        assert_eq!(style.font_size(), 12);
        assert_eq!(style.weight(), FontWeight::Normal);
        assert_eq!(style.anchor(), TextAnchor::Start);
        assert_eq!(style.color().to_string(), "black");
    }

    #[test]
    fn test_svg_values() {
        assert_eq!(FontWeight::Bold.to_svg_value(), "bold");
        assert_eq!(FontWeight::Normal.to_svg_value(), "normal");
        assert_eq!(TextAnchor::Middle.to_svg_value(), "middle");
        assert_eq!(TextAnchor::Start.to_svg_value(), "start");
    }

    #[test]
    fn test_with_color() {
        let navy = Color::new("navy").unwrap();
        let style = TextStyle::new("Arial", 12).with_color(navy);
        assert_eq!(style.color(), navy);
    }
}
