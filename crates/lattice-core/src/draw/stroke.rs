//! Line strokes for box outlines, dividers, connectors and glyphs.
//!
//! A stroke is never written as element attributes. It becomes `stroke`,
//! `stroke-width` and `stroke-dasharray` declarations in the document style
//! block through [`ElementStyle::with_stroke`](crate::draw::ElementStyle::with_stroke).

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 6 unit dashes with 4 unit gaps
    Dashed,
}

impl StrokeStyle {
    /// The `stroke-dasharray` value, `None` for a continuous line.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
        }
    }
}

/// Color, width and dash pattern of one line.
///
/// # Examples
///
/// ```
/// use lattice_core::{color::Color, draw::{StrokeDefinition, StrokeStyle}};
///
/// let stroke = StrokeDefinition::solid(Color::new("navy").unwrap(), 1.5)
///     .with_style(StrokeStyle::Dashed);
///
/// assert_eq!(stroke.width(), 1.5);
/// assert_eq!(stroke.style().dasharray(), Some("6,4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

/// One unit wide, solid black.
impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}
