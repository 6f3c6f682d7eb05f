//! Visual definitions for diagram elements.
//!
//! This module holds everything that describes how an element looks, as
//! opposed to where it is: strokes, text styles, the relationship style
//! table, per-element style declarations and z-ordered render layers.

mod layer;
mod relationship;
mod stroke;
mod style;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use relationship::{GlyphFill, GlyphShape, LinePattern, RelationshipStyle};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use style::ElementStyle;
pub use text::{FontWeight, TextAnchor, TextStyle};
