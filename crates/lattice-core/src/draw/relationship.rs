//! Visual conventions for relationship connectors.
//!
//! All relationship kinds share one glyph placement contract; they differ
//! only in glyph outline, glyph fill and line pattern. Those differences live
//! in a single static table indexed by [`RelationshipKind`].
//!
//! | Kind | Glyph | Fill | Line |
//! |------|-------|------|------|
//! | Aggregation | diamond | open | solid |
//! | Composition | diamond | filled | solid |
//! | Inheritance | triangle | open | solid |
//! | Realization | triangle | open | dashed |

use crate::{draw::StrokeStyle, model::RelationshipKind};

/// Outline of the glyph drawn where a connector meets its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphShape {
    /// Three points: the tip plus a base `size` away from it
    Triangle,
    /// Four points: the tip, two flanks `size` away, and a back point `2 * size` away
    Diamond,
}

/// Whether a glyph is drawn hollow or solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFill {
    /// Filled with the background (box fill) color
    Open,
    /// Filled with the stroke color
    Filled,
}

/// Line pattern of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    Solid,
    Dashed,
}

impl LinePattern {
    /// Converts the pattern into a [`StrokeStyle`].
    pub fn stroke_style(self) -> StrokeStyle {
        match self {
            Self::Solid => StrokeStyle::Solid,
            Self::Dashed => StrokeStyle::Dashed,
        }
    }
}

/// Glyph and line conventions for one relationship kind.
///
/// # Examples
///
/// ```
/// # use lattice_core::draw::{GlyphFill, GlyphShape, LinePattern, RelationshipStyle};
/// # use lattice_core::model::RelationshipKind;
/// let style = RelationshipStyle::for_kind(RelationshipKind::Composition);
/// assert_eq!(style.shape(), GlyphShape::Diamond);
/// assert_eq!(style.fill(), GlyphFill::Filled);
/// assert_eq!(style.line(), LinePattern::Solid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipStyle {
    shape: GlyphShape,
    fill: GlyphFill,
    line: LinePattern,
}

/// Indexed by `RelationshipKind` discriminant, in declaration order.
const RELATIONSHIP_STYLES: [RelationshipStyle; 4] = [
    // Aggregation
    RelationshipStyle {
        shape: GlyphShape::Diamond,
        fill: GlyphFill::Open,
        line: LinePattern::Solid,
    },
    // Composition
    RelationshipStyle {
        shape: GlyphShape::Diamond,
        fill: GlyphFill::Filled,
        line: LinePattern::Solid,
    },
    // Inheritance
    RelationshipStyle {
        shape: GlyphShape::Triangle,
        fill: GlyphFill::Open,
        line: LinePattern::Solid,
    },
    // Realization
    RelationshipStyle {
        shape: GlyphShape::Triangle,
        fill: GlyphFill::Open,
        line: LinePattern::Dashed,
    },
];

impl RelationshipStyle {
    /// Looks up the conventions for `kind`.
    pub fn for_kind(kind: RelationshipKind) -> Self {
        RELATIONSHIP_STYLES[kind as usize]
    }

    pub fn shape(&self) -> GlyphShape {
        self.shape
    }

    pub fn fill(&self) -> GlyphFill {
        self.fill
    }

    pub fn line(&self) -> LinePattern {
        self.line
    }
}
