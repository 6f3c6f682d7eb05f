//! Z-ordered grouping of SVG nodes.
//!
//! Box outlines go under connectors, connectors under glyphs, and member
//! text on top of everything, regardless of the order in which boxes and
//! relationships are rendered.
//!
//! ```
//! # use lattice_core::draw::{LayeredOutput, RenderLayer};
//! # use svg::node::element::{Polyline, Rectangle};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Connector, Box::new(Polyline::new()));
//! output.add_to_layer(RenderLayer::Box, Box::new(Rectangle::new()));
//!
//! // One `<g data-layer="...">` per non-empty layer, boxes first
//! assert_eq!(output.render().len(), 2);
//! ```

use std::collections::BTreeMap;

use svg::node::element::Group;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Drawing layers, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Full-canvas background
    Background,
    /// Class box rectangles and compartment dividers
    Box,
    /// Relationship lines
    Connector,
    /// Diamonds and triangles at relationship ends
    Glyph,
    /// Class names and member rows
    Text,
}

impl RenderLayer {
    /// Value of the group's `data-layer` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Box => "box",
            Self::Connector => "connector",
            Self::Glyph => "glyph",
            Self::Text => "text",
        }
    }
}

/// SVG nodes bucketed by [`RenderLayer`].
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `node` to `layer`; nodes keep their insertion order.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Moves every node of `other` behind this output's nodes of the same layer.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    /// Consumes the output into one `<g>` per non-empty layer, bottom first.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(layer, nodes)| {
                let group = nodes
                    .into_iter()
                    .fold(Group::new().set("data-layer", layer.name()), Group::add);
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
