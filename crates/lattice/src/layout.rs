//! Class diagram layout and connector routing.
//!
//! A build runs these stages in order:
//!
//! 1. [`ClassBoxLayout`] sizes every class box and places it at its position hint.
//! 2. [`CollisionResolver`] pushes overlapping boxes apart horizontally.
//! 3. The canvas bounds are computed from the resolved rectangles.
//! 4. An [`OccupancyGrid`] is rasterized once from those rectangles.
//! 5. Each relationship is routed by a [`RouteSelector`] and gets a [`Glyph`].
//!
//! Relationships refer to boxes by index into the single owned box list.

mod anchor;
mod class_box;
mod collision;
mod glyph;
mod grid;
mod path_finder;
mod route;

pub use anchor::{Anchor, Side};
pub use class_box::{ClassBox, ClassBoxLayout, RowKind, TextRow};
pub use collision::CollisionResolver;
pub use glyph::{Glyph, connector_points, corner_points};
pub use grid::OccupancyGrid;
pub use path_finder::{Direction, FoundPath, PathFinder, path_cost};
pub use route::{Route, RouteSelector, count_turns};

use std::collections::HashMap;

use log::{debug, info};

use lattice_core::{
    draw::RelationshipStyle,
    geometry::{Point, Rect, Size},
    identifier::ElementId,
    metrics::GlyphMetrics,
    model::{ClassDiagram, RelationshipKind},
};

use crate::{LatticeError, config::LayoutConfig};

/// A relationship with its chosen route, drawn connector and glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedRelationship {
    id: ElementId,
    kind: RelationshipKind,
    source: usize,
    destination: usize,
    route: Route,
    connector: Vec<Point>,
    glyph: Glyph,
}

impl RoutedRelationship {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// Index of the source box in [`DiagramLayout::boxes`].
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the destination box in [`DiagramLayout::boxes`].
    pub fn destination(&self) -> usize {
        self.destination
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Points of the drawn line, from the source edge to the trimmed end.
    pub fn connector(&self) -> &[Point] {
        &self.connector
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn style(&self) -> RelationshipStyle {
        RelationshipStyle::for_kind(self.kind)
    }
}

/// The positioned result of a layout build.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    boxes: Vec<ClassBox>,
    relationships: Vec<RoutedRelationship>,
    canvas: Size,
}

impl DiagramLayout {
    /// Class boxes in input order.
    pub fn boxes(&self) -> &[ClassBox] {
        &self.boxes
    }

    /// Relationships in input order.
    pub fn relationships(&self) -> &[RoutedRelationship] {
        &self.relationships
    }

    /// Canvas size, border padding included.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Looks up a box by class name.
    pub fn class_box(&self, name: &str) -> Option<&ClassBox> {
        self.boxes.iter().find(|class_box| class_box.name() == name)
    }
}

/// Runs the layout stages with one configuration.
///
/// # Examples
///
/// ```
/// # use lattice::{config::LayoutConfig, layout::Engine};
/// # use lattice_core::{metrics::GlyphMetrics, model::{ClassDiagram, ClassSpec}};
/// let config = LayoutConfig::default();
/// let metrics = GlyphMetrics::default();
/// let engine = Engine::new(&config, &metrics);
///
/// let diagram = ClassDiagram::new(vec![ClassSpec::new("A"), ClassSpec::new("B")], vec![]);
/// let layout = engine.build(&diagram).unwrap();
///
/// // The second box is moved off the first
/// assert!(layout.boxes()[1].rect().x() > layout.boxes()[0].rect().right());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    config: &'a LayoutConfig,
    metrics: &'a GlyphMetrics,
}

impl<'a> Engine<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a GlyphMetrics) -> Self {
        Self { config, metrics }
    }

    /// Lays out `diagram`. The input is expected to be validated.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Layout`] if a relationship names a class that
    /// is not in the diagram.
    pub fn build(&self, diagram: &ClassDiagram) -> Result<DiagramLayout, LatticeError> {
        let config = self.config;

        let box_layout = ClassBoxLayout::new(
            self.metrics,
            config.padding_x(),
            config.padding_y(),
            config.name_font_size(),
            config.member_font_size(),
        );
        let mut boxes: Vec<ClassBox> = diagram
            .classes()
            .iter()
            .map(|class| box_layout.layout(class))
            .collect();
        debug!(boxes = boxes.len(); "Class boxes laid out");

        let moves = CollisionResolver::new(config.collision_padding())
            .with_sweeps(config.collision_sweeps())
            .resolve(&mut boxes);
        debug!(moves = moves; "Collisions resolved");

        let rects: Vec<Rect> = boxes.iter().map(ClassBox::rect).collect();
        let grid = OccupancyGrid::build(&rects, config.border_padding(), config.grid_buffer());
        let canvas = grid.size();
        info!(width = canvas.width(), height = canvas.height(); "Canvas bounds computed");

        let index: HashMap<&str, usize> = boxes
            .iter()
            .enumerate()
            .map(|(i, class_box)| (class_box.name(), i))
            .collect();
        let lookup = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| LatticeError::Layout(format!("unknown class `{name}`")))
        };

        let selector = RouteSelector::new(PathFinder::new(&grid, config.turn_penalty()));
        let clearance = config.grid_buffer() + 1;
        let anchors: Vec<[Anchor; 4]> = rects
            .iter()
            .map(|rect| Anchor::all(*rect, clearance))
            .collect();

        let mut relationships = Vec::with_capacity(diagram.relationships().len());
        for relationship in diagram.relationships() {
            let source = lookup(relationship.source())?;
            let destination = lookup(relationship.destination())?;

            let route = selector
                .select(&anchors[source], &anchors[destination])
                .ok_or_else(|| {
                    LatticeError::Layout(format!(
                        "no anchor pair between `{}` and `{}`",
                        relationship.source(),
                        relationship.destination()
                    ))
                })?;

            let glyph = Glyph::new(
                RelationshipStyle::for_kind(relationship.kind()),
                route.destination().edge(),
                route.destination().side(),
                config.glyph_size(),
            );

            relationships.push(RoutedRelationship {
                id: ElementId::for_relationship(
                    relationship.kind(),
                    relationship.source(),
                    relationship.destination(),
                ),
                kind: relationship.kind(),
                source,
                destination,
                connector: connector_points(&route),
                route,
                glyph,
            });
        }

        info!(
            boxes = boxes.len(),
            relationships = relationships.len(),
            direct = relationships.iter().filter(|r| r.route.is_direct()).count();
            "Layout calculated"
        );

        Ok(DiagramLayout {
            boxes,
            relationships,
            canvas,
        })
    }
}

#[cfg(test)]
mod tests {
    use lattice_core::model::{ClassSpec, RelationshipSpec};

    use super::*;

    fn build(diagram: &ClassDiagram) -> Result<DiagramLayout, LatticeError> {
        let config = LayoutConfig::default();
        let metrics = GlyphMetrics::default();
        Engine::new(&config, &metrics).build(diagram)
    }

    #[test]
    fn test_empty_diagram() {
        let layout = build(&ClassDiagram::default()).unwrap();
        assert!(layout.boxes().is_empty());
        assert!(layout.relationships().is_empty());
        assert_eq!(layout.canvas(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_unknown_class_is_a_layout_error() {
        let diagram = ClassDiagram::new(
            vec![ClassSpec::new("A")],
            vec![RelationshipSpec::new(RelationshipKind::Inheritance, "A", "Ghost")],
        );
        assert!(matches!(build(&diagram), Err(LatticeError::Layout(_))));
    }

    #[test]
    fn test_relationship_ids_and_indices() {
        // Same glyph widths, so the boxes share a center line
        let diagram = ClassDiagram::new(
            vec![
                ClassSpec::new("Node").with_position(0.0, 200.0),
                ClassSpec::new("Done").with_position(0.0, 0.0),
            ],
            vec![RelationshipSpec::new(
                RelationshipKind::Inheritance,
                "Done",
                "Node",
            )],
        );
        let layout = build(&diagram).unwrap();
        let relationship = &layout.relationships()[0];

        assert_eq!(relationship.id().as_str(), "rel-inheritance-Done-Node");
        assert_eq!(relationship.source(), 1);
        assert_eq!(relationship.destination(), 0);
        assert_eq!(relationship.route().source().side(), Side::Bottom);
        assert_eq!(relationship.route().destination().side(), Side::Top);
        assert_eq!(relationship.route().turns(), 0);
        assert_eq!(relationship.glyph().tip(), relationship.route().destination().edge());
        assert_eq!(relationship.connector().len(), 2);
    }

    #[test]
    fn test_canvas_covers_boxes() {
        let diagram = ClassDiagram::new(
            vec![
                ClassSpec::new("Left").with_field("id", "int"),
                ClassSpec::new("Right").with_position(300.0, 150.0),
            ],
            vec![],
        );
        let layout = build(&diagram).unwrap();
        for class_box in layout.boxes() {
            assert!(layout.canvas().width() >= class_box.rect().right() + 20.0);
            assert!(layout.canvas().height() >= class_box.rect().bottom() + 20.0);
        }
        assert!(layout.class_box("Right").is_some());
        assert!(layout.class_box("Missing").is_none());
    }
}
