//! Glyph outlines and connector geometry at relationship endpoints.
//!
//! Every relationship kind uses the same placement: the glyph tip sits on
//! the destination box edge and the glyph extends outward along the side
//! normal, so it points into the box. Kinds differ only in the outline and
//! fill looked up from [`RelationshipStyle`].

use lattice_core::{
    draw::{GlyphFill, GlyphShape, RelationshipStyle},
    geometry::Point,
};

use super::{anchor::Side, route::Route};

/// Distance the connector end is pulled back from the glyph tip.
const END_TRIM: f32 = 1.0;

/// A glyph polygon at the destination end of a connector.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    shape: GlyphShape,
    fill: GlyphFill,
    points: Vec<Point>,
}

impl Glyph {
    /// Builds the glyph for `style` with its tip at `tip` on `side`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice::layout::{Glyph, Side};
    /// # use lattice_core::{draw::RelationshipStyle, geometry::Point, model::RelationshipKind};
    /// let style = RelationshipStyle::for_kind(RelationshipKind::Inheritance);
    /// let glyph = Glyph::new(style, Point::new(100.0, 50.0), Side::Left, 8.0);
    ///
    /// assert_eq!(
    ///     glyph.points(),
    ///     &[Point::new(100.0, 50.0), Point::new(92.0, 42.0), Point::new(92.0, 58.0)]
    /// );
    /// ```
    pub fn new(style: RelationshipStyle, tip: Point, side: Side, size: f32) -> Self {
        let (nx, ny) = side.normal();
        let normal = Point::new(nx as f32, ny as f32);
        // Unit vector along the side, pointing right or down
        let tangent = Point::new(normal.y().abs(), normal.x().abs());

        let along = |distance: f32| tip.add_point(normal.scale(distance));
        let points = match style.shape() {
            GlyphShape::Triangle => {
                let base = along(size);
                vec![
                    tip,
                    base.sub_point(tangent.scale(size)),
                    base.add_point(tangent.scale(size)),
                ]
            }
            GlyphShape::Diamond => {
                let middle = along(size);
                vec![
                    tip,
                    middle.sub_point(tangent.scale(size / 2.0)),
                    along(2.0 * size),
                    middle.add_point(tangent.scale(size / 2.0)),
                ]
            }
        };

        Self {
            shape: style.shape(),
            fill: style.fill(),
            points,
        }
    }

    pub fn shape(&self) -> GlyphShape {
        self.shape
    }

    pub fn fill(&self) -> GlyphFill {
        self.fill
    }

    /// Polygon vertices, starting at the tip.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The vertex touching the destination box.
    pub fn tip(&self) -> Point {
        self.points[0]
    }
}

fn heading(from: Point, to: Point) -> (i8, i8) {
    let sign = |delta: f32| {
        if delta > 0.0 {
            1
        } else if delta < 0.0 {
            -1
        } else {
            0
        }
    };
    (sign(to.x() - from.x()), sign(to.y() - from.y()))
}

/// Drops repeated points and points that continue straight on, keeping the
/// ends and every corner.
pub fn corner_points(points: &[Point]) -> Vec<Point> {
    let mut corners: Vec<Point> = Vec::with_capacity(points.len().min(8));
    for point in points {
        if corners.last() == Some(point) {
            continue;
        }
        let straight = match corners.as_slice() {
            [.., before, last] => heading(*before, *last) == heading(*last, *point),
            _ => false,
        };
        if straight {
            corners.pop();
        }
        corners.push(*point);
    }
    corners
}

/// Builds the drawn connector for `route`.
///
/// The connector starts on the source box edge, follows the route's corners
/// and ends at the destination edge, pulled back by one unit so the glyph
/// covers the line end. A direct route is a single segment.
pub fn connector_points(route: &Route) -> Vec<Point> {
    let mut points = vec![route.source().edge()];
    if !route.is_direct() {
        points.extend(route.points().iter().copied().map(Point::from));
    }
    points.push(route.destination().edge());

    let mut points = corner_points(&points);
    if let [.., previous, last] = points.as_mut_slice() {
        *last = last.step_toward(*previous, END_TRIM);
    }
    points
}
