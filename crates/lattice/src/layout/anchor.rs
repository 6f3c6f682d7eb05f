//! Connection points on the sides of a class box.

use std::fmt;

use lattice_core::geometry::{GridPoint, Point, Rect};

/// A side of a class box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// All sides, in the order anchor pairs are tried.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    /// Unit vector pointing away from the box.
    pub fn normal(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The connection point at the midpoint of one side of a box.
///
/// `edge` lies on the box outline and is where connectors start and glyph
/// tips sit. `port` is the grid cell the router uses: the edge point pushed
/// outward past the box's keep-out buffer, so it is not occupied by its own
/// box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    side: Side,
    edge: Point,
    port: GridPoint,
}

impl Anchor {
    /// Computes the anchor on `side` of `rect`, with the port `clearance`
    /// cells beyond the rounded-out edge.
    pub fn new(rect: Rect, side: Side, clearance: u32) -> Self {
        let clearance = clearance as i32;
        let center = rect.center();

        let (edge, port) = match side {
            Side::Left | Side::Right => {
                let y = center.y().round();
                let (x, port_x) = if side == Side::Left {
                    (rect.x(), rect.x().floor() as i32 - clearance)
                } else {
                    (rect.right(), rect.right().ceil() as i32 + clearance)
                };
                (Point::new(x, y), GridPoint::new(port_x, y as i32))
            }
            Side::Top | Side::Bottom => {
                let x = center.x().round();
                let (y, port_y) = if side == Side::Top {
                    (rect.y(), rect.y().floor() as i32 - clearance)
                } else {
                    (rect.bottom(), rect.bottom().ceil() as i32 + clearance)
                };
                (Point::new(x, y), GridPoint::new(x as i32, port_y))
            }
        };

        Self { side, edge, port }
    }

    /// The four anchors of `rect`, in [`Side::ALL`] order.
    pub fn all(rect: Rect, clearance: u32) -> [Anchor; 4] {
        Side::ALL.map(|side| Self::new(rect, side, clearance))
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Point on the box outline.
    pub fn edge(&self) -> Point {
        self.edge
    }

    /// Routing cell outside the box.
    pub fn port(&self) -> GridPoint {
        self.port
    }
}
