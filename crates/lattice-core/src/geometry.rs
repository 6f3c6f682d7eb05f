//! Geometric primitives for class box layout and connector routing.
//!
//! This module provides the geometric types used throughout Lattice for
//! sizing and placing class boxes and for describing routed connectors.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - An axis-aligned rectangle anchored at its top-left corner
//! - [`GridPoint`] - An integer cell coordinate on the occupancy grid
//!
//! # Coordinate System
//!
//! Lattice uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! One grid cell corresponds to one diagram unit, so a [`GridPoint`] at
//! `(12, 40)` and a [`Point`] at `(12.0, 40.0)` denote the same location.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use lattice_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// ```
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Moves this point toward `target` by at most `amount` units.
    ///
    /// If `target` is closer than `amount`, `target` is returned.
    pub fn step_toward(self, target: Point, amount: f32) -> Self {
        let delta = target.sub_point(self);
        let length = delta.hypot();
        if length <= amount || length == 0.0 {
            return target;
        }
        self.add_point(delta.scale(amount / length))
    }
}

impl From<GridPoint> for Point {
    fn from(point: GridPoint) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Merges two sizes vertically by adding their heights and taking the maximum width
    pub fn merge_vertical(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// Class boxes own exactly one `Rect`. Only the origin changes after a box
/// is sized; collision resolution moves boxes with [`Rect::set_x`].
///
/// # Examples
///
/// ```
/// # use lattice_core::geometry::Rect;
/// let a = Rect::new(0.0, 0.0, 100.0, 50.0);
/// let b = Rect::new(50.0, 25.0, 100.0, 50.0);
/// let c = Rect::new(100.0, 0.0, 10.0, 10.0);
///
/// assert!(a.overlaps(&b));
/// // Touching edges are not an overlap
/// assert!(!a.overlaps(&c));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a top-left point and a size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x(), origin.y(), size.width(), size.height())
    }

    /// Returns the left edge
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the top edge
    pub fn y(self) -> f32 {
        self.y
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the right edge (`x + width`)
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge (`y + height`)
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center point of the rectangle
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Moves the left edge, keeping the size.
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Tests for an axis-aligned overlap with another rectangle.
    ///
    /// Rectangles whose edges merely touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.right() <= self.x
            || other.x >= self.right()
            || other.bottom() <= self.y
            || other.y >= self.bottom())
    }

    /// Returns a rectangle grown by `amount` on every side.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Returns true when the point lies inside or on the edge of this rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.x
            && point.x() <= self.right()
            && point.y() >= self.y
            && point.y() <= self.bottom()
    }
}

/// An integer cell coordinate on the occupancy grid.
///
/// Grid points may be negative; such points lie outside every grid and are
/// treated as unreachable by the router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance between two grid points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lattice_core::geometry::GridPoint;
    /// let a = GridPoint::new(1, 1);
    /// let b = GridPoint::new(4, -3);
    /// assert_eq!(a.manhattan(b), 7);
    /// ```
    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance between two grid points.
    pub fn euclidean(self, other: GridPoint) -> f32 {
        Point::from(self).distance(Point::from(other))
    }

    /// Returns the point offset by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
