//! Rasterized free/occupied map of the canvas.
//!
//! The grid has one cell per canvas unit. Every cell covered by a class box,
//! grown by a keep-out buffer on each side, is occupied; connectors are only
//! routed through free cells.

use log::trace;

use lattice_core::geometry::{GridPoint, Rect, Size};

/// An immutable occupancy grid built from the final box rectangles.
///
/// # Examples
///
/// ```
/// # use lattice::layout::OccupancyGrid;
/// # use lattice_core::geometry::{GridPoint, Rect};
/// let grid = OccupancyGrid::build(&[Rect::new(10.0, 10.0, 20.0, 10.0)], 20.0, 2);
///
/// assert_eq!((grid.width(), grid.height()), (50, 40));
/// assert!(!grid.is_free(GridPoint::new(8, 8)));
/// assert!(grid.is_free(GridPoint::new(7, 8)));
/// assert!(!grid.is_free(GridPoint::new(-1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Rasterizes `rects` onto a grid that extends `border_padding` past the
    /// rightmost and lowest rectangle edges.
    pub fn build(rects: &[Rect], border_padding: f32, buffer: u32) -> Self {
        let bounds = Self::canvas_size(rects, border_padding);
        let width = bounds.width() as usize;
        let height = bounds.height() as usize;

        let mut grid = Self {
            width,
            height,
            cells: vec![false; width * height],
        };

        let buffer = buffer as f32;
        for rect in rects {
            grid.occupy(rect.expand(buffer));
        }

        trace!(
            width = width,
            height = height,
            occupied = grid.cells.iter().filter(|cell| **cell).count();
            "Occupancy grid built"
        );

        grid
    }

    /// Canvas bounds for `rects`: the furthest right and bottom edges plus
    /// `border_padding`, rounded up to whole cells.
    pub fn canvas_size(rects: &[Rect], border_padding: f32) -> Size {
        let right = rects.iter().map(|rect| rect.right()).fold(0.0_f32, f32::max);
        let bottom = rects.iter().map(|rect| rect.bottom()).fold(0.0_f32, f32::max);
        Size::new(
            (right + border_padding).max(0.0).ceil(),
            (bottom + border_padding).max(0.0).ceil(),
        )
    }

    fn occupy(&mut self, area: Rect) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        let x0 = area.x().floor().clamp(0.0, max_x) as usize;
        let x1 = area.right().ceil().clamp(0.0, max_x) as usize;
        let y0 = area.y().floor().clamp(0.0, max_y) as usize;
        let y1 = area.bottom().ceil().clamp(0.0, max_y) as usize;

        for y in y0..=y1 {
            let row = y * self.width;
            self.cells[row + x0..=row + x1].fill(true);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Canvas size covered by the grid.
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Returns true if `point` lies on the grid.
    pub fn contains(&self, point: GridPoint) -> bool {
        self.index(point).is_some()
    }

    /// Returns true if `point` lies on the grid and is not occupied.
    pub fn is_free(&self, point: GridPoint) -> bool {
        self.index(point).is_some_and(|index| !self.cells[index])
    }

    /// Row-major cell index of `point`, or `None` outside the grid.
    pub fn index(&self, point: GridPoint) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_canvas_size_rounds_up() {
        let size = OccupancyGrid::canvas_size(&[Rect::new(0.0, 0.0, 29.3, 25.1)], 20.0);
        assert_approx_eq!(f32, size.width(), 50.0);
        assert_approx_eq!(f32, size.height(), 46.0);
    }

    #[test]
    fn test_empty_canvas() {
        let grid = OccupancyGrid::build(&[], 20.0, 2);
        assert_eq!((grid.width(), grid.height()), (20, 20));
        assert!(grid.is_free(GridPoint::new(0, 0)));
    }

    #[test]
    fn test_buffer_is_occupied() {
        let grid = OccupancyGrid::build(&[Rect::new(10.0, 10.0, 10.0, 10.0)], 20.0, 3);

        // Box spans 10..=20, buffer extends that to 7..=23
        for x in 7..=23 {
            assert!(!grid.is_free(GridPoint::new(x, 15)), "x = {x}");
        }
        assert!(grid.is_free(GridPoint::new(6, 15)));
        assert!(grid.is_free(GridPoint::new(24, 15)));
        assert!(!grid.is_free(GridPoint::new(15, 7)));
        assert!(grid.is_free(GridPoint::new(15, 6)));
    }

    #[test]
    fn test_buffer_is_clamped_to_grid() {
        let grid = OccupancyGrid::build(&[Rect::new(0.0, 0.0, 5.0, 5.0)], 2.0, 4);
        assert_eq!((grid.width(), grid.height()), (7, 7));
        assert!(!grid.is_free(GridPoint::new(0, 0)));
        assert!(!grid.is_free(GridPoint::new(6, 6)));
    }

    #[test]
    fn test_out_of_bounds_is_not_free() {
        let grid = OccupancyGrid::build(&[], 10.0, 0);
        assert!(!grid.contains(GridPoint::new(10, 0)));
        assert!(!grid.is_free(GridPoint::new(0, -1)));
        assert!(grid.contains(GridPoint::new(9, 9)));
    }

    #[test]
    fn test_fractional_edges_round_outward() {
        let grid = OccupancyGrid::build(&[Rect::new(10.5, 10.5, 4.2, 4.2)], 10.0, 0);
        assert!(!grid.is_free(GridPoint::new(10, 10)));
        assert!(!grid.is_free(GridPoint::new(15, 15)));
        assert!(grid.is_free(GridPoint::new(16, 12)));
        assert!(grid.is_free(GridPoint::new(9, 12)));
    }
}
