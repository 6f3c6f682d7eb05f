//! A* search for orthogonal connector paths.
//!
//! The search runs over states of `(cell, incoming direction)` so that turns
//! can be priced: every step costs one, and a step that changes direction
//! costs `turn_penalty` more. The heuristic is the Manhattan distance to the
//! goal, which never overestimates, so the first time the goal is popped its
//! cost is minimal.
//!
//! Frontier ties are broken by `(f, g, insertion sequence)`, lowest first,
//! which keeps results deterministic.
//!
//! The best known cost of each state is kept in a sparse map and recorded
//! when the state is pushed, so a state is only queued again when a strictly
//! cheaper way to reach it turns up. Queued entries that have since been
//! beaten are skipped when popped.

use std::{cmp::Ordering, collections::BinaryHeap};

use log::trace;
use rustc_hash::FxHashMap;

use lattice_core::geometry::GridPoint;

use super::grid::OccupancyGrid;

/// Direction of the move that entered a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The start cell, not entered by a move
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> (i32, i32) {
        match self {
            Self::None => (0, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A path found by [`PathFinder`] and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    points: Vec<GridPoint>,
    cost: u32,
    expanded: usize,
}

impl FoundPath {
    /// Grid points from start to goal; consecutive points are 4-adjacent.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Steps plus turn penalties.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of states expanded before the goal was popped.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }
}

/// Recomputes the cost of `points` from scratch: one per step plus
/// `turn_penalty` per change of direction.
pub fn path_cost(points: &[GridPoint], turn_penalty: u32) -> u32 {
    let steps = points.len().saturating_sub(1) as u32;
    let turns = points
        .windows(3)
        .filter(|w| (w[1].x - w[0].x, w[1].y - w[0].y) != (w[2].x - w[1].x, w[2].y - w[1].y))
        .count() as u32;
    steps + turns * turn_penalty
}

#[derive(Debug)]
struct SearchNode {
    point: GridPoint,
    parent: Option<usize>,
}

#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    sequence: u64,
    node: usize,
    direction: Direction,
}

impl Ord for FrontierEntry {
    // Reversed so BinaryHeap pops the lowest (f, g, sequence)
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Turn-penalized A* over an [`OccupancyGrid`].
///
/// # Examples
///
/// ```
/// # use lattice::layout::{OccupancyGrid, PathFinder};
/// # use lattice_core::geometry::{GridPoint, Rect};
/// let grid = OccupancyGrid::build(&[Rect::new(10.0, 0.0, 5.0, 5.0)], 10.0, 0);
/// let finder = PathFinder::new(&grid, 5);
///
/// let path = finder.find(GridPoint::new(5, 10), GridPoint::new(20, 10)).unwrap();
/// assert_eq!(path.cost(), 15);
/// assert_eq!(path.points().len(), 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    grid: &'g OccupancyGrid,
    turn_penalty: u32,
}

impl<'g> PathFinder<'g> {
    pub fn new(grid: &'g OccupancyGrid, turn_penalty: u32) -> Self {
        Self { grid, turn_penalty }
    }

    pub fn turn_penalty(&self) -> u32 {
        self.turn_penalty
    }

    /// Finds a cheapest path from `start` to `goal`.
    ///
    /// The start must be a free cell. The goal may be occupied; it is always
    /// enterable. Returns `None` if either end lies outside the grid, the
    /// start is occupied, or the goal cannot be reached.
    pub fn find(&self, start: GridPoint, goal: GridPoint) -> Option<FoundPath> {
        if !self.grid.is_free(start) || !self.grid.contains(goal) {
            return None;
        }

        let mut best_cost: FxHashMap<(GridPoint, Direction), u32> = FxHashMap::default();
        let mut nodes = vec![SearchNode {
            point: start,
            parent: None,
        }];
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0_u64;
        let mut expanded = 0_usize;

        best_cost.insert((start, Direction::None), 0);
        frontier.push(FrontierEntry {
            f: start.manhattan(goal),
            g: 0,
            sequence,
            node: 0,
            direction: Direction::None,
        });

        while let Some(FrontierEntry {
            g, node, direction, ..
        }) = frontier.pop()
        {
            let point = nodes[node].point;
            if best_cost
                .get(&(point, direction))
                .is_some_and(|&best| best < g)
            {
                continue;
            }
            expanded += 1;

            if point == goal {
                let points = Self::reconstruct(&nodes, node);
                trace!(
                    cost = g,
                    length = points.len(),
                    expanded = expanded;
                    "Path found"
                );
                return Some(FoundPath {
                    points,
                    cost: g,
                    expanded,
                });
            }

            for next_direction in Direction::MOVES {
                let (dx, dy) = next_direction.delta();
                let next = point.offset(dx, dy);
                if !self.grid.contains(next) || (next != goal && !self.grid.is_free(next)) {
                    continue;
                }

                let turned = direction != Direction::None && direction != next_direction;
                let next_g = g + 1 + if turned { self.turn_penalty } else { 0 };
                let known = best_cost.entry((next, next_direction)).or_insert(u32::MAX);
                if *known <= next_g {
                    continue;
                }
                *known = next_g;

                nodes.push(SearchNode {
                    point: next,
                    parent: Some(node),
                });
                sequence += 1;
                frontier.push(FrontierEntry {
                    f: next_g + next.manhattan(goal),
                    g: next_g,
                    sequence,
                    node: nodes.len() - 1,
                    direction: next_direction,
                });
            }
        }

        trace!(start:? = start, goal:? = goal, expanded = expanded; "Frontier exhausted");
        None
    }

    fn reconstruct(nodes: &[SearchNode], last: usize) -> Vec<GridPoint> {
        let mut points = Vec::new();
        let mut current = Some(last);
        while let Some(index) = current {
            points.push(nodes[index].point);
            current = nodes[index].parent;
        }
        points.reverse();
        points
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use lattice_core::geometry::Rect;

    use super::*;

    fn obstacle_strategy() -> impl Strategy<Value = Vec<Rect>> {
        prop::collection::vec(
            (0.0f32..40.0, 0.0f32..40.0, 1.0f32..10.0, 1.0f32..10.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h)),
            0..5,
        )
    }

    proptest! {
        #[test]
        fn found_paths_are_valid(
            obstacles in obstacle_strategy(),
            start in (0i32..60, 0i32..60),
            goal in (0i32..60, 0i32..60),
            turn_penalty in 0u32..10,
        ) {
            let grid = OccupancyGrid::build(&obstacles, 20.0, 0);
            let start = GridPoint::new(start.0, start.1);
            let goal = GridPoint::new(goal.0, goal.1);

            if let Some(path) = PathFinder::new(&grid, turn_penalty).find(start, goal) {
                let points = path.points();
                prop_assert_eq!(points.first(), Some(&start));
                prop_assert_eq!(points.last(), Some(&goal));

                for pair in points.windows(2) {
                    prop_assert_eq!(pair[0].manhattan(pair[1]), 1);
                }
                for point in &points[..points.len() - 1] {
                    prop_assert!(grid.is_free(*point));
                }

                prop_assert_eq!(path_cost(points, turn_penalty), path.cost());
                prop_assert!(path.cost() >= start.manhattan(goal));
            }
        }

        #[test]
        fn open_grid_always_routes(
            start in (0i32..30, 0i32..30),
            goal in (0i32..30, 0i32..30),
        ) {
            let grid = OccupancyGrid::build(&[], 30.0, 0);
            let start = GridPoint::new(start.0, start.1);
            let goal = GridPoint::new(goal.0, goal.1);

            let path = PathFinder::new(&grid, 5).find(start, goal);
            prop_assert!(path.is_some());
            let path = path.unwrap();
            let turns = u32::from(start.x != goal.x && start.y != goal.y);
            prop_assert_eq!(path.cost(), start.manhattan(goal) + 5 * turns);
        }
    }
}
