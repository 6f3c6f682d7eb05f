//! Anchor pair selection for relationship connectors.
//!
//! Every combination of source and destination anchor is a candidate. Among
//! the successful paths the one with the fewest turns wins; ties go to the
//! shortest straight-line distance between its endpoints, then to the pair
//! listed first. When nothing routes, the closest anchor pair is joined by a
//! direct line.
//!
//! A pair's span is known before searching and its turn count is at least one
//! unless the ports share a row or column. Pairs are searched in order of
//! that lower bound, and a pair that cannot beat the current choice is never
//! searched. The result is the same as searching every pair.

use std::cmp::Ordering;

use log::{debug, trace};

use lattice_core::geometry::GridPoint;

use super::{
    anchor::Anchor,
    path_finder::{FoundPath, PathFinder},
};

/// The connector path chosen for one relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<GridPoint>,
    source: Anchor,
    destination: Anchor,
    turns: usize,
    cost: Option<u32>,
    searches: usize,
}

impl Route {
    /// Grid points from the source port to the destination port.
    ///
    /// A direct route holds just the two ports.
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn source(&self) -> &Anchor {
        &self.source
    }

    pub fn destination(&self) -> &Anchor {
        &self.destination
    }

    /// Number of direction changes along the path.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Path cost, or `None` for a direct route.
    pub fn cost(&self) -> Option<u32> {
        self.cost
    }

    /// True when no anchor pair could be routed and the ports are joined by a
    /// straight line.
    pub fn is_direct(&self) -> bool {
        self.cost.is_none()
    }

    /// Number of anchor pairs the path finder ran on before this route was
    /// chosen.
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// Euclidean distance between the first and last point.
    pub fn span(&self) -> f32 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.euclidean(*last),
            _ => 0.0,
        }
    }
}

/// Counts changes of the dominant movement axis along `points`.
pub fn count_turns(points: &[GridPoint]) -> usize {
    fn horizontal(from: GridPoint, to: GridPoint) -> bool {
        from.x.abs_diff(to.x) >= from.y.abs_diff(to.y)
    }

    points
        .windows(3)
        .filter(|w| horizontal(w[0], w[1]) != horizontal(w[1], w[2]))
        .count()
}

/// Picks the best route between two boxes' anchors.
#[derive(Debug, Clone, Copy)]
pub struct RouteSelector<'g> {
    finder: PathFinder<'g>,
}

impl<'g> RouteSelector<'g> {
    pub fn new(finder: PathFinder<'g>) -> Self {
        Self { finder }
    }

    /// Returns the best route over every source/destination anchor pair.
    ///
    /// Pairs whose ports coincide are skipped, so a relationship from a box
    /// to itself leaves through one side and enters through another.
    pub fn select(&self, sources: &[Anchor], destinations: &[Anchor]) -> Option<Route> {
        let mut candidates = Vec::with_capacity(sources.len() * destinations.len());
        for source in sources {
            for destination in destinations {
                if source.port() != destination.port() {
                    candidates.push(Candidate::new(candidates.len(), *source, *destination));
                }
            }
        }
        candidates.sort_by(|a, b| a.rank(a.min_turns).cmp(&b.rank(b.min_turns)));

        let mut best: Option<(Rank, Route)> = None;
        let mut searches = 0;

        for candidate in &candidates {
            let bound = candidate.rank(candidate.min_turns);
            if best.as_ref().is_some_and(|(best_rank, _)| bound > *best_rank) {
                continue;
            }

            searches += 1;
            let source = candidate.source;
            let destination = candidate.destination;
            let Some(path) = self.finder.find(source.port(), destination.port()) else {
                trace!(
                    source = source.side().name(),
                    destination = destination.side().name();
                    "Anchor pair not routable"
                );
                continue;
            };

            let route = Self::routed(path, source, destination);
            let rank = candidate.rank(route.turns);
            if best.as_ref().is_none_or(|(best_rank, _)| rank < *best_rank) {
                best = Some((rank, route));
            }
        }

        if let Some((_, mut route)) = best {
            route.searches = searches;
            debug!(
                source = route.source.side().name(),
                destination = route.destination.side().name(),
                turns = route.turns,
                cost:? = route.cost,
                searches = searches;
                "Route selected"
            );
            return Some(route);
        }

        let mut fallback = Self::direct(sources, destinations)?;
        fallback.searches = searches;
        debug!(
            source = fallback.source.side().name(),
            destination = fallback.destination.side().name();
            "No anchor pair routable, using direct line"
        );
        Some(fallback)
    }

    fn routed(path: FoundPath, source: Anchor, destination: Anchor) -> Route {
        let cost = path.cost();
        let points = path.into_points();
        Route {
            turns: count_turns(&points),
            points,
            source,
            destination,
            cost: Some(cost),
            searches: 0,
        }
    }

    fn direct(sources: &[Anchor], destinations: &[Anchor]) -> Option<Route> {
        let mut closest: Option<(f32, Anchor, Anchor)> = None;
        for source in sources {
            for destination in destinations {
                if source.port() == destination.port() {
                    continue;
                }
                let distance = source.port().euclidean(destination.port());
                if closest.is_none_or(|(best, _, _)| distance < best) {
                    closest = Some((distance, *source, *destination));
                }
            }
        }

        closest.map(|(_, source, destination)| Route {
            points: vec![source.port(), destination.port()],
            source,
            destination,
            turns: 0,
            cost: None,
            searches: 0,
        })
    }
}

/// Selection key of a route: turns, then span, then listing order.
#[derive(Debug, Clone, Copy)]
struct Rank {
    turns: usize,
    span: f32,
    order: usize,
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.turns
            .cmp(&other.turns)
            .then_with(|| self.span.total_cmp(&other.span))
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An anchor pair that has not been searched yet.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    order: usize,
    source: Anchor,
    destination: Anchor,
    span: f32,
    min_turns: usize,
}

impl Candidate {
    fn new(order: usize, source: Anchor, destination: Anchor) -> Self {
        let (from, to) = (source.port(), destination.port());
        Self {
            order,
            source,
            destination,
            span: from.euclidean(to),
            min_turns: usize::from(from.x != to.x && from.y != to.y),
        }
    }

    fn rank(&self, turns: usize) -> Rank {
        Rank {
            turns,
            span: self.span,
            order: self.order,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use lattice_core::geometry::Rect;

    use super::*;
    use crate::layout::{OccupancyGrid, Side};

    /// Searches every pair in listing order and keeps the first best one.
    fn select_exhaustively(
        finder: PathFinder<'_>,
        sources: &[Anchor],
        destinations: &[Anchor],
    ) -> Option<(Side, Side, Vec<GridPoint>)> {
        let mut best: Option<(usize, f32, Side, Side, Vec<GridPoint>)> = None;
        for source in sources {
            for destination in destinations {
                if source.port() == destination.port() {
                    continue;
                }
                let Some(path) = finder.find(source.port(), destination.port()) else {
                    continue;
                };
                let turns = count_turns(path.points());
                let span = source.port().euclidean(destination.port());
                let better = best.as_ref().is_none_or(|(best_turns, best_span, ..)| {
                    turns < *best_turns || (turns == *best_turns && span < *best_span)
                });
                if better {
                    best = Some((
                        turns,
                        span,
                        source.side(),
                        destination.side(),
                        path.into_points(),
                    ));
                }
            }
        }
        best.map(|(_, _, source, destination, points)| (source, destination, points))
    }

    proptest! {
        #[test]
        fn skipping_pairs_matches_exhaustive_search(
            ax in 0.0f32..120.0,
            ay in 0.0f32..120.0,
            bx in 0.0f32..120.0,
            by in 0.0f32..120.0,
        ) {
            let a = Rect::new(ax, ay, 30.0, 20.0);
            let b = Rect::new(bx, by, 25.0, 35.0);
            let grid = OccupancyGrid::build(&[a, b], 20.0, 2);
            let finder = PathFinder::new(&grid, 5);
            let sources = Anchor::all(a, 3);
            let destinations = Anchor::all(b, 3);

            let route = RouteSelector::new(finder).select(&sources, &destinations);
            let expected = select_exhaustively(finder, &sources, &destinations);

            match (route, expected) {
                (Some(route), Some((source, destination, points))) => {
                    prop_assert!(!route.is_direct());
                    prop_assert_eq!(route.source().side(), source);
                    prop_assert_eq!(route.destination().side(), destination);
                    prop_assert_eq!(route.points(), points.as_slice());
                    prop_assert!(route.searches() <= 16);
                }
                (Some(route), None) => prop_assert!(route.is_direct()),
                (None, _) => prop_assert!(false, "distinct boxes always yield a route"),
            }
        }

        #[test]
        fn selected_route_is_minimal(
            ax in 0.0f32..120.0,
            ay in 0.0f32..120.0,
            bx in 0.0f32..120.0,
            by in 0.0f32..120.0,
        ) {
            let a = Rect::new(ax, ay, 30.0, 20.0);
            let b = Rect::new(bx, by, 25.0, 35.0);
            let grid = OccupancyGrid::build(&[a, b], 20.0, 2);
            let finder = PathFinder::new(&grid, 5);
            let sources = Anchor::all(a, 3);
            let destinations = Anchor::all(b, 3);

            let Some(route) = RouteSelector::new(finder).select(&sources, &destinations) else {
                return Err(TestCaseError::fail("distinct boxes always yield a route"));
            };
            if route.is_direct() {
                return Ok(());
            }

            for source in &sources {
                for destination in &destinations {
                    if source.port() == destination.port() {
                        continue;
                    }
                    if let Some(path) = finder.find(source.port(), destination.port()) {
                        let turns = count_turns(path.points());
                        prop_assert!(route.turns() <= turns);
                        if route.turns() == turns {
                            let span = source.port().euclidean(destination.port());
                            prop_assert!(route.span() <= span);
                        }
                    }
                }
            }
        }
    }
}
