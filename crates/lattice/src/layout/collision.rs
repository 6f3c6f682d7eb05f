//! Pairwise collision resolution between class boxes.
//!
//! Boxes are visited in ascending `x` order. Whenever a later box overlaps an
//! earlier one it is pushed right of it, leaving `padding` between them. Only
//! the horizontal position changes, so a moved box keeps its size and only
//! its rows are re-placed.
//!
//! The pass is bounded and makes no global overlap-free promise. Extra sweeps
//! can be requested; each re-sorts the boxes by their current position and
//! the loop stops early once a sweep moves nothing.

use log::debug;

use super::class_box::ClassBox;

/// Moves overlapping boxes apart horizontally.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver {
    padding: f32,
    sweeps: usize,
}

impl CollisionResolver {
    /// Creates a single-sweep resolver.
    pub fn new(padding: f32) -> Self {
        Self { padding, sweeps: 1 }
    }

    /// Sets the maximum number of sweeps.
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Resolves overlaps in place and returns the number of moves made.
    pub fn resolve(&self, boxes: &mut [ClassBox]) -> usize {
        let mut total_moves = 0;

        for sweep in 0..self.sweeps {
            let moves = self.sweep(boxes);
            total_moves += moves;
            debug!(sweep = sweep, moves = moves; "Collision sweep finished");

            if moves == 0 {
                break;
            }
        }

        total_moves
    }

    fn sweep(&self, boxes: &mut [ClassBox]) -> usize {
        let mut order: Vec<usize> = (0..boxes.len()).collect();
        // Stable, so boxes sharing an x keep their input order
        order.sort_by(|a, b| boxes[*a].rect().x().total_cmp(&boxes[*b].rect().x()));

        let mut moves = 0;
        for (position, &i) in order.iter().enumerate() {
            for &j in &order[position + 1..] {
                let anchor = boxes[i].rect();
                if !anchor.overlaps(&boxes[j].rect()) {
                    continue;
                }

                let x = anchor.right() + self.padding;
                debug!(
                    moved = boxes[j].name(),
                    blocker = boxes[i].name(),
                    from = boxes[j].rect().x(),
                    to = x;
                    "Resolving box collision"
                );
                boxes[j].set_x(x);
                moves += 1;
            }
        }

        moves
    }
}
