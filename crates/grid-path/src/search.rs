//! Shortest-path search over a [`CostGrid`].
//!
//! The search is Dijkstra's algorithm over 8-directional adjacency. The
//! weight of a step is the destination cell's cost multiplied by the
//! cardinal or diagonal factor, so the grid shapes routes while the factors
//! shape the geometry (with the default 2/3 split, a diagonal costs 1.5x a
//! cardinal step: cheaper than two cardinal steps, dearer than one).
//!
//! # Determinism
//!
//! Equal-cost alternatives always resolve the same way:
//! - neighbors are enumerated clockwise starting north:
//!   N, NE, E, SE, S, SW, W, NW;
//! - a route found earlier is never displaced by an equal-cost one
//!   (relaxation requires strict improvement);
//! - heap ties pop in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{Cell, CostGrid};

/// Neighbor offsets, clockwise from north. The order is part of the crate's
/// determinism contract.
const NEIGHBORS: [(i32, i32); 8] = [
    (0, 1),   // N
    (1, 1),   // NE
    (1, 0),   // E
    (1, -1),  // SE
    (0, -1),  // S
    (-1, -1), // SW
    (-1, 0),  // W
    (-1, 1),  // NW
];

#[derive(Debug)]
struct OpenNode {
    dist: u32,
    seq: u32,
    cell: Cell,
}

impl OpenNode {
    fn key(&self) -> (u32, u32) {
        (self.dist, self.seq)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Shortest-path search rooted at a start cell.
///
/// Borrows the grid for the duration of a query; build one, call
/// [`Pathfinder::path_to`], and drop it. The step factors default to 2
/// (cardinal) and 3 (diagonal).
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder<'a> {
    grid: &'a CostGrid,
    cardinal: u32,
    diagonal: u32,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a CostGrid) -> Self {
        Self {
            grid,
            cardinal: 2,
            diagonal: 3,
        }
    }

    /// Overrides the relative weight of cardinal and diagonal steps.
    pub fn with_factors(grid: &'a CostGrid, cardinal: u32, diagonal: u32) -> Self {
        Self {
            grid,
            cardinal,
            diagonal,
        }
    }

    /// Computes the cheapest route from `start` to `goal`.
    ///
    /// The returned route excludes `start` (the caller already occupies it)
    /// and ends with `goal`. It is empty when `start == goal`, when `goal`
    /// is blocked or out of bounds, or when no route exists; an empty route
    /// is an ordinary result, not an error.
    ///
    /// The start cell's own cost is never charged and may be 0: whatever is
    /// standing on a cell must still be able to leave it.
    pub fn path_to(&self, start: Cell, goal: Cell) -> Vec<Cell> {
        if start == goal || self.grid.is_blocked(goal) {
            return Vec::new();
        }
        let Some(start_idx) = self.grid.index(start) else {
            return Vec::new();
        };
        // goal passed the blocked check, so it must be in bounds
        let Some(goal_idx) = self.grid.index(goal) else {
            return Vec::new();
        };

        let mut dist = vec![u32::MAX; self.grid.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.grid.len()];
        let mut heap = BinaryHeap::new();
        let mut seq = 0u32;

        dist[start_idx] = 0;
        heap.push(OpenNode {
            dist: 0,
            seq,
            cell: start,
        });

        while let Some(node) = heap.pop() {
            let Some(idx) = self.grid.index(node.cell) else {
                continue;
            };
            if node.dist > dist[idx] {
                continue; // stale entry, already settled cheaper
            }
            if idx == goal_idx {
                break;
            }

            for (dx, dy) in NEIGHBORS {
                let next = Cell::new(node.cell.x + dx, node.cell.y + dy);
                let Some(next_idx) = self.grid.index(next) else {
                    continue;
                };
                let cost = self.grid.cost(next);
                if cost == 0 {
                    continue;
                }
                let factor = if dx != 0 && dy != 0 {
                    self.diagonal
                } else {
                    self.cardinal
                };
                let candidate = node.dist.saturating_add(cost.saturating_mul(factor));
                if candidate < dist[next_idx] {
                    dist[next_idx] = candidate;
                    prev[next_idx] = Some(idx);
                    seq += 1;
                    heap.push(OpenNode {
                        dist: candidate,
                        seq,
                        cell: next,
                    });
                }
            }
        }

        if dist[goal_idx] == u32::MAX {
            return Vec::new();
        }

        let mut route = Vec::new();
        let mut current = goal_idx;
        while current != start_idx {
            route.push(self.grid.cell_at(current));
            let Some(parent) = prev[current] else {
                return Vec::new();
            };
            current = parent;
        }
        route.reverse();
        route
    }
}
