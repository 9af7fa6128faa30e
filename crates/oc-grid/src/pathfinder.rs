//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! The movement engine calls routing via the [`Pathfinder`] trait, so a run
//! can swap in a different search (jump-point search, flow fields) without
//! touching the agent state machine.  The default [`AStarPathfinder`] is
//! sufficient for office-sized plans.
//!
//! # Cost units
//!
//! Step costs are integers: 10 for an orthogonal step, 14 for a diagonal
//! one (≈ 10·√2).  Integer costs keep the search exact and its tie-breaking
//! reproducible across platforms.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use oc_core::Cell;

use crate::TraversalMap;
use crate::matrix::NEIGHBOR_OFFSETS;

const STRAIGHT_COST: u32 = 10;
const DIAGONAL_COST: u32 = 14;

/// Cells to walk through, in order, **excluding** the start cell and ending
/// at the goal.  `path[0]` is the next step.  Empty means "no route".
pub type Path = Vec<Cell>;

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable route search over a [`TraversalMap`].
///
/// Implementations must treat a cell as walkable iff its value is `> 0`, must
/// return an empty path instead of failing, and must be deterministic: equal
/// inputs give equal paths.
pub trait Pathfinder: Send + Sync {
    /// Route from `start` to `goal` with 8-directional moves.
    ///
    /// The start cell's own value is not checked (the mover usually stands
    /// on it).  Returns an empty path when `start == goal`, when the goal is
    /// not walkable (wall or occupied), or when the goal cannot be reached.
    fn find_path(&self, map: &TraversalMap, start: Cell, goal: Cell) -> Path;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// A* with diagonal moves (corner cutting allowed) and the octile heuristic.
///
/// The open set is ordered by `(f, h, cell index)`, so among equally good
/// candidates the one closer to the goal, then the one earlier in row-major
/// order, is expanded first.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn find_path(&self, map: &TraversalMap, start: Cell, goal: Cell) -> Path {
        astar(map, start, goal)
    }
}

/// Exact cost of the cheapest unobstructed 8-directional route.
#[inline]
fn octile(a: Cell, b: Cell) -> u32 {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    let (short, long) = if dr < dc { (dr, dc) } else { (dc, dr) };
    DIAGONAL_COST * short + STRAIGHT_COST * (long - short)
}

fn astar(map: &TraversalMap, start: Cell, goal: Cell) -> Path {
    if start == goal || !map.is_traversable(goal) {
        return Path::new();
    }
    let (Some(start_idx), Some(goal_idx)) = (map.index(start), map.index(goal)) else {
        return Path::new();
    };

    let n = map.len();
    // g[v] = best known cost to reach v.
    let mut g = vec![u32::MAX; n];
    // came_from[v] = predecessor index on the best known route; usize::MAX = none.
    let mut came_from = vec![usize::MAX; n];
    let mut closed = vec![false; n];

    // Reverse turns the max-heap into a min-heap.
    let mut open: BinaryHeap<Reverse<(u32, u32, usize)>> = BinaryHeap::new();
    let h0 = octile(start, goal);
    g[start_idx] = 0;
    open.push(Reverse((h0, h0, start_idx)));

    while let Some(Reverse((_, _, idx))) = open.pop() {
        if closed[idx] {
            continue;
        }
        if idx == goal_idx {
            return reconstruct(map, &came_from, start_idx, goal_idx);
        }
        closed[idx] = true;

        let cell = map.cell_at(idx);
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let Some(next) = cell.offset(dr, dc) else { continue };
            let Some(next_idx) = map.index(next) else { continue };
            if closed[next_idx] || !map.is_traversable(next) {
                continue;
            }
            let step = if dr != 0 && dc != 0 { DIAGONAL_COST } else { STRAIGHT_COST };
            let tentative = g[idx].saturating_add(step);
            if tentative < g[next_idx] {
                g[next_idx] = tentative;
                came_from[next_idx] = idx;
                let h = octile(next, goal);
                open.push(Reverse((tentative + h, h, next_idx)));
            }
        }
    }

    Path::new()
}

fn reconstruct(map: &TraversalMap, came_from: &[usize], start_idx: usize, goal_idx: usize) -> Path {
    let mut path = Vec::new();
    let mut cur = goal_idx;
    while cur != start_idx {
        path.push(map.cell_at(cur));
        cur = came_from[cur];
    }
    path.reverse();
    path
}
