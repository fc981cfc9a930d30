//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! Seekers plan through the [`Pathfinder`] trait, so the simulation can be
//! run with another search (BFS for cross-checking, a cached planner) without
//! touching the policies.
//!
//! # Paths
//!
//! A path is the full cell sequence from start to goal, **inclusive of both
//! ends**.  `[start]` means start == goal.  `None` means no path: either
//! endpoint is a wall or out of bounds, or the goal lies in another
//! connected component.  An unreachable goal is a normal outcome, not an
//! error.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gp_core::Cell;

use crate::Grid;

/// Sentinel for "no predecessor" in the `came_from` array.
const NO_PARENT: u32 = u32::MAX;

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path search over a [`Grid`].
pub trait Pathfinder: Send + Sync {
    /// Compute a path from `start` to `goal`, inclusive of both.
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Cell>>;

    /// Number of moves on the shortest path, or `None` if unreachable.
    fn distance(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<usize> {
        self.find_path(grid, start, goal).map(|p| p.len() - 1)
    }
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// A* over the 4-connected grid with unit step cost and the Manhattan
/// heuristic, which is admissible and consistent here, so the first time the
/// goal is popped its path is shortest.
///
/// Ties on `f = g + h` are broken by insertion order, making the returned
/// path deterministic for a fixed grid.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn find_path(&self, grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        astar(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    if !grid.is_valid(start) || !grid.is_valid(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let n = grid.cell_count();
    let start_idx = grid.index_of(start)?;

    // g_score[v] = best known step count from start to v.
    let mut g_score   = vec![u32::MAX; n];
    let mut came_from = vec![NO_PARENT; n];
    let mut closed    = vec![false; n];

    // Min-heap on (f, insertion seq, cell index).  Reverse turns the max-heap
    // into a min-heap; seq makes equal-f ordering FIFO and deterministic.
    let mut open: BinaryHeap<Reverse<(u32, u64, u32)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    g_score[start_idx] = 0;
    open.push(Reverse((start.manhattan(goal), seq, start_idx as u32)));

    while let Some(Reverse((_, _, idx))) = open.pop() {
        let idx = idx as usize;
        if closed[idx] {
            continue;
        }
        closed[idx] = true;

        let current = grid.cell_at(idx);
        if current == goal {
            return Some(reconstruct(grid, &came_from, idx));
        }

        let tentative = g_score[idx] + 1;
        for next in grid.neighbors(current) {
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if tentative < g_score[next_idx] {
                g_score[next_idx] = tentative;
                came_from[next_idx] = idx as u32;
                seq += 1;
                open.push(Reverse((tentative + next.manhattan(goal), seq, next_idx as u32)));
            }
        }
    }

    None
}

fn reconstruct(grid: &Grid, came_from: &[u32], goal_idx: usize) -> Vec<Cell> {
    let mut path = vec![grid.cell_at(goal_idx)];
    let mut cur = goal_idx;
    while came_from[cur] != NO_PARENT {
        cur = came_from[cur] as usize;
        path.push(grid.cell_at(cur));
    }
    path.reverse();
    path
}
