//! Read-only world view passed to every policy call.

use gp_core::Tick;
use gp_grid::{Grid, Pathfinder};

/// What a policy may read during one tick.
///
/// Built by the simulation for each policy call.  The grid borrow ends before
/// the simulation applies the resulting move, so food pickup never overlaps a
/// live context.
pub struct TickContext<'a> {
    /// Tick being processed.
    pub tick: Tick,

    /// The map, including the current food set.
    pub grid: &'a Grid,

    /// Shortest-path search used for planning.
    pub pathfinder: &'a dyn Pathfinder,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, grid: &'a Grid, pathfinder: &'a dyn Pathfinder) -> Self {
        Self { tick, grid, pathfinder }
    }
}
