//! Chaser memory and short-horizon motion prediction.
//!
//! A seeker never sees a chaser's policy, only where it was last tick and
//! where it is now.  The heading is the delta between those two sightings and
//! is kept while the chaser stands still.  Prediction extrapolates the
//! heading [`PREDICTION_STEPS`] cells ahead, turning at random when the next
//! step would hit a wall, the same way a random walker would.

use std::collections::BTreeMap;

use gp_core::{Cell, ChaserId, Delta, Direction, RandomSource};
use gp_grid::Grid;

/// How many cells ahead a chaser's path is extrapolated.
pub const PREDICTION_STEPS: usize = 3;

/// Per-seeker memory of chaser positions and headings, keyed by chaser id.
#[derive(Clone, Debug, Default)]
pub struct ThreatModel {
    last_seen: BTreeMap<ChaserId, Cell>,
    headings:  BTreeMap<ChaserId, Delta>,
}

impl ThreatModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's chaser positions, indexed by chaser id.
    pub fn observe(&mut self, positions: &[Cell]) {
        for (i, &pos) in positions.iter().enumerate() {
            let Ok(id) = ChaserId::try_from(i) else { continue };
            if let Some(prev) = self.last_seen.insert(id, pos) {
                if prev != pos {
                    self.headings.insert(id, prev.delta_to(pos));
                }
            }
        }
    }

    /// Number of chasers seen so far.
    #[inline]
    pub fn chaser_count(&self) -> usize {
        self.last_seen.len()
    }

    pub fn last_seen(&self, id: ChaserId) -> Option<Cell> {
        self.last_seen.get(&id).copied()
    }

    /// `None` until the chaser has been seen moving.
    pub fn heading(&self, id: ChaserId) -> Option<Delta> {
        self.headings.get(&id).copied()
    }

    /// Smallest Manhattan distance from `cell` to any known chaser.
    pub fn min_distance(&self, cell: Cell) -> Option<u32> {
        self.last_seen.values().map(|&c| c.manhattan(cell)).min()
    }

    /// Extrapolate a chaser standing at `from` with `heading`.
    ///
    /// The result excludes `from`.  When the next step is blocked a new
    /// direction is drawn from the legal moves at the current cell; the
    /// prediction stops early if there is none.
    pub fn predict_path<R: RandomSource>(
        grid:    &Grid,
        from:    Cell,
        heading: Delta,
        rng:     &mut R,
    ) -> Vec<Cell> {
        let mut path = Vec::with_capacity(PREDICTION_STEPS);
        let mut at = from;
        let mut heading = heading;

        for _ in 0..PREDICTION_STEPS {
            let mut next = at.offset(heading);
            if !grid.is_valid(next) {
                let legal: Vec<Direction> = grid.legal_directions(at).collect();
                let Some(dir) = rng.choose(&legal) else { break };
                heading = dir.delta();
                next = at.offset(heading);
            }
            path.push(next);
            at = next;
        }
        path
    }

    /// `true` if `cell` is among the first `lookahead` predicted cells of any
    /// chaser with a known heading.
    pub fn on_predicted_path<R: RandomSource>(
        &self,
        grid:      &Grid,
        cell:      Cell,
        lookahead: usize,
        rng:       &mut R,
    ) -> bool {
        self.headings.iter().any(|(id, &heading)| {
            let Some(&from) = self.last_seen.get(id) else { return false };
            Self::predict_path(grid, from, heading, rng)
                .iter()
                .take(lookahead)
                .any(|&c| c == cell)
        })
    }

    /// A cell is safe iff no chaser is within distance 1 and the cell is not
    /// on the first `lookahead` steps of any predicted chaser path.
    pub fn is_safe<R: RandomSource>(
        &self,
        grid:      &Grid,
        cell:      Cell,
        lookahead: usize,
        rng:       &mut R,
    ) -> bool {
        if self.min_distance(cell).is_some_and(|d| d <= 1) {
            return false;
        }
        !self.on_predicted_path(grid, cell, lookahead, rng)
    }
}
