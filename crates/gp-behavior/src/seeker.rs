//! Seekers: food-then-flag planners that dodge chasers.
//!
//! # Decision order
//!
//! Each call to [`choose_action`][Policy::choose_action] runs the first stage
//! that applies:
//!
//! | Stage     | Trigger                                      | Accounting            |
//! |-----------|----------------------------------------------|-----------------------|
//! | protected | seeker already protected                     | none                  |
//! | hold      | no food left, standing on own flag           | good, efficiency 1.0  |
//! | escape    | current cell unsafe (lookahead 2)            | encounter             |
//! | follow    | planned path has a safe next cell (lookahead 3) | good, step efficiency |
//! | fallback  | anything else                                | good if a safe move exists, else encounter |
//!
//! Planning happens between escape and follow, whenever the cached path does
//! not start at the current cell.  A plan that has been walked to its end
//! stays cached as `[goal]`; it has no next cell, so the seeker falls back
//! until it leaves the goal and replans.
//!
//! A seeker with no legal move at all stays put and counts an encounter
//! without counting a decision.

use std::collections::VecDeque;

use gp_core::{Cell, Delta, Direction, FlagId, RandomSource, Rgb, SeekerId};
use gp_grid::Grid;
use tracing::debug;

use crate::threat::PREDICTION_STEPS;
use crate::{DecisionStats, Policy, ThreatModel, TickContext};

/// Lookahead for the danger check on the current cell and planned steps.
pub const SHALLOW_LOOKAHEAD: usize = 2;
/// Lookahead for cells the seeker is about to enter.
pub const DEEP_LOOKAHEAD: usize = 3;

// Goal scoring weights.
const DISTANCE_WEIGHT: f64 = 0.6;
const SAFETY_WEIGHT:   f64 = 0.4;
const THREAT_PENALTY:  f64 = 0.5;

/// A seeker agent and its private decision state.
#[derive(Clone, Debug)]
pub struct SeekerAgent {
    id:        SeekerId,
    flag:      FlagId,
    flag_cell: Cell,
    color:     Rgb,
    protected: bool,
    path:      VecDeque<Cell>,
    threats:   ThreatModel,
    stats:     DecisionStats,
}

impl SeekerAgent {
    pub fn new(id: SeekerId, flag: FlagId, flag_cell: Cell, color: Rgb) -> Self {
        Self {
            id,
            flag,
            flag_cell,
            color,
            protected: false,
            path:      VecDeque::new(),
            threats:   ThreatModel::new(),
            stats:     DecisionStats::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SeekerId {
        self.id
    }

    #[inline]
    pub fn flag(&self) -> &FlagId {
        &self.flag
    }

    #[inline]
    pub fn flag_cell(&self) -> Cell {
        self.flag_cell
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Mark the seeker protected.  Permanent; returns `true` the first time.
    pub fn protect(&mut self) -> bool {
        self.path.clear();
        !std::mem::replace(&mut self.protected, true)
    }

    pub fn stats(&self) -> &DecisionStats {
        &self.stats
    }

    pub fn threats(&self) -> &ThreatModel {
        &self.threats
    }

    /// The cached plan, starting at the cell the seeker was on when it last
    /// stepped along it.
    pub fn planned_path(&self) -> impl Iterator<Item = Cell> + '_ {
        self.path.iter().copied()
    }

    /// Push this tick's chaser positions into the seeker's memory.
    pub fn observe_chasers(&mut self, positions: &[Cell]) {
        self.threats.observe(positions);
    }

    // ── Stages ───────────────────────────────────────────────────────────

    fn escape<R: RandomSource>(&mut self, position: Cell, grid: &Grid, rng: &mut R) -> Delta {
        let moves: Vec<Direction> = grid.legal_directions(position).collect();
        if moves.is_empty() {
            debug!(seeker = %self.id, %position, "cornered");
            self.stats.record_stuck();
            return Delta::ZERO;
        }
        self.stats.record_encounter();

        let safe: Vec<Direction> = moves
            .iter()
            .copied()
            .filter(|&d| self.threats.is_safe(grid, position.step(d), DEEP_LOOKAHEAD, rng))
            .collect();
        if let Some(&dir) = rng.choose(&safe) {
            debug!(seeker = %self.id, %position, %dir, "escape to safe cell");
            return dir.delta();
        }

        // No safe cell: keep as far from the nearest chaser as possible.
        let mut best: Option<(Direction, u32)> = None;
        for dir in moves {
            let dist = self.threats.min_distance(position.step(dir)).unwrap_or(u32::MAX);
            if best.is_none_or(|(_, d)| dist > d) {
                best = Some((dir, dist));
            }
        }
        best.map_or(Delta::ZERO, |(dir, dist)| {
            debug!(seeker = %self.id, %position, %dir, dist, "escape, no safe cell");
            dir.delta()
        })
    }

    /// Best food by distance, chaser clearance and predicted interception;
    /// the own flag once the food is gone.
    fn select_goal<R: RandomSource>(&self, position: Cell, grid: &Grid, rng: &mut R) -> Cell {
        let span = f64::from(grid.width() + grid.height());
        let mut best: Option<(f64, Cell)> = None;

        for food in grid.food_cells() {
            let closeness = 1.0 / f64::from(position.manhattan(food) + 1);
            let clearance = self
                .threats
                .min_distance(food)
                .map_or(0.0, |d| f64::from(d) / span);
            let threat = if self.threats.on_predicted_path(grid, food, PREDICTION_STEPS, rng) {
                THREAT_PENALTY
            } else {
                0.0
            };
            let score = DISTANCE_WEIGHT * closeness + SAFETY_WEIGHT * clearance - threat;
            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, food));
            }
        }

        best.map_or(self.flag_cell, |(_, cell)| cell)
    }

    fn plan<R: RandomSource>(&mut self, position: Cell, ctx: &TickContext<'_>, rng: &mut R) {
        let goal = self.select_goal(position, ctx.grid, rng);
        let path = ctx.pathfinder.find_path(ctx.grid, position, goal).unwrap_or_default();

        let risky = path
            .iter()
            .skip(1)
            .take(2)
            .any(|&c| !self.threats.is_safe(ctx.grid, c, SHALLOW_LOOKAHEAD, rng));

        debug!(seeker = %self.id, %position, %goal, len = path.len(), risky, "planned");
        self.path = if risky { VecDeque::new() } else { path.into() };
    }

    fn follow<R: RandomSource>(
        &mut self,
        position: Cell,
        ctx:      &TickContext<'_>,
        rng:      &mut R,
    ) -> Option<Delta> {
        let next = self.path.get(1).copied()?;
        if !self.threats.is_safe(ctx.grid, next, DEEP_LOOKAHEAD, rng) {
            self.path.clear();
            return None;
        }

        // The new head is the cell we are about to stand on.
        self.path.pop_front();
        let optimal = ctx.pathfinder.distance(ctx.grid, position, next).unwrap_or(1);
        self.stats.record_step((optimal as f64).min(1.0));
        Some(position.delta_to(next))
    }

    fn fallback<R: RandomSource>(&mut self, position: Cell, grid: &Grid, rng: &mut R) -> Delta {
        let scored: Vec<(Direction, bool)> = grid
            .legal_directions(position)
            .map(|d| (d, self.threats.is_safe(grid, position.step(d), SHALLOW_LOOKAHEAD, rng)))
            .collect();
        if scored.is_empty() {
            self.stats.record_stuck();
            return Delta::ZERO;
        }

        let any_safe = scored.iter().any(|&(_, safe)| safe);
        if any_safe {
            self.stats.record_safe_move();
        } else {
            self.stats.record_encounter();
        }

        let best: Vec<Direction> = scored
            .into_iter()
            .filter(|&(_, safe)| safe == any_safe)
            .map(|(d, _)| d)
            .collect();
        rng.choose(&best).map_or(Delta::ZERO, |d| d.delta())
    }
}

impl Policy for SeekerAgent {
    fn choose_action<R: RandomSource>(
        &mut self,
        position: Cell,
        ctx:      &TickContext<'_>,
        rng:      &mut R,
    ) -> Delta {
        if self.protected {
            return Delta::ZERO;
        }

        let grid = ctx.grid;
        if grid.food_count() == 0 && position == self.flag_cell {
            self.path.clear();
            self.stats.record_step(1.0);
            debug!(seeker = %self.id, flag = %self.flag, "holding on flag");
            return Delta::ZERO;
        }

        if !self.threats.is_safe(grid, position, SHALLOW_LOOKAHEAD, rng) {
            return self.escape(position, grid, rng);
        }

        if self.path.front() != Some(&position) {
            self.plan(position, ctx, rng);
        }

        if let Some(delta) = self.follow(position, ctx, rng) {
            return delta;
        }
        self.fallback(position, grid, rng)
    }
}
