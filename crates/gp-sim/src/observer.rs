//! Simulation observer trait for progress reporting and data collection.

use gp_core::{Cell, FlagId, Tick};

use crate::Snapshot;

/// Callbacks invoked by [`Simulation::step_observed`][crate::Simulation::step_observed]
/// and [`Simulation::run`][crate::Simulation::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: pickup counter
///
/// ```rust,ignore
/// struct Pickups(u32);
///
/// impl SimObserver for Pickups {
///     fn on_food_eaten(&mut self, _tick: Tick, _team: &FlagId, _cell: Cell) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A seeker of `team` ate the food at `cell`.
    fn on_food_eaten(&mut self, _tick: Tick, _team: &FlagId, _cell: Cell) {}

    /// The seeker of `team` reached its flag at `cell` and is now protected.
    fn on_flag_reached(&mut self, _tick: Tick, _team: &FlagId, _cell: Cell) {}

    /// Called at the end of every processed tick with the post-tick state.
    fn on_tick_end(&mut self, _snapshot: &Snapshot) {}

    /// Called once, after `on_tick_end`, on the tick the game ends.
    fn on_game_over(&mut self, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
