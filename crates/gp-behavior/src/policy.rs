//! The `Policy` trait: how an agent picks its move each tick.

use gp_core::{Cell, Delta, RandomSource};

use crate::TickContext;

/// Per-tick move selection.
///
/// Returns the delta the agent wants to apply; [`Delta::ZERO`] means stay.
/// The simulation validates the target cell, so a policy may return a move
/// the grid will refuse.
///
/// Randomness is injected per call so the simulation can give each agent its
/// own seeded stream and tests can script choices with
/// [`ScriptedRng`][gp_core::ScriptedRng].
///
/// # Example
///
/// ```rust,ignore
/// struct StandStill;
///
/// impl Policy for StandStill {
///     fn choose_action<R: RandomSource>(&mut self, _: Cell, _: &TickContext<'_>, _: &mut R) -> Delta {
///         Delta::ZERO
///     }
/// }
/// ```
pub trait Policy {
    fn choose_action<R: RandomSource>(
        &mut self,
        position: Cell,
        ctx:      &TickContext<'_>,
        rng:      &mut R,
    ) -> Delta;
}
