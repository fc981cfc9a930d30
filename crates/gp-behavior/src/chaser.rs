//! Chasers: uniform random walk.

use gp_core::{Cell, ChaserId, Delta, Direction, RandomSource, Rgb};

use crate::{Policy, TickContext};

/// A chaser agent.
///
/// Protection (set once the chaser has stood on any flag) only stops it from
/// catching seekers; it keeps walking the same way.
#[derive(Clone, Debug)]
pub struct ChaserAgent {
    id:        ChaserId,
    color:     Rgb,
    protected: bool,
}

impl ChaserAgent {
    pub fn new(id: ChaserId, color: Rgb) -> Self {
        Self { id, color, protected: false }
    }

    #[inline]
    pub fn id(&self) -> ChaserId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Mark the chaser protected.  Permanent; returns `true` the first time.
    pub fn protect(&mut self) -> bool {
        !std::mem::replace(&mut self.protected, true)
    }
}

impl Policy for ChaserAgent {
    fn choose_action<R: RandomSource>(
        &mut self,
        position: Cell,
        ctx:      &TickContext<'_>,
        rng:      &mut R,
    ) -> Delta {
        let legal: Vec<Direction> = ctx.grid.legal_directions(position).collect();
        rng.choose(&legal).map_or(Delta::ZERO, |d| d.delta())
    }
}
