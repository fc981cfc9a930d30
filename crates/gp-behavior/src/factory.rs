//! Agent construction with deterministic colour assignment.

use gp_core::{ChaserId, FlagId, Rgb, SeekerId};
use gp_grid::Grid;

use crate::{BehaviorError, BehaviorResult, ChaserAgent, SeekerAgent};

/// Hands out ids and colours in creation order.
///
/// Seekers cycle through the palette; every chaser gets [`Rgb::CHASER`].
/// One factory is used per game, so a reset replays the same colours.
#[derive(Clone, Debug)]
pub struct AgentFactory {
    palette: Vec<Rgb>,
    seekers: u32,
    chasers: u32,
}

impl AgentFactory {
    pub fn new(palette: impl Into<Vec<Rgb>>) -> BehaviorResult<Self> {
        let palette = palette.into();
        if palette.is_empty() {
            return Err(BehaviorError::EmptyPalette);
        }
        Ok(Self { palette, seekers: 0, chasers: 0 })
    }

    /// Factory over [`Rgb::DEFAULT_PALETTE`].
    pub fn with_default_palette() -> Self {
        Self { palette: Rgb::DEFAULT_PALETTE.to_vec(), seekers: 0, chasers: 0 }
    }

    /// Create the seeker for team `flag`.  Fails if the grid has no such flag.
    pub fn create_seeker(&mut self, grid: &Grid, flag: FlagId) -> BehaviorResult<SeekerAgent> {
        let flag_cell = grid.flag_cell(&flag)?;
        let color = self.palette[self.seekers as usize % self.palette.len()];
        let seeker = SeekerAgent::new(SeekerId(self.seekers), flag, flag_cell, color);
        self.seekers += 1;
        Ok(seeker)
    }

    pub fn create_chaser(&mut self) -> ChaserAgent {
        let chaser = ChaserAgent::new(ChaserId(self.chasers), Rgb::CHASER);
        self.chasers += 1;
        chaser
    }
}
