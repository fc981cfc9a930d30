//! Game lifecycle: load, play, reset, with high scores kept across games.

use std::collections::BTreeMap;
use std::path::Path;

use gp_core::{FlagId, SimConfig};
use gp_grid::{GridError, parse_map};
use tracing::info;

use crate::{NoopObserver, Outcome, SimBuilder, SimObserver, SimResult, Simulation, Snapshot};

/// A sequence of games on one map.
///
/// Each game gets a fresh [`Simulation`] built from the stored map text,
/// so food, positions and protection are restored on reset.  The high-score
/// table is the only state carried from one game to the next.
///
/// Game `n` (0-based) is seeded with `config.seed + n`, so consecutive games
/// differ while a whole session still replays from the same seed.
pub struct Game {
    map_text: String,
    config:   SimConfig,
    sim:      Simulation,
    round:    u64,
}

impl Game {
    pub fn from_map_text(map_text: impl Into<String>, config: SimConfig) -> SimResult<Self> {
        let map_text = map_text.into();
        let sim = build_round(&map_text, &config, 0, BTreeMap::new())?;
        Ok(Self { map_text, config, sim, round: 0 })
    }

    /// Read a map file and start the first game.
    pub fn load(path: &Path, config: SimConfig) -> SimResult<Self> {
        let text = std::fs::read_to_string(path).map_err(GridError::from)?;
        info!(path = %path.display(), "map loaded");
        Self::from_map_text(text, config)
    }

    /// Throw away the current game and start a new one on the same map.
    pub fn reset(&mut self) -> SimResult<()> {
        let round = self.round + 1;
        let high_scores = self.sim.high_scores().clone();
        self.sim = build_round(&self.map_text, &self.config, round, high_scores)?;
        self.round = round;
        info!(round, "game reset");
        Ok(())
    }

    /// Reset only if the current game has ended.  Returns whether it did.
    pub fn restart_if_over(&mut self) -> SimResult<bool> {
        if !self.sim.outcome().is_terminal() {
            return Ok(false);
        }
        self.reset()?;
        Ok(true)
    }

    pub fn step(&mut self) -> Outcome {
        self.sim.step_observed(&mut NoopObserver)
    }

    pub fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> Outcome {
        self.sim.step_observed(observer)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn high_scores(&self) -> &BTreeMap<FlagId, u32> {
        self.sim.high_scores()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// 0 for the first game, incremented by every reset.
    pub fn round(&self) -> u64 {
        self.round
    }
}

fn build_round(
    map_text:    &str,
    config:      &SimConfig,
    round:       u64,
    high_scores: BTreeMap<FlagId, u32>,
) -> SimResult<Simulation> {
    let grid = parse_map(map_text)?;
    let config = SimConfig { seed: config.seed.wrapping_add(round), ..config.clone() };
    SimBuilder::new(grid, config).high_scores(high_scores).build()
}
