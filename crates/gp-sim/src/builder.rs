//! Fluent builder for constructing a [`Simulation`].

use std::collections::{BTreeMap, BTreeSet};

use gp_behavior::AgentFactory;
use gp_core::{Cell, FlagId, Rgb, SimConfig, SimRng, Tick};
use gp_grid::{AStar, Grid, Pathfinder};

use crate::{Outcome, ScoreCard, SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<P>`].
///
/// # Required inputs
///
/// - [`Grid`]: the loaded map (its food set becomes the game's food set)
/// - [`SimConfig`]: seed, tick cap, clock, …
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                          |
/// |---------------------------|----------------------------------|
/// | `.with_pathfinder(p)`     | [`AStar`]                        |
/// | `.seeker_positions(v)`    | Seeker spawn cells from the map  |
/// | `.chaser_positions(v)`    | Chaser spawn cells from the map  |
/// | `.palette(v)`             | [`Rgb::DEFAULT_PALETTE`]         |
/// | `.high_scores(m)`         | 0 for every team                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(grid, config)
///     .seeker_positions(vec![Cell::new(2, 1)])
///     .build()?;
/// sim.step();
/// ```
pub struct SimBuilder<P: Pathfinder = AStar> {
    grid:             Grid,
    config:           SimConfig,
    pathfinder:       P,
    seeker_positions: Option<Vec<Cell>>,
    chaser_positions: Option<Vec<Cell>>,
    palette:          Option<Vec<Rgb>>,
    high_scores:      BTreeMap<FlagId, u32>,
}

impl SimBuilder<AStar> {
    pub fn new(grid: Grid, config: SimConfig) -> Self {
        Self {
            grid,
            config,
            pathfinder:       AStar,
            seeker_positions: None,
            chaser_positions: None,
            palette:          None,
            high_scores:      BTreeMap::new(),
        }
    }
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Replace the pathfinder used by seeker planning.
    pub fn with_pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> SimBuilder<Q> {
        SimBuilder {
            grid:             self.grid,
            config:           self.config,
            pathfinder,
            seeker_positions: self.seeker_positions,
            chaser_positions: self.chaser_positions,
            palette:          self.palette,
            high_scores:      self.high_scores,
        }
    }

    /// Start seekers somewhere other than their spawn cells.  Must have one
    /// entry per seeker.
    pub fn seeker_positions(mut self, positions: Vec<Cell>) -> Self {
        self.seeker_positions = Some(positions);
        self
    }

    /// Start chasers somewhere other than their spawn cells.  Must have one
    /// entry per chaser.
    pub fn chaser_positions(mut self, positions: Vec<Cell>) -> Self {
        self.chaser_positions = Some(positions);
        self
    }

    pub fn palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Best scores from earlier games, carried into this one.
    pub fn high_scores(mut self, high_scores: BTreeMap<FlagId, u32>) -> Self {
        self.high_scores = high_scores;
        self
    }

    /// Validate inputs, create agents and RNG streams, and return a
    /// ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation<P>> {
        self.config.validate()?;

        let mut factory = match self.palette {
            Some(palette) => AgentFactory::new(palette)?,
            None          => AgentFactory::with_default_palette(),
        };

        // ── Agents ────────────────────────────────────────────────────────
        let seekers = self
            .grid
            .seeker_spawns()
            .iter()
            .map(|spawn| factory.create_seeker(&self.grid, spawn.flag.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let chasers: Vec<_> = self.grid.chaser_spawns().iter().map(|_| factory.create_chaser()).collect();

        // ── Validate and resolve optional inputs ──────────────────────────
        let spawn_cells: Vec<Cell> = self.grid.seeker_spawns().iter().map(|s| s.cell).collect();
        let seeker_positions =
            resolve_positions(&self.grid, self.seeker_positions, spawn_cells, "seeker positions")?;
        let chaser_positions = resolve_positions(
            &self.grid,
            self.chaser_positions,
            self.grid.chaser_spawns().to_vec(),
            "chaser positions",
        )?;

        // ── RNG streams ───────────────────────────────────────────────────
        let root = SimRng::new(self.config.seed);
        let seeker_rngs = (0..seekers.len()).map(|i| root.seeker(i)).collect();
        let chaser_rngs = (0..chasers.len()).map(|i| root.chaser(i)).collect();

        let mut high_scores = self.high_scores;
        for seeker in &seekers {
            high_scores.entry(seeker.flag().clone()).or_insert(0);
        }

        Ok(Simulation {
            clock: self.config.make_clock(),
            config: self.config,
            tick: Tick::ZERO,
            grid: self.grid,
            pathfinder: self.pathfinder,
            scores: vec![ScoreCard::default(); seekers.len()],
            seekers,
            seeker_positions,
            seeker_rngs,
            chasers,
            chaser_positions,
            chaser_rngs,
            protected_teams: BTreeSet::new(),
            protected_chasers: BTreeSet::new(),
            outcome: Outcome::Running,
            result: String::new(),
            high_scores,
        })
    }
}

fn resolve_positions(
    grid:      &Grid,
    overrides: Option<Vec<Cell>>,
    spawns:    Vec<Cell>,
    what:      &'static str,
) -> SimResult<Vec<Cell>> {
    let Some(positions) = overrides else {
        return Ok(spawns);
    };
    if positions.len() != spawns.len() {
        return Err(SimError::AgentCountMismatch {
            expected: spawns.len(),
            got:      positions.len(),
            what,
        });
    }
    if let Some(&cell) = positions.iter().find(|&&c| !grid.is_valid(c)) {
        return Err(SimError::InvalidPosition { what, cell });
    }
    Ok(positions)
}
