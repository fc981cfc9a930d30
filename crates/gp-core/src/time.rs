//! Simulation time model and run configuration.
//!
//! # Design
//!
//! The canonical time unit is the integer `Tick`.  Scoring, however, is
//! defined over elapsed *seconds* (time efficiency decays over 300 s, the
//! final score loses one point per elapsed minute), so `SimClock` maps a
//! tick count to seconds in one of two ways:
//!
//! - `Wall`: real elapsed time since the game started.  What a live game
//!   uses.
//! - `Ticks`: `tick * tick_duration_secs`.  Exact and reproducible; what
//!   tests and headless batch runs use.

use std::fmt;
use std::time::{Duration, Instant};

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// How elapsed seconds are measured for scoring.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ClockMode {
    /// Real time since the game started.
    #[default]
    Wall,
    /// `ticks * tick_duration_secs`.
    Ticks,
}

/// Maps elapsed ticks to elapsed seconds.
#[derive(Clone, Debug)]
pub enum SimClock {
    Wall { started: Instant },
    Ticks { tick_duration_secs: f64 },
}

impl SimClock {
    /// A wall clock started now.
    pub fn wall() -> Self {
        SimClock::Wall { started: Instant::now() }
    }

    pub fn ticks(tick_duration_secs: f64) -> Self {
        SimClock::Ticks { tick_duration_secs }
    }

    /// Seconds elapsed after `ticks` completed ticks.
    pub fn elapsed_secs(&self, ticks: Tick) -> f64 {
        match self {
            SimClock::Wall { started }             => started.elapsed().as_secs_f64(),
            SimClock::Ticks { tick_duration_secs } => ticks.0 as f64 * tick_duration_secs,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// The demo binary loads it from JSON (with the `serde` feature); missing
/// fields fall back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and map always replay the same game
    /// under `ClockMode::Ticks`.
    pub seed: u64,

    /// Stop `Simulation::run` after this many ticks even if the game is not
    /// over.  `None` runs until a terminal state.
    pub max_ticks: Option<u64>,

    /// Elapsed-time source used for scoring.
    pub clock: ClockMode,

    /// Seconds represented by one tick.  Paces the live loop and drives
    /// `ClockMode::Ticks`.  Default: 0.125 (8 ticks per second).
    pub tick_duration_secs: f64,

    /// Observers that write output do so every N ticks.  1 = every tick.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            seed:                  42,
            max_ticks:             None,
            clock:                 ClockMode::Wall,
            tick_duration_secs:    0.125,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject values that would make the clock or pacing meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.tick_duration_secs.is_finite() || self.tick_duration_secs <= 0.0 {
            return Err(CoreError::Config(format!(
                "tick_duration_secs must be a positive number, got {}",
                self.tick_duration_secs
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(CoreError::Config("max_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` for a new game, started now.
    pub fn make_clock(&self) -> SimClock {
        match self.clock {
            ClockMode::Wall  => SimClock::wall(),
            ClockMode::Ticks => SimClock::ticks(self.tick_duration_secs),
        }
    }

    /// Real-time pause between ticks for a paced driver loop.
    pub fn tick_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.tick_duration_secs).unwrap_or_default()
    }

    /// `true` if output should be written after `tick`.
    #[inline]
    pub fn is_output_tick(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0 % self.output_interval_ticks == 0
    }
}
