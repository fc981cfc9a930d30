//! Injectable randomness for agent policies.
//!
//! Every random decision in the engine (chaser moves, safe-move choice,
//! re-chosen headings in chaser prediction) goes through [`RandomSource`].
//! The simulation hands each agent its own [`AgentRng`]; tests can pass a
//! [`ScriptedRng`] instead to force a particular choice.
//!
//! # Determinism strategy
//!
//! Each agent's `SmallRng` is seeded by:
//!
//!   seed = global_seed XOR (stream * MIXING_CONSTANT)
//!
//! where `stream` is the agent's index, offset by [`CHASER_STREAM`] for
//! chasers.  The mixing constant is the 64-bit fractional part of the golden
//! ratio, which spreads consecutive streams uniformly across the seed space,
//! so agents never share RNG state and the same seed replays the same game.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Stream offset separating chaser RNGs from seeker RNGs.
pub const CHASER_STREAM: u64 = 1 << 32;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The only randomness primitive the policies need: a uniform index.
pub trait RandomSource {
    /// Uniform index in `0..len`.  Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// Choose an element of `items`; `None` if the slice is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.pick(items.len()))
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Created once per agent when the simulation is built and stored alongside
/// the agent, so policy calls never contend for shared RNG state.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a stream id.
    pub fn new(global_seed: u64, stream: u64) -> Self {
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Root of a game's RNG streams.  Holds the seed and derives one
/// [`AgentRng`] per agent from it.
#[derive(Copy, Clone, Debug)]
pub struct SimRng {
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed }
    }

    /// RNG for the seeker at `index`.
    pub fn seeker(&self, index: usize) -> AgentRng {
        AgentRng::new(self.seed, index as u64)
    }

    /// RNG for the chaser at `index`.
    pub fn chaser(&self, index: usize) -> AgentRng {
        AgentRng::new(self.seed, CHASER_STREAM | index as u64)
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// A [`RandomSource`] that replays a fixed script of indices, cycling when
/// it runs out.  Each scripted value is reduced modulo the requested length.
///
/// `ScriptedRng::first()` always picks index 0, which turns every random
/// choice into "first option in evaluation order".
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<usize>) -> Self {
        ScriptedRng { script, cursor: 0 }
    }

    pub fn first() -> Self {
        ScriptedRng::new(vec![0])
    }

    /// Number of picks made so far.
    pub fn picks(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn pick(&mut self, len: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        raw % len
    }
}
