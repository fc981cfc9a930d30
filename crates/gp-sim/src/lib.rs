//! `gp-sim`: tick loop orchestrator for the grid_pursuit engine.
//!
//! # Tick order
//!
//! ```text
//! step():
//!   ⓪ Contact : a seeker already sharing a cell with an unprotected chaser
//!                is caught before anything moves.
//!   ① Chasers : each chaser takes one random legal step; landing on any
//!                flag protects it for the rest of the game.
//!   ② Observe : every seeker receives the new chaser positions.
//!   ③ Seekers : in spawn order: policy → validate → move → food / flag
//!                scoring → score card refresh.
//!   ④ Collide : unprotected seeker on an unprotected chaser → Defeat.
//!   ⑤ Victory : every seeker protected → Victory.
//!   ⑥ Finish  : on a terminal outcome: update high scores and apply the
//!                elapsed-time penalty to the intelligence scores.
//! ```
//!
//! Terminal outcomes are absorbing: `step` on a finished game is a no-op.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gp_core::SimConfig;
//! use gp_grid::parse_map;
//! use gp_sim::{NoopObserver, SimBuilder};
//!
//! let grid = parse_map(MAP)?;
//! let mut sim = SimBuilder::new(grid, SimConfig::default()).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;
pub mod score;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use game::Game;
pub use observer::{NoopObserver, SimObserver};
pub use score::{ScoreCard, simulation_intelligence};
pub use sim::Simulation;
pub use snapshot::{ChaserView, Outcome, SeekerView, Snapshot};
