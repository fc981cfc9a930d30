//! `gp-core`: foundational types for the `grid_pursuit` engine.
//!
//! This crate is a dependency of every other `gp-*` crate.  It has no `gp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `SeekerId`, `ChaserId`, `FlagId`                          |
//! | [`cell`]  | `Cell`, `Delta`, `Direction`                              |
//! | [`color`] | `Rgb` and the default seeker palette                      |
//! | [`time`]  | `Tick`, `SimClock`, `ClockMode`, `SimConfig`              |
//! | [`rng`]   | `RandomSource`, `AgentRng`, `SimRng`, `ScriptedRng`       |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod color;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Delta, Direction};
pub use color::Rgb;
pub use error::{CoreError, CoreResult};
pub use ids::{ChaserId, FlagId, SeekerId};
pub use rng::{AgentRng, RandomSource, ScriptedRng, SimRng};
pub use time::{ClockMode, SimClock, SimConfig, Tick};
