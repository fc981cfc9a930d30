//! `gp-behavior`: agent policies for the grid_pursuit engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`context`] | `TickContext<'a>`: read-only view shared by every policy call   |
//! | [`policy`]  | `Policy` trait                                                   |
//! | [`chaser`]  | `ChaserAgent`: random walk                                      |
//! | [`threat`]  | `ThreatModel`: chaser memory, heading prediction, cell safety   |
//! | [`metrics`] | `DecisionStats`: decision counters and derived scores           |
//! | [`seeker`]  | `SeekerAgent`: evade / plan / follow / fallback state machine   |
//! | [`factory`] | `AgentFactory`: round-robin colour assignment                   |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! Policies are called one agent at a time by the simulation loop.  All
//! reads of the world go through `&TickContext`; the only state a policy
//! mutates is its own (planned path, chaser memory, counters).  Chaser
//! positions reach a seeker through [`SeekerAgent::observe_chasers`], which
//! the simulation calls once per tick after every chaser has moved.

pub mod chaser;
pub mod context;
pub mod error;
pub mod factory;
pub mod metrics;
pub mod policy;
pub mod seeker;
pub mod threat;

#[cfg(test)]
mod tests;

pub use chaser::ChaserAgent;
pub use context::TickContext;
pub use error::{BehaviorError, BehaviorResult};
pub use factory::AgentFactory;
pub use metrics::DecisionStats;
pub use policy::Policy;
pub use seeker::SeekerAgent;
pub use threat::ThreatModel;
