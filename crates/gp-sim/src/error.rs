use gp_behavior::BehaviorError;
use gp_core::{Cell, CoreError};
use gp_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("map error: {0}")]
    Grid(#[from] GridError),

    #[error("agent setup error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} {cell} is a wall or off the map")]
    InvalidPosition {
        what: &'static str,
        cell: Cell,
    },
}

pub type SimResult<T> = Result<T, SimError>;
