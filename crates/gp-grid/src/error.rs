//! Grid-subsystem error type.

use thiserror::Error;

use gp_core::{Cell, FlagId};

/// Errors produced while loading a map or resolving a flag.
///
/// Every variant is a configuration error: the game cannot start.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("mismatch in counts: {seekers} seekers, {flags} flags, {chasers} chasers")]
    CountMismatch {
        seekers: usize,
        flags:   usize,
        chasers: usize,
    },

    #[error("flag {0} not found")]
    UnknownFlag(FlagId),

    #[error("token {token} appears more than once (second at {cell})")]
    DuplicateToken { token: String, cell: Cell },

    #[error("{what} at {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        what:   &'static str,
        cell:   Cell,
        width:  i32,
        height: i32,
    },

    #[error("map has no rows")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
