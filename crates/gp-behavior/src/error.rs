use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("agent factory needs at least one seeker colour")]
    EmptyPalette,

    #[error(transparent)]
    Grid(#[from] gp_grid::GridError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
