use opn_core::Location;
use opn_map::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("movement configuration error: {0}")]
    Config(String),

    #[error("location source yielded no points")]
    EmptyLocations,

    #[error("location {0} does not resolve to a graph node")]
    Unmapped(Location),

    #[error("graph has no nodes to assign places from")]
    EmptyGraph,

    #[error("location source failed: {0}")]
    Source(#[from] MapError),
}

pub type MovementResult<T> = Result<T, MovementError>;
