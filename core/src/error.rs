use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Could not allocate storage for the minefield")]
    AllocationFailure,
    #[error("Coordinates {coords:?} are outside of a {size:?} minefield")]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Cannot deploy {requested} mines, only {available} free cells")]
    InvalidMineCount {
        requested: CellCount,
        available: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, FieldError>;
