use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {rows}x{columns} with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Generated mine layout does not match the requested configuration")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
