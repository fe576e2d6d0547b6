use thiserror::Error;

use crate::grid::Position;

/// Problems with the shape of a grid or with a path drawn on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has no cells")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("{from} and {to} are not adjacent")]
    NotAdjacent { from: Position, to: Position },
    #[error("cell ({row}, {col}) is visited twice")]
    RevisitedCell { row: usize, col: usize },
    #[error("path is empty")]
    EmptyPath,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
