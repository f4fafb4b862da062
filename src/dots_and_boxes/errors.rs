use thiserror::Error;

use super::{coords::Coord, graph::{Edge, Vertex}};

/// Structural violations of the graph invariants. These indicate a builder defect.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} is already in the graph")]
    DuplicateVertex(Vertex),

    #[error("attempt to create an edge with non-existent vertex {0}")]
    UnknownVertex(Vertex),

    #[error("attempt to create a self loop on vertex {0}")]
    SelfLoop(Vertex),
}

/// A rejected move. The board is left untouched and the turn does not advance.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("line from dot {0} to itself")]
    SelfReferencing(Vertex),

    #[error("dots {} and {} are not joined by a grid line", .0.low(), .0.high())]
    NotAGridLine(Edge),

    #[error("line {}-{} is already drawn", .0.low(), .0.high())]
    AlreadyDrawn(Edge),

    #[error("coordinate {0} is not on the board")]
    UnknownCoord(Coord),

    #[error("it is the computer's turn")]
    OutOfTurn,

    #[error("the game is over")]
    GameOver,

    #[error("no game in progress")]
    NoGame,
}

/// Failures of the decision procedure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// Raised when the fallback finds nothing to draw while moves remain; the books are inconsistent.
    #[error("no undrawn line left to play")]
    NoLegalMove,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error(transparent)]
    Structure(#[from] GraphError),
}
