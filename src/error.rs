use thiserror::Error;

use crate::types::{Color, Position};

/// Reasons a move or session request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Checkmate, stalemate or resignation already ended the game.
    #[error("game is already over")]
    GameOver,
    /// A coordinate outside the 8x8 board.
    #[error("row/col out of range: ({}, {})", .0.row, .0.col)]
    OffBoard(Position),
    /// Nothing stands on the origin square.
    #[error("no piece at ({}, {})", .0.row, .0.col)]
    EmptySquare(Position),
    /// The origin square holds a piece of the side not to move.
    #[error("piece at ({}, {}) does not belong to the side to move", .0.row, .0.col)]
    NotYourPiece(Position),
    /// The destination is not among the legal moves of the origin piece.
    #[error("illegal move: ({}, {}) -> ({}, {})", .from.row, .from.col, .to.row, .to.col)]
    IllegalMove { from: Position, to: Position },
    #[error("missing name for the {0} player")]
    MissingPlayerName(Color),
}
