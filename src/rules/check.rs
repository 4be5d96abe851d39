use crate::board::Board;
use crate::rules::movegen::raw_moves;
use crate::types::{Color, Position};

/// True iff any piece of `by_color` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, _)| raw_moves(board, from, None, true).contains(&target))
}

/// True iff `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => false,
    }
}
