use crate::board::Board;
use crate::rules::check::{is_in_check, is_square_attacked};
use crate::rules::movegen::raw_moves;
use crate::types::{Color, Piece, PieceKind, Position};

const KING_START_COL: u8 = 4;

/// One castling side: where the rook starts, which squares must be empty,
/// and which squares the king crosses or lands on.
struct CastleSide {
    rook_col: u8,
    king_to_col: u8,
    between: &'static [u8],
    king_path: &'static [u8],
}

const KINGSIDE: CastleSide = CastleSide {
    rook_col: 7,
    king_to_col: 6,
    between: &[5, 6],
    king_path: &[5, 6],
};
const QUEENSIDE: CastleSide = CastleSide {
    rook_col: 0,
    king_to_col: 2,
    between: &[1, 2, 3],
    king_path: &[2, 3],
};

/// Legal destinations for the piece on `from`: raw moves that do not leave
/// the mover's own king attacked, plus castling for an unmoved king.
/// An empty or off-board square yields no moves. Order carries no meaning.
pub fn legal_moves(
    board: &Board,
    from: Position,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves: Vec<Position> = raw_moves(board, from, en_passant_target, false)
        .into_iter()
        .filter(|&to| !leaves_king_in_check(board, from, to, piece, en_passant_target))
        .collect();

    if piece.kind == PieceKind::King {
        moves.extend(castling_moves(board, from, piece));
    }
    moves
}

/// True iff `color` has at least one legal move anywhere on the board.
pub fn has_any_legal_move(
    board: &Board,
    color: Color,
    en_passant_target: Option<Position>,
) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from, en_passant_target).is_empty())
}

fn leaves_king_in_check(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
) -> bool {
    let mut trial = *board;
    trial.relocate(from, to);
    if piece.kind == PieceKind::Pawn
        && en_passant_target == Some(to)
        && let Some(victim) = en_passant_victim(to, piece.color)
    {
        trial.set(victim, None);
    }
    is_in_check(&trial, piece.color)
}

/// Square of the pawn removed by an en-passant capture landing on `to`:
/// one step back along the mover's direction. `None` off the board.
pub(crate) fn en_passant_victim(to: Position, mover: Color) -> Option<Position> {
    to.offset(-mover.pawn_direction(), 0)
}

fn castling_moves(board: &Board, from: Position, king: Piece) -> Vec<Position> {
    let row = king.color.home_row();
    if king.has_moved
        || from != Position::new(row, KING_START_COL)
        || is_in_check(board, king.color)
    {
        return Vec::new();
    }

    let opponent = king.color.opponent();
    [KINGSIDE, QUEENSIDE]
        .iter()
        .filter(|side| {
            let rook_ready = board
                .get(Position::new(row, side.rook_col))
                .is_some_and(|rook| {
                    rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
                });
            rook_ready
                && side
                    .between
                    .iter()
                    .all(|&col| board.is_empty_at(Position::new(row, col)))
                && side
                    .king_path
                    .iter()
                    .all(|&col| !is_square_attacked(board, Position::new(row, col), opponent))
        })
        .map(|side| Position::new(row, side.king_to_col))
        .collect()
}
