use crate::board::Board;
use crate::types::{Piece, PieceKind, Position};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Destinations the piece on `from` can reach geometrically, ignoring
/// whether its own king is left in check. Castling is not generated here.
///
/// With `attack_only`, pawns report both forward diagonals regardless of
/// occupancy; every other piece behaves the same in both modes.
/// An empty or off-board `from` yields no moves.
pub fn raw_moves(
    board: &Board,
    from: Position,
    en_passant_target: Option<Position>,
    attack_only: bool,
) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, en_passant_target, attack_only, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(board, from, piece, &KING_OFFSETS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, piece, &DIAGONALS, &mut moves),
        PieceKind::Rook => slide_moves(board, from, piece, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            slide_moves(board, from, piece, &DIAGONALS, &mut moves);
            slide_moves(board, from, piece, &ORTHOGONALS, &mut moves);
        }
    }
    moves
}

fn pawn_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    en_passant_target: Option<Position>,
    attack_only: bool,
    moves: &mut Vec<Position>,
) {
    let dir = piece.color.pawn_direction();

    if attack_only {
        moves.extend([-1, 1].into_iter().filter_map(|dc| from.offset(dir, dc)));
        return;
    }

    if let Some(one) = from.offset(dir, 0)
        && board.is_empty_at(one)
    {
        moves.push(one);
        if from.row == piece.color.pawn_start_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.is_empty_at(two)
        {
            moves.push(two);
        }
    }

    for dc in [-1, 1] {
        let Some(target) = from.offset(dir, dc) else {
            continue;
        };
        let is_enemy = board
            .get(target)
            .is_some_and(|other| other.color != piece.color);
        if is_enemy || en_passant_target == Some(target) {
            moves.push(target);
        }
    }
}

fn step_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = from.offset(dr, dc)
            && board.get(target).is_none_or(|other| other.color != piece.color)
        {
            moves.push(target);
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(dr, dc) in directions {
        let mut cursor = from.offset(dr, dc);
        while let Some(target) = cursor {
            match board.get(target) {
                None => moves.push(target),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(target);
                    }
                    break;
                }
            }
            cursor = target.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn place(board: &mut Board, at: Position, kind: PieceKind, color: Color) {
        board.set(at, Some(Piece::new(kind, color)));
    }

    fn sorted(mut moves: Vec<Position>) -> Vec<Position> {
        moves.sort_by_key(|p| (p.row, p.col));
        moves
    }

    #[test]
    fn initial_pawn_can_advance_one_or_two() {
        let board = Board::new();

        let moves = sorted(raw_moves(&board, pos(6, 4), None, false));

        assert_eq!(moves, vec![pos(4, 4), pos(5, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_forward_moves() {
        let mut board = Board::new();
        place(&mut board, pos(5, 4), PieceKind::Knight, Color::Black);

        let moves = raw_moves(&board, pos(6, 4), None, false);

        // Only the diagonal captures remain, and those squares are empty.
        assert!(moves.is_empty());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let mut board = Board::new();
        place(&mut board, pos(4, 4), PieceKind::Knight, Color::Black);

        let moves = raw_moves(&board, pos(6, 4), None, false);

        assert_eq!(moves, vec![pos(5, 4)]);
    }

    #[test]
    fn pawn_captures_enemy_and_en_passant_square_only() {
        let mut board = Board::empty();
        place(&mut board, pos(3, 4), PieceKind::Pawn, Color::White);
        place(&mut board, pos(2, 3), PieceKind::Rook, Color::Black);
        place(&mut board, pos(3, 5), PieceKind::Pawn, Color::Black);

        let without_ep = sorted(raw_moves(&board, pos(3, 4), None, false));
        let with_ep = sorted(raw_moves(&board, pos(3, 4), Some(pos(2, 5)), false));

        assert_eq!(without_ep, vec![pos(2, 3), pos(2, 4)]);
        assert_eq!(with_ep, vec![pos(2, 3), pos(2, 4), pos(2, 5)]);
    }

    #[test]
    fn attack_only_pawn_reports_diagonals_even_when_friendly() {
        let mut board = Board::empty();
        place(&mut board, pos(6, 0), PieceKind::Pawn, Color::White);
        place(&mut board, pos(5, 1), PieceKind::Knight, Color::White);
        place(&mut board, pos(1, 7), PieceKind::Pawn, Color::Black);

        assert_eq!(raw_moves(&board, pos(6, 0), None, true), vec![pos(5, 1)]);
        assert_eq!(raw_moves(&board, pos(1, 7), None, true), vec![pos(2, 6)]);
    }

    #[test]
    fn knight_skips_friendly_squares() {
        let board = Board::new();

        let moves = sorted(raw_moves(&board, pos(7, 1), None, false));

        assert_eq!(moves, vec![pos(5, 0), pos(5, 2)]);
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let mut board = Board::empty();
        place(&mut board, pos(4, 4), PieceKind::Rook, Color::White);
        place(&mut board, pos(4, 6), PieceKind::Pawn, Color::White);
        place(&mut board, pos(1, 4), PieceKind::Pawn, Color::Black);

        let moves = raw_moves(&board, pos(4, 4), None, false);

        assert!(moves.contains(&pos(4, 5)));
        assert!(!moves.contains(&pos(4, 6)));
        assert!(!moves.contains(&pos(4, 7)));
        assert!(moves.contains(&pos(1, 4)));
        assert!(!moves.contains(&pos(0, 4)));
        assert_eq!(moves.len(), 3 + 4 + 3 + 1);
    }

    #[test]
    fn queen_in_center_of_empty_board_reaches_27_squares() {
        let mut board = Board::empty();
        place(&mut board, pos(3, 3), PieceKind::Queen, Color::Black);

        assert_eq!(raw_moves(&board, pos(3, 3), None, false).len(), 27);
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let mut board = Board::empty();
        place(&mut board, pos(0, 0), PieceKind::King, Color::Black);

        let moves = sorted(raw_moves(&board, pos(0, 0), None, false));

        assert_eq!(moves, vec![pos(0, 1), pos(1, 0), pos(1, 1)]);
    }

    #[test]
    fn empty_or_off_board_square_yields_nothing() {
        let board = Board::new();

        assert!(raw_moves(&board, pos(4, 4), None, false).is_empty());
        assert!(raw_moves(&board, pos(9, 0), None, true).is_empty());
    }
}
