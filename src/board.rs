use once_cell::sync::Lazy;
use serde::Serialize;

use crate::types::{BOARD_SIZE, Color, Piece, PieceKind, Position};

const BACK_ROW: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static INITIAL_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for col in 0..BOARD_SIZE {
        let kind = BACK_ROW[col as usize];
        board.set(Position::new(0, col), Some(Piece::new(kind, Color::Black)));
        board.set(
            Position::new(1, col),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        board.set(
            Position::new(6, col),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        board.set(Position::new(7, col), Some(Piece::new(kind, Color::White)));
    }
    board
});

/// 8x8 chess board indexed by `(row, col)`.
/// Copies are cheap; rule checks simulate moves on a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn new() -> Self {
        *INITIAL_BOARD
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Returns the piece at `pos`; off-board positions read as empty.
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.is_on_board() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Writes a square. Off-board writes are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_on_board() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.get(pos);
        self.set(pos, None);
        piece
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    /// Flags are left untouched.
    pub fn relocate(&mut self, from: Position, to: Position) {
        let piece = self.take(from);
        self.set(to, piece);
    }

    /// Iterates occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let pos = Position::new(row, col);
                self.get(pos).map(|piece| (pos, piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_has_standard_layout() {
        let board = Board::new();

        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);

        let e1 = board.get(Position::new(7, 4)).unwrap();
        assert_eq!(e1.kind, PieceKind::King);
        assert_eq!(e1.color, Color::White);
        assert!(!e1.has_moved);

        let d8 = board.get(Position::new(0, 3)).unwrap();
        assert_eq!(d8.kind, PieceKind::Queen);
        assert_eq!(d8.color, Color::Black);

        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(Position::new(1, col)).unwrap().kind, PieceKind::Pawn);
            assert_eq!(board.get(Position::new(6, col)).unwrap().kind, PieceKind::Pawn);
            for row in 2..6 {
                assert!(board.is_empty_at(Position::new(row, col)));
            }
        }
    }

    #[test]
    fn find_king_locates_each_side() {
        let board = Board::new();

        assert_eq!(board.find_king(Color::White), Some(Position::new(7, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Position::new(0, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn off_board_access_is_inert() {
        let mut board = Board::empty();
        let outside = Position::new(8, 3);

        board.set(outside, Some(Piece::new(PieceKind::Rook, Color::White)));

        assert_eq!(board.get(outside), None);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn relocate_moves_piece_and_clears_origin() {
        let mut board = Board::new();
        let from = Position::new(6, 4);
        let to = Position::new(4, 4);

        board.relocate(from, to);

        assert!(board.is_empty_at(from));
        assert_eq!(board.get(to).unwrap().kind, PieceKind::Pawn);
        // The shared initial layout is unaffected by edits to a copy.
        assert!(!Board::new().is_empty_at(from));
    }
}
