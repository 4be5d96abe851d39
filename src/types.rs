use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;

pub const BOARD_SIZE: u8 = 8;

/// Side of a piece or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a pawn of this color advances in.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start.
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Farthest rank for this color's pawns.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Material value credited to the capturing side.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A piece on the board. `has_moved` only gates castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }
}

/// A board coordinate. Row 0 is black's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shifts by `(dr, dc)`, returning `None` when the result leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Log entry for one applied move. Never replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

/// Pieces taken, keyed by the side that took them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn push(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

/// Running material score per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub white: u32,
    pub black: u32,
}

impl Scores {
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub(crate) fn add(&mut self, color: Color, points: u32) {
        match color {
            Color::White => self.white += points,
            Color::Black => self.black += points,
        }
    }
}

/// Full game state. Every transition returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    /// Append-only.
    pub moves: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
    pub scores: Scores,
    pub en_passant_target: Option<Position>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// Contract:
    /// - `true` only after `resign`; the game is then over.
    /// - Checkmate and stalemate never set it.
    pub resigned: bool,
    pub winner: Option<Color>,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate || self.is_stalemate || self.resigned
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }
}
