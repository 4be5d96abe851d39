//! Algebraic-style text for squares and logged moves.

use serde::Serialize;

use crate::types::{BOARD_SIZE, Color, MoveRecord, PieceKind, Position};

const FILES: &[u8; 8] = b"abcdefgh";

/// One numbered line of the move list. `white` is empty on the first line
/// of a game that started with black to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePair {
    pub number: usize,
    pub white: Option<String>,
    pub black: Option<String>,
}

/// `(7, 4)` -> `"e1"`. Rank 8 is row 0; off-board positions have no name.
pub fn square_name(pos: Position) -> Option<String> {
    if !pos.is_on_board() {
        return None;
    }
    let file = FILES[pos.col as usize] as char;
    let rank = BOARD_SIZE - pos.row;
    Some(format!("{file}{rank}"))
}

/// `"e1"` -> `(7, 4)`.
pub fn parse_square(name: &str) -> Option<Position> {
    let &[file, rank] = name.as_bytes() else {
        return None;
    };
    let col = FILES.iter().position(|&f| f == file.to_ascii_lowercase())?;
    let rank = (rank as char).to_digit(10)?;
    if !(1..=BOARD_SIZE as u32).contains(&rank) {
        return None;
    }
    Some(Position::new(BOARD_SIZE - rank as u8, col as u8))
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::King => "K",
        PieceKind::Queen => "Q",
        PieceKind::Rook => "R",
        PieceKind::Bishop => "B",
        PieceKind::Knight => "N",
        PieceKind::Pawn => "",
    }
}

/// Short notation for a logged move, e.g. `Nf3`, `exd5`, `e8=Q`, `O-O-O`.
/// Check marks and disambiguation are not produced.
pub fn move_to_notation(record: &MoveRecord) -> String {
    if record.is_castling {
        return if record.to.col == 6 { "O-O" } else { "O-O-O" }.to_string();
    }

    let mut text = piece_letter(record.piece.kind).to_string();
    if record.captured.is_some() {
        if record.piece.kind == PieceKind::Pawn
            && let Some(&file) = FILES.get(record.from.col as usize)
        {
            text.push(file as char);
        }
        text.push('x');
    }
    text.push_str(&square_name(record.to).unwrap_or_default());
    if record.is_promotion {
        text.push_str("=Q");
    }
    text
}

/// Groups the log into numbered white/black pairs, keyed by the colour of
/// each moving piece.
pub fn move_pairs(moves: &[MoveRecord]) -> Vec<MovePair> {
    let mut pairs: Vec<MovePair> = Vec::new();
    for record in moves {
        let text = move_to_notation(record);
        if record.piece.color == Color::Black
            && let Some(pair) = pairs.last_mut()
            && pair.black.is_none()
        {
            pair.black = Some(text);
            continue;
        }

        let (white, black) = match record.piece.color {
            Color::White => (Some(text), None),
            Color::Black => (None, Some(text)),
        };
        pairs.push(MovePair {
            number: pairs.len() + 1,
            white,
            black,
        });
    }
    pairs
}
