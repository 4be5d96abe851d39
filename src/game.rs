use crate::board::Board;
use crate::error::EngineError;
use crate::rules::check::is_in_check;
use crate::rules::legal::{en_passant_victim, has_any_legal_move, legal_moves};
use crate::types::{CapturedPieces, Color, GameState, MoveRecord, Piece, PieceKind, Position, Scores};

// Rook (from col, to col) when castling.
const KINGSIDE_ROOK: (u8, u8) = (7, 5);
const QUEENSIDE_ROOK: (u8, u8) = (0, 3);

/// Standard starting position, white to move.
pub fn create_initial_state() -> GameState {
    GameState::with_board(Board::new(), Color::White)
}

impl GameState {
    /// Builds a state for an arbitrary position with an empty history.
    /// Check, checkmate and stalemate are computed for `to_move`.
    pub fn with_board(board: Board, to_move: Color) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            moves: Vec::new(),
            captured_pieces: CapturedPieces::default(),
            scores: Scores::default(),
            en_passant_target: None,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            resigned: false,
            winner: None,
        };
        state.refresh_status();
        state
    }

    fn refresh_status(&mut self) {
        let to_move = self.current_player;
        let is_check = is_in_check(&self.board, to_move);
        let can_move = has_any_legal_move(&self.board, to_move, self.en_passant_target);

        self.is_check = is_check;
        self.is_checkmate = is_check && !can_move;
        self.is_stalemate = !is_check && !can_move;
        self.winner = self.is_checkmate.then(|| to_move.opponent());
    }
}

/// Applies `from -> to` and returns the resulting state.
///
/// Caller contract: `to` must come from `legal_moves` for `from` in this
/// state; nothing is re-validated here. Use [`try_apply_move`] for
/// untrusted input. An empty `from` returns the state unchanged.
pub fn apply_move(state: &GameState, from: Position, to: Position) -> GameState {
    let Some(piece) = state.board.get(from) else {
        return state.clone();
    };

    let mut board = state.board;
    let is_en_passant =
        piece.kind == PieceKind::Pawn && state.en_passant_target == Some(to);
    let captured = if is_en_passant {
        en_passant_victim(to, piece.color).and_then(|victim| board.take(victim))
    } else {
        board.get(to)
    };

    let is_castling = piece.kind == PieceKind::King && from.col.abs_diff(to.col) == 2;
    if is_castling {
        let (rook_from, rook_to) = if to.col == 6 { KINGSIDE_ROOK } else { QUEENSIDE_ROOK };
        if let Some(rook) = board.take(Position::new(from.row, rook_from)) {
            board.set(Position::new(from.row, rook_to), Some(rook.moved()));
        }
    }

    let is_promotion = piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row();
    let landed = if is_promotion {
        Piece::new(PieceKind::Queen, piece.color).moved()
    } else {
        piece.moved()
    };
    board.take(from);
    board.set(to, Some(landed));

    let en_passant_target = (piece.kind == PieceKind::Pawn && from.row.abs_diff(to.row) == 2)
        .then(|| Position::new((from.row + to.row) / 2, from.col));

    let mut captured_pieces = state.captured_pieces.clone();
    let mut scores = state.scores;
    if let Some(taken) = captured {
        captured_pieces.push(piece.color, taken);
        scores.add(piece.color, taken.kind.value());
    }

    let mut moves = state.moves.clone();
    moves.push(MoveRecord {
        from,
        to,
        piece,
        captured,
        is_promotion,
        is_castling,
        is_en_passant,
    });

    let mut next = GameState {
        board,
        current_player: state.current_player.opponent(),
        moves,
        captured_pieces,
        scores,
        en_passant_target,
        is_check: false,
        is_checkmate: false,
        is_stalemate: false,
        resigned: false,
        winner: None,
    };
    next.refresh_status();
    next
}

/// Validating wrapper around [`apply_move`].
pub fn try_apply_move(
    state: &GameState,
    from: Position,
    to: Position,
) -> Result<GameState, EngineError> {
    if state.is_game_over() {
        return Err(EngineError::GameOver);
    }
    for pos in [from, to] {
        if !pos.is_on_board() {
            return Err(EngineError::OffBoard(pos));
        }
    }

    let piece = state.board.get(from).ok_or(EngineError::EmptySquare(from))?;
    if piece.color != state.current_player {
        return Err(EngineError::NotYourPiece(from));
    }
    if !legal_moves(&state.board, from, state.en_passant_target).contains(&to) {
        return Err(EngineError::IllegalMove { from, to });
    }

    Ok(apply_move(state, from, to))
}

/// The side to move gives up. A finished game is returned unchanged.
pub fn resign(state: &GameState) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }
    GameState {
        resigned: true,
        winner: Some(state.current_player.opponent()),
        ..state.clone()
    }
}
