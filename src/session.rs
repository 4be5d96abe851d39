use serde::Serialize;

use crate::error::EngineError;
use crate::game::{apply_move, create_initial_state, resign, try_apply_move};
use crate::notation::square_name;
use crate::rules::legal::legal_moves;
use crate::types::{Color, GameState, Position};

/// Results tallied across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub white: u32,
    pub black: u32,
    pub draws: u32,
}

/// What a board click did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The game is over; clicks do nothing.
    Ignored,
    Selected {
        from: Position,
        destinations: Vec<Position>,
    },
    Moved {
        from: Position,
        to: Position,
    },
    Cleared,
}

/// One two-player match: current game, piece selection and running score.
pub struct GameInstance {
    white_name: String,
    black_name: String,
    state: GameState,
    selected: Option<Position>,
    destinations: Vec<Position>,
    match_score: MatchScore,
}

impl GameInstance {
    /// Names are trimmed; a blank name is rejected.
    pub fn new(white_name: &str, black_name: &str) -> Result<Self, EngineError> {
        let white_name = white_name.trim();
        let black_name = black_name.trim();
        if white_name.is_empty() {
            return Err(EngineError::MissingPlayerName(Color::White));
        }
        if black_name.is_empty() {
            return Err(EngineError::MissingPlayerName(Color::Black));
        }

        console_log!("new match: {white_name} (white) vs {black_name} (black)");
        Ok(Self {
            white_name: white_name.to_string(),
            black_name: black_name.to_string(),
            state: create_initial_state(),
            selected: None,
            destinations: Vec::new(),
            match_score: MatchScore::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_name,
            Color::Black => &self.black_name,
        }
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }

    pub fn match_score(&self) -> MatchScore {
        self.match_score
    }

    /// Legal destinations for a piece of the side to move; empty otherwise.
    pub fn legal_moves_from(&self, pos: Position) -> Vec<Position> {
        if self.state.is_game_over() {
            return Vec::new();
        }
        match self.state.board.get(pos) {
            Some(piece) if piece.color == self.state.current_player => {
                legal_moves(&self.state.board, pos, self.state.en_passant_target)
            }
            _ => Vec::new(),
        }
    }

    /// Click on a square: move to a highlighted destination, select a piece
    /// of the side to move, or clear the selection.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.state.is_game_over() {
            return ClickOutcome::Ignored;
        }

        if let Some(from) = self.selected
            && self.destinations.contains(&pos)
        {
            let next = apply_move(&self.state, from, pos);
            self.commit(next);
            return ClickOutcome::Moved { from, to: pos };
        }

        if self
            .state
            .board
            .get(pos)
            .is_some_and(|piece| piece.color == self.state.current_player)
        {
            self.selected = Some(pos);
            self.destinations = legal_moves(&self.state.board, pos, self.state.en_passant_target);
            return ClickOutcome::Selected {
                from: pos,
                destinations: self.destinations.clone(),
            };
        }

        self.clear_selection();
        ClickOutcome::Cleared
    }

    /// Plays `from -> to` directly, validating it first.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<(), EngineError> {
        let next = try_apply_move(&self.state, from, to).inspect_err(|err| {
            console_log!("rejected move: {err}");
        })?;
        self.commit(next);
        Ok(())
    }

    /// The side to move resigns the current game.
    pub fn resign(&mut self) -> Result<(), EngineError> {
        if self.state.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let next = resign(&self.state);
        self.commit(next);
        Ok(())
    }

    /// Starts a fresh game, keeping names and the match score.
    pub fn new_game(&mut self) {
        self.state = create_initial_state();
        self.clear_selection();
        console_log!("new game");
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations.clear();
    }

    fn commit(&mut self, next: GameState) {
        if let Some(record) = next.last_move()
            && next.moves.len() > self.state.moves.len()
        {
            console_log!(
                "{} -> {}",
                square_name(record.from).unwrap_or_default(),
                square_name(record.to).unwrap_or_default()
            );
        }

        self.state = next;
        self.clear_selection();

        if !self.state.is_game_over() {
            return;
        }
        match self.state.winner {
            Some(Color::White) => self.match_score.white += 1,
            Some(Color::Black) => self.match_score.black += 1,
            None => self.match_score.draws += 1,
        }
        console_log!(
            "game over: checkmate={} stalemate={} resigned={} winner={:?}",
            self.state.is_checkmate,
            self.state.is_stalemate,
            self.state.resigned,
            self.state.winner
        );
    }
}
