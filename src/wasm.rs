use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::EngineError;
use crate::notation::move_pairs;
use crate::session::GameInstance;
use crate::types::{Color, Position};

/// Browser-facing handle to one match.
#[wasm_bindgen]
pub struct ChessGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl ChessGame {
    #[wasm_bindgen(constructor)]
    pub fn new(white_name: &str, black_name: &str) -> Result<ChessGame, JsValue> {
        let inner = GameInstance::new(white_name, black_name).map_err(to_js_error)?;
        Ok(ChessGame { inner })
    }

    /// Current `GameState` as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    pub fn click(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let outcome = self.inner.click(Position::new(row, col));
        to_js(&outcome)
    }

    /// Destinations for the piece on `(row, col)`, empty unless it belongs to the side to move.
    pub fn legal_moves(&self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        to_js(&self.inner.legal_moves_from(Position::new(row, col)))
    }

    /// Plays a move and returns the new state; illegal moves are rejected with a message.
    pub fn make_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<JsValue, JsValue> {
        self.inner
            .make_move(
                Position::new(from_row, from_col),
                Position::new(to_row, to_col),
            )
            .map_err(to_js_error)?;
        to_js(self.inner.state())
    }

    pub fn move_history(&self) -> Result<JsValue, JsValue> {
        to_js(&move_pairs(&self.inner.state().moves))
    }

    pub fn match_score(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.match_score())
    }

    pub fn player_name(&self, white: bool) -> String {
        let color = if white { Color::White } else { Color::Black };
        self.inner.player_name(color).to_string()
    }

    pub fn new_game(&mut self) {
        self.inner.new_game();
    }

    pub fn resign(&mut self) -> Result<(), JsValue> {
        self.inner.resign().map_err(to_js_error)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
