#![cfg(target_arch = "wasm32")]

use chess_core::wasm::ChessGame;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn wasm_ready_reports_true() {
    assert!(chess_core::wasm_ready());
}

#[wasm_bindgen_test]
fn blank_name_is_rejected() {
    assert!(ChessGame::new("", "Bob").is_err());
}

#[wasm_bindgen_test]
fn opening_knight_has_two_destinations() {
    let game = ChessGame::new("Alice", "Bob").unwrap();

    let moves = Array::from(&game.legal_moves(7, 6).unwrap());

    assert_eq!(moves.length(), 2);
}

#[wasm_bindgen_test]
fn make_move_returns_state_with_black_to_move() {
    let mut game = ChessGame::new("Alice", "Bob").unwrap();

    let state = game.make_move(6, 4, 4, 4).unwrap();

    let player = Reflect::get(&state, &JsValue::from_str("current_player")).unwrap();
    assert_eq!(player.as_string().as_deref(), Some("black"));
    let history = Array::from(&game.move_history().unwrap());
    assert_eq!(history.length(), 1);
}

#[wasm_bindgen_test]
fn illegal_move_is_an_error() {
    let mut game = ChessGame::new("Alice", "Bob").unwrap();

    assert!(game.make_move(6, 4, 3, 4).is_err());
}
