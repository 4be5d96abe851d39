//! Move generation, attack detection and the legality filter.

pub mod check;
pub mod legal;
pub mod movegen;

pub use check::{is_in_check, is_square_attacked};
pub use legal::{has_any_legal_move, legal_moves};
pub use movegen::raw_moves;
