//! Checkmate detection. Stalemate is deliberately not reported.

use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// `true` only when `color` is in check and has no legal move at all.
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    if !is_king_in_check(&game_state.placement, color) {
        return false;
    }
    !has_legal_move(game_state, color)
}
