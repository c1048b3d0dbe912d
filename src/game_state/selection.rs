//! Click-driven selection flow for board UIs.
//!
//! The UI never applies geometric moves directly: a destination must appear in
//! the cached `valid_moves`, which always comes from the legal-move filter.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves_for_with_policy;

/// Resolve a click on `position` into the next state.
///
/// - checkmated game: unchanged
/// - click on the selected piece: deselect
/// - click on a cached valid destination: apply the move
/// - click on a piece of the side to move: select it and cache its legal moves
/// - anything else: clear the selection
pub fn select_square(game_state: &GameState, position: Position, policy: CastlingPolicy) -> GameState {
    if game_state.is_checkmate {
        return game_state.clone();
    }

    if let Some(selected) = game_state.selected_piece {
        if selected.position == position {
            return cleared(game_state);
        }
        if game_state.valid_moves.contains(&position) {
            return apply_move(game_state, selected.position, position);
        }
    }

    match game_state.piece_at(position) {
        Some(piece) if piece.color == game_state.current_turn => {
            let mut next = game_state.clone();
            next.valid_moves = legal_moves_for_with_policy(game_state, piece, policy);
            next.selected_piece = Some(*piece);
            next
        }
        _ => cleared(game_state),
    }
}

fn cleared(game_state: &GameState) -> GameState {
    let mut next = game_state.clone();
    next.selected_piece = None;
    next.valid_moves.clear();
    next
}
