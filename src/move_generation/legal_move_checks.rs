//! Check detection.
//!
//! Attack tests run the raw per-piece generators of every opposing piece.
//! They must never go through the legal-move filter, which itself calls back
//! into this module.

use crate::game_state::chess_types::{Color, GameState, Piece, Placement, Position};
use crate::moves::piece_moves::moves_for;

#[inline]
pub fn king_position(placement: &Placement, color: Color) -> Option<Position> {
    placement.king_position(color)
}

/// `false` when `color` has no king on the board.
pub fn is_king_in_check(placement: &Placement, color: Color) -> bool {
    let Some(king_sq) = king_position(placement, color) else {
        return false;
    };
    placement
        .pieces_of(color.opposite())
        .any(|attacker| moves_for(placement, attacker).contains(&king_sq))
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check(&game_state.placement, color)
}

/// Opposing pieces whose raw moves include `target`.
pub fn attackers_of(placement: &Placement, target: Position, attacker_color: Color) -> Vec<Piece> {
    placement
        .pieces_of(attacker_color)
        .filter(|attacker| moves_for(placement, attacker).contains(&target))
        .copied()
        .collect()
}
