//! Pawn pushes and diagonal captures.
//!
//! The double step depends on `has_moved`, not on the pawn's row. There is no
//! en passant and no promotion: a pawn on the last rank stays a pawn with no
//! forward moves.

use crate::game_state::chess_types::{Piece, Placement, Position};

pub fn pawn_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(4);
    let forward = piece.color.forward();

    if let Some(one_step) = piece.position.offset(forward, 0) {
        if placement.is_empty_at(one_step) {
            out.push(one_step);

            if !piece.has_moved {
                if let Some(two_step) = piece.position.offset(2 * forward, 0) {
                    if placement.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = piece.position.offset(forward, d_col) else {
            continue;
        };
        if placement.is_occupied_by(diagonal, piece.color.opposite()) {
            out.push(diagonal);
        }
    }

    out
}
