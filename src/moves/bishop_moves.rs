use crate::game_state::chess_types::{Piece, Placement, Position};
use crate::moves::move_shared::{slide, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(13);
    slide(placement, piece, &DIAGONAL_DIRECTIONS, &mut out);
    out
}
