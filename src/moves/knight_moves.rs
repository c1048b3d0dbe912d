use crate::game_state::chess_types::{Piece, Placement, Position};
use crate::moves::move_shared::step;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(8);
    step(placement, piece, &KNIGHT_OFFSETS, &mut out);
    out
}
