//! King step generation.
//!
//! Only the eight adjacent squares are produced here. Castling destinations
//! come from the legal-move layer under `CastlingPolicy::FullyLegal`, and the
//! two-column king move itself is carried out by the move applier.

use crate::game_state::chess_types::{Piece, Placement, Position};
use crate::moves::move_shared::step;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(8);
    step(placement, piece, &KING_OFFSETS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::king_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_in_corner_has_three_targets() {
        let king = Piece::new(PieceKind::King, Color::White, Position::new(7, 7));
        let placement = Placement::from_pieces([king]);
        assert_eq!(king_moves(&placement, &king).len(), 3);
    }

    #[test]
    fn king_never_generates_castling_squares() {
        let king = Piece::new(PieceKind::King, Color::White, Position::new(7, 4));
        let rook = Piece::new(PieceKind::Rook, Color::White, Position::new(7, 7));
        let placement = Placement::from_pieces([king, rook]);

        let moves = king_moves(&placement, &king);

        assert!(!moves.contains(&Position::new(7, 6)));
        assert!(!moves.contains(&Position::new(7, 2)));
        assert_eq!(moves.len(), 5);
    }
}
