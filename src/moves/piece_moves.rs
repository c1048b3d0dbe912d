//! Geometric move dispatch by piece kind.
//!
//! This is the raw layer: no check simulation happens here. The check
//! detector calls only into this module, never into the legal-move filter.

use crate::game_state::chess_types::{Piece, PieceKind, Placement, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub fn moves_for(placement: &Placement, piece: &Piece) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(placement, piece),
        PieceKind::Rook => rook_moves(placement, piece),
        PieceKind::Knight => knight_moves(placement, piece),
        PieceKind::Bishop => bishop_moves(placement, piece),
        PieceKind::Queen => queen_moves(placement, piece),
        PieceKind::King => king_moves(placement, piece),
    }
}

#[cfg(test)]
mod tests {
    use super::moves_for;
    use crate::game_state::chess_types::*;

    #[test]
    fn start_position_has_twenty_geometric_moves_for_white() {
        let game = GameState::new_game();
        let total: usize = game
            .placement
            .pieces_of(Color::White)
            .map(|p| moves_for(&game.placement, p).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn no_destination_holds_an_own_piece() {
        let game = GameState::new_game();
        for piece in game.pieces() {
            for target in moves_for(&game.placement, piece) {
                assert!(!game.placement.is_occupied_by(target, piece.color));
                assert!(target.is_on_board());
            }
        }
    }
}
