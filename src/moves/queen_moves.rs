use crate::game_state::chess_types::{Piece, Placement, Position};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Union of the rook and bishop rays from the same square.
#[inline]
pub fn queen_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = rook_moves(placement, piece);
    out.extend(bishop_moves(placement, piece));
    out
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_in_center_reaches_twenty_seven_squares() {
        let queen = Piece::new(PieceKind::Queen, Color::Black, Position::new(4, 3));
        let placement = Placement::from_pieces([queen]);
        assert_eq!(queen_moves(&placement, &queen).len(), 27);
    }

    #[test]
    fn queen_rays_stop_at_blockers() {
        let queen = Piece::new(PieceKind::Queen, Color::White, Position::new(4, 3));
        let enemy = Piece::new(PieceKind::Pawn, Color::Black, Position::new(2, 1));
        let own = Piece::new(PieceKind::Pawn, Color::White, Position::new(4, 5));
        let placement = Placement::from_pieces([queen, enemy, own]);

        let moves = queen_moves(&placement, &queen);

        assert!(moves.contains(&enemy.position));
        assert!(!moves.contains(&Position::new(1, 0)));
        assert!(moves.contains(&Position::new(4, 4)));
        assert!(!moves.contains(&own.position));
        assert!(!moves.contains(&Position::new(4, 6)));
    }
}
