use crate::game_state::chess_types::{Piece, Placement, Position};
use crate::moves::move_shared::{slide, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(placement: &Placement, piece: &Piece) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    slide(placement, piece, &ORTHOGONAL_DIRECTIONS, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Position::new(4, 3));
        let placement = Placement::from_pieces([rook]);
        assert_eq!(rook_moves(&placement, &rook).len(), 14);
    }

    #[test]
    fn enemy_blocker_is_captured_and_stops_ray() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Position::new(7, 0));
        let enemy = Piece::new(PieceKind::Knight, Color::Black, Position::new(5, 0));
        let placement = Placement::from_pieces([rook, enemy]);

        let moves = rook_moves(&placement, &rook);

        assert!(moves.contains(&Position::new(6, 0)));
        assert!(moves.contains(&Position::new(5, 0)));
        assert!(!moves.contains(&Position::new(4, 0)));
        assert!(!moves.contains(&Position::new(0, 0)));
    }

    #[test]
    fn friendly_blocker_is_excluded() {
        let rook = Piece::new(PieceKind::Rook, Color::Black, Position::new(0, 0));
        let own = Piece::new(PieceKind::Knight, Color::Black, Position::new(0, 1));
        let placement = Placement::from_pieces([rook, own]);

        let moves = rook_moves(&placement, &rook);

        assert!(!moves.contains(&own.position));
        assert!(moves.iter().all(|p| p.col == 0));
        assert_eq!(moves.len(), 7);
    }
}
