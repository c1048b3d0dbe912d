//! Flat piece arena indexed by `row * 8 + col`.
//!
//! `Placement` is `Copy`, so simulated boards used for self-check filtering
//! are independent values and never alias the caller's position.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    squares: [Option<Piece>; 64],
}

impl Default for Placement {
    fn default() -> Self {
        Self::empty()
    }
}

impl Placement {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Builds a placement, later pieces replacing earlier ones on the same square.
    pub fn from_pieces<I: IntoIterator<Item = Piece>>(pieces: I) -> Self {
        let mut placement = Self::empty();
        for piece in pieces {
            placement.put(piece);
        }
        placement
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.index()].as_ref()
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn is_occupied_by(&self, position: Position, color: Color) -> bool {
        self.piece_at(position).is_some_and(|p| p.color == color)
    }

    /// Places `piece` on its own `position`, returning whatever was there.
    /// Off-board pieces are ignored.
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        if !piece.position.is_on_board() {
            return None;
        }
        self.squares[piece.position.index()].replace(piece)
    }

    pub fn take(&mut self, position: Position) -> Option<Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.index()].take()
    }

    /// Moves the piece at `from` onto `to` and returns the displaced piece, if any.
    /// Does nothing when `from` is empty.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        if from == to || !to.is_on_board() {
            return None;
        }
        let mut piece = self.take(from)?;
        piece.position = to;
        self.put(piece)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().filter_map(Option::as_ref)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }
}

#[cfg(test)]
mod tests {
    use super::Placement;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn relocate_returns_displaced_piece() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Position::new(7, 0));
        let pawn = Piece::new(PieceKind::Pawn, Color::Black, Position::new(3, 0));
        let mut placement = Placement::from_pieces([rook, pawn]);

        let captured = placement.relocate(rook.position, pawn.position);

        assert_eq!(captured, Some(pawn));
        assert!(placement.is_empty_at(rook.position));
        assert_eq!(
            placement.piece_at(pawn.position).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(placement.len(), 1);
    }

    #[test]
    fn copies_are_independent() {
        let king = Piece::new(PieceKind::King, Color::Black, Position::new(0, 4));
        let original = Placement::from_pieces([king]);
        let mut copy = original;
        copy.take(king.position);

        assert_eq!(original.king_position(Color::Black), Some(king.position));
        assert_eq!(copy.king_position(Color::Black), None);
    }

    #[test]
    fn off_board_lookups_are_empty() {
        let placement = Placement::empty();
        assert!(placement.piece_at(Position::new(-1, 3)).is_none());
        assert!(placement.piece_at(Position::new(3, 8)).is_none());
    }
}
