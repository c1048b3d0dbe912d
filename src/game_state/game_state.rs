//! Full game value handed between the rules engine and its callers.
//!
//! `GameState` is never mutated once returned to a caller; every transition
//! clones it and returns the successor. The selection fields are transient UI
//! state carried alongside the authoritative game fields.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::starting_pieces;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checkmate::is_checkmate;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::game_record::{game_state_from_json, game_state_to_json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub placement: Placement,

    // --- UI selection (not persisted) ---
    pub selected_piece: Option<Piece>,
    pub valid_moves: Vec<Position>,

    // --- Side and status flags, relative to `current_turn` ---
    pub current_turn: Color,
    pub is_check: bool,
    pub is_checkmate: bool,

    // --- Append-only bookkeeping ---
    pub captured_pieces: Vec<Piece>,
    pub move_history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            placement: Placement::empty(),
            selected_piece: None,
            valid_moves: Vec::new(),
            current_turn: Color::White,
            is_check: false,
            is_checkmate: false,
            captured_pieces: Vec::new(),
            move_history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            placement: Placement::from_pieces(starting_pieces()),
            ..Self::default()
        }
    }

    /// Arbitrary setup with check and checkmate flags derived for `current_turn`.
    pub fn from_pieces<I: IntoIterator<Item = Piece>>(pieces: I, current_turn: Color) -> Self {
        let mut state = Self {
            placement: Placement::from_pieces(pieces),
            current_turn,
            ..Self::default()
        };
        state.refresh_status();
        state
    }

    #[inline]
    pub fn from_json(json: &str) -> Result<Self, ChessErrors> {
        game_state_from_json(json)
    }

    #[inline]
    pub fn to_json(&self) -> Result<String, ChessErrors> {
        game_state_to_json(self)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.placement.piece_at(position)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.placement.pieces()
    }

    /// Recomputes `is_check`/`is_checkmate` for the side to move.
    pub fn refresh_status(&mut self) {
        self.is_check = is_king_in_check(&self.placement, self.current_turn);
        self.is_checkmate = self.is_check && is_checkmate(self, self.current_turn);
    }

    pub fn status(&self) -> GameStatus {
        if self.is_checkmate {
            GameStatus::Checkmate {
                winner: self.current_turn.opposite(),
            }
        } else if self.is_check {
            GameStatus::Check(self.current_turn)
        } else {
            GameStatus::InProgress
        }
    }
}

/// Free-function form of [`GameState::piece_at`].
#[inline]
pub fn piece_at(state: &GameState, position: Position) -> Option<&Piece> {
    state.piece_at(position)
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::BACK_RANK_ORDER;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_standard_layout() {
        let game = GameState::new_game();

        assert_eq!(game.placement.pieces_of(Color::White).count(), 16);
        assert_eq!(game.placement.pieces_of(Color::Black).count(), 16);
        for col in 0..8 {
            let white_pawn = game.piece_at(Position::new(6, col)).expect("white pawn");
            let black_pawn = game.piece_at(Position::new(1, col)).expect("black pawn");
            assert_eq!((white_pawn.kind, white_pawn.color), (PieceKind::Pawn, Color::White));
            assert_eq!((black_pawn.kind, black_pawn.color), (PieceKind::Pawn, Color::Black));

            let expected = BACK_RANK_ORDER[col as usize];
            assert_eq!(game.piece_at(Position::new(7, col)).map(|p| p.kind), Some(expected));
            assert_eq!(game.piece_at(Position::new(0, col)).map(|p| p.kind), Some(expected));
        }

        assert_eq!(game.current_turn, Color::White);
        assert!(!game.is_check);
        assert!(!game.is_checkmate);
        assert!(game.captured_pieces.is_empty());
        assert!(game.move_history.is_empty());
        assert!(game.selected_piece.is_none());
        assert!(game.valid_moves.is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn from_pieces_derives_check_flag() {
        let game = GameState::from_pieces(
            [
                Piece::new(PieceKind::King, Color::White, Position::new(7, 4)),
                Piece::new(PieceKind::King, Color::Black, Position::new(0, 0)),
                Piece::new(PieceKind::Rook, Color::Black, Position::new(0, 4)),
            ],
            Color::White,
        );

        assert!(game.is_check);
        assert!(!game.is_checkmate);
        assert_eq!(game.status(), GameStatus::Check(Color::White));
    }
}
