//! Plain structured record for persistence and transport.
//!
//! Field names follow the camelCase layout stored by the synchronization
//! collaborator. Selection state is written when present but always reset on
//! load, since it is transient UI state rather than game state.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub pieces: Vec<Piece>,
    #[serde(default)]
    pub selected_piece: Option<Piece>,
    #[serde(default)]
    pub valid_moves: Vec<Position>,
    pub current_turn: Color,
    #[serde(default)]
    pub is_check: bool,
    #[serde(default)]
    pub is_checkmate: bool,
    #[serde(default)]
    pub captured_pieces: Vec<Piece>,
    #[serde(default)]
    pub move_history: Vec<MoveRecord>,
}

impl GameState {
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            pieces: self.placement.pieces().copied().collect(),
            selected_piece: self.selected_piece,
            valid_moves: self.valid_moves.clone(),
            current_turn: self.current_turn,
            is_check: self.is_check,
            is_checkmate: self.is_checkmate,
            captured_pieces: self.captured_pieces.clone(),
            move_history: self.move_history.clone(),
        }
    }

    /// Rebuilds a state, rejecting off-board pieces, shared squares, a king
    /// count other than one per color, and checkmate without check. Flags are
    /// otherwise taken as stored, not recomputed.
    pub fn from_record(record: GameRecord) -> Result<Self, ChessErrors> {
        if record.is_checkmate && !record.is_check {
            return Err(ChessErrors::InconsistentStatusFlags);
        }

        let mut placement = Placement::empty();
        for piece in &record.pieces {
            if !piece.position.is_on_board() {
                return Err(ChessErrors::PositionOutOfBounds(piece.position));
            }
            if placement.put(*piece).is_some() {
                return Err(ChessErrors::DuplicateSquare(piece.position));
            }
        }

        for color in [Color::White, Color::Black] {
            let count = placement
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(ChessErrors::KingCountMismatch { color, count });
            }
        }

        Ok(Self {
            placement,
            selected_piece: None,
            valid_moves: Vec::new(),
            current_turn: record.current_turn,
            is_check: record.is_check,
            is_checkmate: record.is_checkmate,
            captured_pieces: record.captured_pieces,
            move_history: record.move_history,
        })
    }
}

pub fn game_state_to_json(game_state: &GameState) -> Result<String, ChessErrors> {
    Ok(serde_json::to_string(&game_state.to_record())?)
}

pub fn game_state_from_json(json: &str) -> Result<GameState, ChessErrors> {
    let record: GameRecord = serde_json::from_str(json)?;
    GameState::from_record(record)
}
