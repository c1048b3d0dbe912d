//! Core value types shared by every layer of the rules engine.
//!
//! Coordinates follow the screen layout used by the board UI: row 0 is the
//! dark back rank and row 7 the light back rank. Algebraic names are derived
//! from these coordinates and never the other way around.

use serde::{Deserialize, Serialize};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::placement::Placement;

/// Number of ranks and files.
pub const BOARD_SIZE: i8 = 8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Notation letter; pawns have none.
    #[inline]
    pub const fn letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Rook => "R",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

/// A square on the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Shift by `(d_row, d_col)`, or `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        let next = Position::new(self.row + d_row, self.col + d_col);
        if next.is_on_board() {
            Some(next)
        } else {
            None
        }
    }

    /// Arena slot (`row * 8 + col`). Only meaningful for on-board positions.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Position::new((index / 8) as i8, (index % 8) as i8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    /// Set on every move. Only the pawn double step reads it.
    #[serde(default)]
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// History entry appended by the move applier. `piece` is the pre-move snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<Piece>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_castling: bool,
}

/// A from/to pair as requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Position,
    pub to: Position,
}

/// How much castling legality is enforced.
///
/// `Simplified` never offers castling through the legal-move path and lets
/// the move applier castle on any two-column king move. `FullyLegal` offers
/// castling destinations only when neither king nor rook has moved, the path
/// is empty, and the king never stands on an attacked square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CastlingPolicy {
    #[default]
    Simplified,
    FullyLegal,
}

/// Summary of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate { winner: Color },
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, Position};

    #[test]
    fn offset_rejects_off_board_targets() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Position::new(1, 2)));
        assert_eq!(Position::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn index_round_trips_through_arena_slots() {
        for index in 0..64 {
            assert_eq!(Position::from_index(index).index(), index);
        }
        assert_eq!(Position::new(7, 4).index(), 60);
    }

    #[test]
    fn piece_serializes_with_type_and_has_moved_fields() {
        let piece = Piece::new(PieceKind::Knight, Color::Black, Position::new(0, 1));
        let json = serde_json::to_string(&piece).expect("piece should serialize");
        assert_eq!(
            json,
            r#"{"type":"knight","color":"black","position":{"row":0,"col":1},"hasMoved":false}"#
        );
    }

    #[test]
    fn forward_direction_matches_board_orientation() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.pawn_row() + Color::White.forward(), 5);
    }
}
