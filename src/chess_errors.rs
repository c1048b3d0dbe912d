//! Errors used outside the core rules.
//!
//! The rules engine itself never fails: illegal requests are absorbed as
//! no-ops or expressed by omission from the legal-move list. `ChessErrors`
//! covers the strict move entry point, notation parsing, record
//! (de)serialization, and the session layer.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Position};

#[derive(Debug)]
pub enum ChessErrors {
    /// A coordinate fell outside the 8x8 board.
    PositionOutOfBounds(Position),

    /// Algebraic square text (for example `e4`) could not be parsed.
    InvalidAlgebraicString(String),

    /// A move was requested from an empty square.
    NoPieceOnSquare(Position),

    /// The piece on the origin square belongs to the side not on move.
    NotYourTurn(Color),

    /// The destination is not in the piece's legal-move list.
    IllegalMove { from: Position, to: Position },

    /// The position is already checkmate.
    GameAlreadyOver,

    /// Two pieces in a serialized record claim the same square.
    DuplicateSquare(Position),

    /// A serialized record does not hold exactly one king of this color.
    KingCountMismatch { color: Color, count: usize },

    /// A serialized record claims checkmate without check.
    InconsistentStatusFlags,

    /// JSON encoding or decoding failed.
    Json(serde_json::Error),

    /// No game is stored under this id.
    UnknownGame(String),

    /// A session action needs a seated player, not a spectator.
    SpectatorCannotMove,

    /// The backing store refused or lost a write.
    StoreUnavailable(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::PositionOutOfBounds(p) => {
                write!(f, "position ({}, {}) is off the board", p.row, p.col)
            }
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::NoPieceOnSquare(p) => {
                write!(f, "no piece on ({}, {})", p.row, p.col)
            }
            ChessErrors::NotYourTurn(color) => write!(f, "it is not {color}'s turn"),
            ChessErrors::IllegalMove { from, to } => write!(
                f,
                "illegal move ({}, {}) -> ({}, {})",
                from.row, from.col, to.row, to.col
            ),
            ChessErrors::GameAlreadyOver => write!(f, "the game is already over"),
            ChessErrors::DuplicateSquare(p) => {
                write!(f, "two pieces occupy ({}, {})", p.row, p.col)
            }
            ChessErrors::KingCountMismatch { color, count } => {
                write!(f, "expected one {color} king, found {count}")
            }
            ChessErrors::InconsistentStatusFlags => {
                write!(f, "record is marked checkmate but not check")
            }
            ChessErrors::Json(e) => write!(f, "json error: {e}"),
            ChessErrors::UnknownGame(id) => write!(f, "unknown game: {id}"),
            ChessErrors::SpectatorCannotMove => write!(f, "spectators cannot move"),
            ChessErrors::StoreUnavailable(msg) => write!(f, "game store unavailable: {msg}"),
        }
    }
}

impl Error for ChessErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessErrors::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ChessErrors {
    fn from(value: serde_json::Error) -> Self {
        ChessErrors::Json(value)
    }
}
