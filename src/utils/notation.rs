//! Display-only move text for history panels.
//!
//! Nothing here feeds back into rules decisions.

use crate::game_state::chess_types::MoveRecord;
use crate::utils::algebraic::position_to_algebraic;

/// Piece letter, origin, `x` for a capture, destination. Castling renders as
/// `O-O` toward column 7 and `O-O-O` toward column 0.
pub fn format_move(record: &MoveRecord) -> String {
    if record.is_castling {
        return if record.to.col > record.from.col {
            "O-O".to_owned()
        } else {
            "O-O-O".to_owned()
        };
    }

    let from = position_to_algebraic(record.from).unwrap_or_default();
    let to = position_to_algebraic(record.to).unwrap_or_default();
    let capture = if record.captured_piece.is_some() { "x" } else { "" };
    format!("{}{from}{capture}{to}", record.piece.kind.letter())
}

/// One numbered line of a two-column history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub number: usize,
    pub white: String,
    pub black: Option<String>,
}

pub fn move_history_rows(history: &[MoveRecord]) -> Vec<HistoryRow> {
    history
        .chunks(2)
        .enumerate()
        .map(|(idx, pair)| HistoryRow {
            number: idx + 1,
            white: format_move(&pair[0]),
            black: pair.get(1).map(format_move),
        })
        .collect()
}

/// History as `1. e2e4 e7e5 2. ...` on a single line.
pub fn move_history_text(history: &[MoveRecord]) -> String {
    move_history_rows(history)
        .iter()
        .map(|row| match &row.black {
            Some(black) => format!("{}. {} {}", row.number, row.white, black),
            None => format!("{}. {}", row.number, row.white),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
