//! Conversions between board coordinates and algebraic square names.
//!
//! `file = 'a' + col` and `rank = 8 - row`, so row 7 col 4 is `e1`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Convert a square name (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok(Position::new(row, col))
}

/// Convert a position to its square name (for example: "e4").
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_on_board() {
        return Err(ChessErrors::PositionOutOfBounds(position));
    }

    let file_char = char::from(b'a' + position.col as u8);
    let rank = 8 - position.row;
    Ok(format!("{file_char}{rank}"))
}
