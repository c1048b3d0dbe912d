//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout and the fixed squares the move applier
//! relies on for castling.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position, BOARD_SIZE};

/// Back rank from column 0 to column 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: i8 = 4;
pub const QUEENSIDE_ROOK_COL: i8 = 0;
pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;

/// The 32 pieces of the standard starting position.
pub fn starting_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        for col in 0..BOARD_SIZE {
            pieces.push(Piece::new(
                PieceKind::Pawn,
                color,
                Position::new(color.pawn_row(), col),
            ));
        }
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            pieces.push(Piece::new(
                *kind,
                color,
                Position::new(color.back_row(), col as i8),
            ));
        }
    }
    pieces
}

/// Rook origin and destination columns for a king travelling `from_col -> to_col`.
#[inline]
pub const fn castling_rook_cols(from_col: i8, to_col: i8) -> (i8, i8) {
    if to_col > from_col {
        (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
    } else {
        (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
    }
}
