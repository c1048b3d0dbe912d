//! Legal move filtering.
//!
//! Each geometric destination is played on a `Copy` of the placement and
//! kept only when the mover's own king is not attacked afterwards. The
//! simulation relocates and captures, nothing else: no turn switch, no
//! history, no status recomputation.

use crate::game_state::chess_rules::{castling_rook_cols, KING_START_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::piece_moves::moves_for;

/// Throwaway copy of `placement` with the piece on `from` moved to `to`.
#[inline]
pub fn simulate_move(placement: &Placement, from: Position, to: Position) -> Placement {
    let mut simulated = *placement;
    simulated.relocate(from, to);
    simulated
}

/// Legal destinations for `piece` under the simplified castling policy.
#[inline]
pub fn legal_moves_for(game_state: &GameState, piece: &Piece) -> Vec<Position> {
    legal_moves_for_with_policy(game_state, piece, CastlingPolicy::Simplified)
}

/// Legal destinations for `piece`, or nothing when `piece` is not the
/// occupant of its own square.
pub fn legal_moves_for_with_policy(
    game_state: &GameState,
    piece: &Piece,
    policy: CastlingPolicy,
) -> Vec<Position> {
    let Some(occupant) = game_state.piece_at(piece.position) else {
        return Vec::new();
    };
    if occupant.kind != piece.kind || occupant.color != piece.color {
        return Vec::new();
    }

    let mut legal = legal_moves_on(&game_state.placement, occupant);
    if policy == CastlingPolicy::FullyLegal && occupant.kind == PieceKind::King {
        legal.extend(castling_destinations(&game_state.placement, occupant));
    }
    legal
}

pub(crate) fn legal_moves_on(placement: &Placement, piece: &Piece) -> Vec<Position> {
    moves_for(placement, piece)
        .into_iter()
        .filter(|to| !is_king_in_check(&simulate_move(placement, piece.position, *to), piece.color))
        .collect()
}

/// Two-column king destinations allowed by full castling rules.
pub fn castling_destinations(placement: &Placement, king: &Piece) -> Vec<Position> {
    let row = king.color.back_row();
    if king.kind != PieceKind::King
        || king.has_moved
        || king.position != Position::new(row, KING_START_COL)
        || is_king_in_check(placement, king.color)
    {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2);
    for step in [1i8, -1] {
        let to = Position::new(row, KING_START_COL + 2 * step);
        let (rook_col, _) = castling_rook_cols(KING_START_COL, to.col);
        let rook_ok = placement.piece_at(Position::new(row, rook_col)).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
        if !rook_ok {
            continue;
        }

        let (low, high) = if rook_col > KING_START_COL {
            (KING_START_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_START_COL)
        };
        if !(low..high).all(|col| placement.is_empty_at(Position::new(row, col))) {
            continue;
        }

        let transit_safe = [1i8, 2].iter().all(|distance| {
            let square = Position::new(row, KING_START_COL + distance * step);
            !is_king_in_check(&simulate_move(placement, king.position, square), king.color)
        });
        if transit_safe {
            out.push(to);
        }
    }
    out
}

/// Every legal from/to pair for `color`.
pub fn all_legal_moves(
    game_state: &GameState,
    color: Color,
    policy: CastlingPolicy,
) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(48);
    for piece in game_state.placement.pieces_of(color) {
        for to in legal_moves_for_with_policy(game_state, piece, policy) {
            out.push(CandidateMove {
                from: piece.position,
                to,
            });
        }
    }
    out
}

pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .placement
        .pieces_of(color)
        .any(|piece| !legal_moves_on(&game_state.placement, piece).is_empty())
}
