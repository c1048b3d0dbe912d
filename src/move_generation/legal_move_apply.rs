//! Move application: the only transition from one `GameState` to the next.
//!
//! `apply_move` is permissive. Requests from an empty square or onto the same
//! square return an unchanged copy. `try_apply_move` is the strict entry
//! point used by sessions and engines; it reports why a request was refused.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::castling_rook_cols;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves_for_with_policy;

pub fn apply_move(game_state: &GameState, from: Position, to: Position) -> GameState {
    if from == to {
        return game_state.clone();
    }
    let Some(moving) = game_state.piece_at(from).copied() else {
        log::debug!("apply_move ignored: no piece on {from:?}");
        return game_state.clone();
    };
    if !to.is_on_board() {
        log::debug!("apply_move ignored: destination {to:?} is off the board");
        return game_state.clone();
    }

    let mut next = game_state.clone();

    let captured = next.placement.take(to);
    if let Some(captured_piece) = captured {
        next.captured_pieces.push(captured_piece);
    }

    let is_castling = moving.kind == PieceKind::King && (from.col - to.col).abs() > 1;
    if is_castling {
        move_castling_rook(&mut next.placement, moving.color, from, to);
    }

    next.placement.take(from);
    next.placement.put(Piece {
        position: to,
        has_moved: true,
        ..moving
    });

    next.current_turn = next.current_turn.opposite();
    next.refresh_status();

    next.selected_piece = None;
    next.valid_moves.clear();

    next.move_history.push(MoveRecord {
        from,
        to,
        piece: moving,
        captured_piece: captured,
        is_castling,
    });

    if next.is_checkmate {
        log::info!("{} is checkmated", next.current_turn);
    } else if next.is_check {
        log::debug!("{} is in check", next.current_turn);
    }

    next
}

/// Rook half of castling. Skipped when the corner holds no own rook or the
/// rook's landing square is taken, so squares stay uniquely occupied.
fn move_castling_rook(placement: &mut Placement, color: Color, from: Position, to: Position) {
    let (rook_col, target_col) = castling_rook_cols(from.col, to.col);
    let rook_from = Position::new(from.row, rook_col);
    let rook_to = Position::new(from.row, target_col);

    let has_own_rook = placement
        .piece_at(rook_from)
        .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
    if !has_own_rook {
        log::debug!("castling without a rook on {rook_from:?}");
        return;
    }
    if rook_to == to || !placement.is_empty_at(rook_to) {
        log::debug!("castling rook landing square {rook_to:?} is occupied");
        return;
    }

    if let Some(rook) = placement.take(rook_from) {
        placement.put(Piece {
            position: rook_to,
            has_moved: true,
            ..rook
        });
    }
}

/// Strict variant of [`apply_move`]: the mover must be the side to move, the
/// game must not be over, and `to` must be a legal destination under `policy`.
pub fn try_apply_move(
    game_state: &GameState,
    from: Position,
    to: Position,
    policy: CastlingPolicy,
) -> Result<GameState, ChessErrors> {
    if game_state.is_checkmate {
        return Err(ChessErrors::GameAlreadyOver);
    }
    if !from.is_on_board() {
        return Err(ChessErrors::PositionOutOfBounds(from));
    }
    if !to.is_on_board() {
        return Err(ChessErrors::PositionOutOfBounds(to));
    }
    if from == to {
        return Err(ChessErrors::IllegalMove { from, to });
    }
    let piece = game_state
        .piece_at(from)
        .copied()
        .ok_or(ChessErrors::NoPieceOnSquare(from))?;
    if piece.color != game_state.current_turn {
        return Err(ChessErrors::NotYourTurn(piece.color));
    }
    if !legal_moves_for_with_policy(game_state, &piece, policy).contains(&to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }
    Ok(apply_move(game_state, from, to))
}
