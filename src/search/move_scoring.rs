//! One-ply heuristic scoring for the CPU opponent.
//!
//! Scores are from the mover's point of view: material balance after the
//! move, a bonus for the captured piece, small bonuses for check and center
//! control, and a large bonus for checkmate.

use crate::engines::engine_difficulty::Difficulty;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves_for};

pub const CAPTURE_BONUS_FACTOR: f64 = 1.2;
pub const CHECK_BONUS: f64 = 0.5;
pub const CHECKMATE_BONUS: f64 = 100.0;
pub const CENTER_CONTROL_BONUS: f64 = 0.2;

pub const CENTER_SQUARES: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: CandidateMove,
    pub score: f64,
}

#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

pub fn material_balance(placement: &Placement, color: Color) -> f64 {
    placement
        .pieces()
        .map(|p| {
            let value = piece_value(p.kind);
            if p.color == color {
                value
            } else {
                -value
            }
        })
        .sum()
}

pub fn evaluate_move(game_state: &GameState, mv: CandidateMove, difficulty: Difficulty) -> f64 {
    let mover = game_state.current_turn;
    let after = apply_move(game_state, mv.from, mv.to);

    let mut score = material_balance(&after.placement, mover);

    if let Some(captured) = game_state.piece_at(mv.to) {
        score += piece_value(captured.kind) * CAPTURE_BONUS_FACTOR;
    }
    if after.is_check {
        score += CHECK_BONUS;
    }
    if after.is_checkmate {
        score += CHECKMATE_BONUS;
    }

    if difficulty.values_center_control() {
        let controlled = after
            .placement
            .pieces_of(mover)
            .flat_map(|p| legal_moves_for(&after, p))
            .filter(|to| CENTER_SQUARES.contains(to))
            .count();
        score += controlled as f64 * CENTER_CONTROL_BONUS;
    }

    score
}

/// Every legal move of the side to move, best first. Ties keep generation order.
pub fn score_legal_moves(
    game_state: &GameState,
    difficulty: Difficulty,
    policy: CastlingPolicy,
) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = all_legal_moves(game_state, game_state.current_turn, policy)
        .into_iter()
        .map(|mv| ScoredMove {
            mv,
            score: evaluate_move(game_state, mv, difficulty),
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
