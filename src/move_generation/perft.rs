//! Perft node counting over the public move API.

use crate::game_state::chess_types::{CastlingPolicy, GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    perft_with_policy(game_state, depth, CastlingPolicy::Simplified)
}

pub fn perft_with_policy(game_state: &GameState, depth: u8, policy: CastlingPolicy) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(game_state, game_state.current_turn, policy) {
        let next = apply_move(game_state, mv.from, mv.to);
        if depth == 1 {
            total.nodes += 1;
            if next.captured_pieces.len() > game_state.captured_pieces.len() {
                total.captures += 1;
            }
            if next.is_check {
                total.checks += 1;
            }
            if next.is_checkmate {
                total.checkmates += 1;
            }
        } else {
            total.merge(perft_with_policy(&next, depth - 1, policy));
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn startpos_perft_depth_one_and_two() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);
    }

    #[test]
    fn startpos_perft_depth_three() {
        let counts = perft(&GameState::new_game(), 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
    }
}
