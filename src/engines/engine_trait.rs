//! Engine abstraction for computer opponents.
//!
//! Engines sit outside the rules engine and only consume the public legal
//! move and move application operations.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CandidateMove, GameState};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<CandidateMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors>;
}
