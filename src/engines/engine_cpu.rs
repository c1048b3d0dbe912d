//! Difficulty-weighted CPU opponent.
//!
//! Scores every legal move one ply deep, sorts best first, and lets the
//! configured `Difficulty` choose an index into that list.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_difficulty::Difficulty;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{CastlingPolicy, GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::search::move_scoring::score_legal_moves;

pub struct CpuEngine {
    difficulty: Difficulty,
    castling_policy: CastlingPolicy,
    rng: StdRng,
}

impl CpuEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            castling_policy: CastlingPolicy::Simplified,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for tests and reproducible self-play.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            castling_policy: CastlingPolicy::Simplified,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_castling_policy(mut self, policy: CastlingPolicy) -> Self {
        self.castling_policy = policy;
        self
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine for CpuEngine {
    fn name(&self) -> &str {
        "DuoChess CPU"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors> {
        let scored = score_legal_moves(game_state, self.difficulty, self.castling_policy);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string cpu_engine difficulty {} legal_moves {}",
            self.difficulty,
            scored.len()
        ));

        let Some((index, picked)) = self
            .difficulty
            .select_index(scored.len(), &mut self.rng)
            .and_then(|index| scored.get(index).map(|picked| (index, *picked)))
        else {
            return Ok(out);
        };
        let best = scored.first().map_or(picked.score, |m| m.score);
        out.info_lines.push(format!(
            "info string cpu_engine rank {} score {:.2} best {:.2}",
            index + 1,
            picked.score,
            best
        ));
        log::debug!(
            "cpu {} picked rank {} of {} (score {:.2})",
            self.difficulty,
            index + 1,
            scored.len(),
            picked.score
        );

        out.best_move = Some(picked.mv);
        Ok(out)
    }
}

/// Let `engine` move for the side to move. The state is returned unchanged
/// when no legal move exists or the game is already decided.
pub fn play_engine_move(game_state: &GameState, engine: &mut dyn Engine) -> Result<GameState, ChessErrors> {
    if game_state.is_checkmate {
        return Ok(game_state.clone());
    }
    let output = engine.choose_move(game_state)?;
    for line in &output.info_lines {
        log::trace!("{line}");
    }
    Ok(match output.best_move {
        Some(mv) => apply_move(game_state, mv.from, mv.to),
        None => game_state.clone(),
    })
}
