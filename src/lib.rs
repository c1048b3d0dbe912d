//! Crate root module declarations for the Duo Chess rules engine.
//!
//! The rules core lives in `game_state`, `moves`, and `move_generation`.
//! Everything else (CPU opponent, session layer, notation, and rendering)
//! consumes the core through `legal_moves_for` and `apply_move`.

pub mod chess_errors;
pub mod game_config;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod placement;
    pub mod selection;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checkmate;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod move_scoring;
}

pub mod engines {
    pub mod engine_cpu;
    pub mod engine_difficulty;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
    pub mod game_store;
    pub mod in_memory_store;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_record;
    pub mod notation;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{
    CandidateMove, CastlingPolicy, Color, GameState, GameStatus, MoveRecord, Piece, PieceKind,
    Placement, Position,
};
pub use game_state::game_state::piece_at;
pub use move_generation::legal_move_apply::{apply_move, try_apply_move};
pub use move_generation::legal_move_checkmate::is_checkmate;
pub use move_generation::legal_move_checks::{is_in_check, is_king_in_check};
pub use move_generation::legal_move_generator::{legal_moves_for, legal_moves_for_with_policy};
pub use moves::piece_moves::moves_for;
