//! Seat assignment and move submission for shared games.
//!
//! A session reads the authoritative snapshot from its store, validates the
//! request with the strict move entry point, and writes the successor back.

use std::sync::Arc;

use chrono::Utc;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{CastlingPolicy, Color, GameState, Position};
use crate::move_generation::legal_move_apply::try_apply_move;
use crate::session::game_store::{GameStore, StoredGame, SubscriptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player(Color),
    Spectator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    pub seat: Seat,
    pub opponent_joined: bool,
}

pub struct GameSession {
    store: Arc<dyn GameStore>,
    game_id: String,
    player_id: String,
    seat: Seat,
    castling_policy: CastlingPolicy,
}

impl GameSession {
    /// Join `game_id`, creating it when absent.
    ///
    /// Returning players keep their color. Otherwise the white seat is filled
    /// first, then black. A full game yields a spectator seat. The seat is
    /// decided inside a single store update, so concurrent joins never share
    /// a color.
    pub fn join(
        store: Arc<dyn GameStore>,
        game_id: &str,
        player_id: &str,
    ) -> Result<(Self, JoinOutcome), ChessErrors> {
        let mut outcome = None;
        store.update(game_id, &mut |current: Option<&StoredGame>| match current {
            None => {
                outcome = Some(JoinOutcome {
                    seat: Seat::Player(Color::White),
                    opponent_joined: false,
                });
                Some(StoredGame {
                    record: GameState::new_game().to_record(),
                    white_player: Some(player_id.to_owned()),
                    black_player: None,
                    updated_at: Utc::now(),
                })
            }
            Some(game) => {
                let mut game = game.clone();
                let assignment = seat_for(&mut game, player_id);
                outcome = Some(assignment.join);
                assignment.changed.then(|| StoredGame {
                    updated_at: Utc::now(),
                    ..game
                })
            }
        })?;
        let outcome = outcome
            .ok_or_else(|| ChessErrors::StoreUnavailable(format!("no seat decided for game {game_id}")))?;

        log::info!("{player_id} joined game {game_id} as {:?}", outcome.seat);

        Ok((
            Self {
                store,
                game_id: game_id.to_owned(),
                player_id: player_id.to_owned(),
                seat: outcome.seat,
                castling_policy: CastlingPolicy::Simplified,
            },
            outcome,
        ))
    }

    pub fn with_castling_policy(mut self, policy: CastlingPolicy) -> Self {
        self.castling_policy = policy;
        self
    }

    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[inline]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    fn load(&self) -> Result<StoredGame, ChessErrors> {
        self.store
            .get(&self.game_id)?
            .ok_or_else(|| ChessErrors::UnknownGame(self.game_id.clone()))
    }

    pub fn state(&self) -> Result<GameState, ChessErrors> {
        GameState::from_record(self.load()?.record)
    }

    pub fn is_player_turn(&self) -> Result<bool, ChessErrors> {
        Ok(match self.seat {
            Seat::Player(color) => self.state()?.current_turn == color,
            Seat::Spectator => false,
        })
    }

    pub fn opponent_connected(&self) -> Result<bool, ChessErrors> {
        let game = self.load()?;
        Ok(match self.seat {
            Seat::Player(Color::White) => game.black_player.is_some(),
            Seat::Player(Color::Black) => game.white_player.is_some(),
            Seat::Spectator => game.white_player.is_some() && game.black_player.is_some(),
        })
    }

    /// Validate and play `from -> to` for this player, then publish the result.
    pub fn submit_move(&self, from: Position, to: Position) -> Result<GameState, ChessErrors> {
        let Seat::Player(color) = self.seat else {
            return Err(ChessErrors::SpectatorCannotMove);
        };

        let mut game = self.load()?;
        let state = GameState::from_record(game.record.clone())?;
        if state.is_checkmate {
            return Err(ChessErrors::GameAlreadyOver);
        }
        if state.current_turn != color {
            return Err(ChessErrors::NotYourTurn(color));
        }

        let next = try_apply_move(&state, from, to, self.castling_policy)?;
        game.record = next.to_record();
        game.updated_at = Utc::now();
        self.store.put(&self.game_id, game)?;

        log::debug!(
            "{} played {:?} -> {:?} in game {}",
            self.player_id,
            from,
            to,
            self.game_id
        );
        Ok(next)
    }

    /// Replace the game with a fresh starting position, keeping the seats.
    pub fn reset(&self) -> Result<GameState, ChessErrors> {
        if self.seat == Seat::Spectator {
            return Err(ChessErrors::SpectatorCannotMove);
        }
        let mut game = self.load()?;
        let fresh = GameState::new_game();
        game.record = fresh.to_record();
        game.updated_at = Utc::now();
        self.store.put(&self.game_id, game)?;
        log::info!("game {} reset by {}", self.game_id, self.player_id);
        Ok(fresh)
    }

    /// Deliver every published state of this game to `callback`.
    /// Snapshots that fail to load are logged and skipped.
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId, ChessErrors>
    where
        F: Fn(GameState) + Send + Sync + 'static,
    {
        let game_id = self.game_id.clone();
        self.store.subscribe(
            &self.game_id,
            Box::new(move |stored: &StoredGame| {
                match GameState::from_record(stored.record.clone()) {
                    Ok(state) => callback(state),
                    Err(e) => log::warn!("dropping unreadable snapshot for game {game_id}: {e}"),
                }
            }),
        )
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, ChessErrors> {
        self.store.unsubscribe(id)
    }
}

struct SeatAssignment {
    join: JoinOutcome,
    changed: bool,
}

fn seat_for(game: &mut StoredGame, player_id: &str) -> SeatAssignment {
    let is = |seat: &Option<String>| seat.as_deref() == Some(player_id);

    let (seat, changed) = if is(&game.white_player) {
        (Seat::Player(Color::White), false)
    } else if is(&game.black_player) {
        (Seat::Player(Color::Black), false)
    } else if game.white_player.is_none() {
        game.white_player = Some(player_id.to_owned());
        (Seat::Player(Color::White), true)
    } else if game.black_player.is_none() {
        game.black_player = Some(player_id.to_owned());
        (Seat::Player(Color::Black), true)
    } else {
        (Seat::Spectator, false)
    };

    let opponent_joined = match seat {
        Seat::Player(Color::White) => game.black_player.is_some(),
        Seat::Player(Color::Black) => game.white_player.is_some(),
        Seat::Spectator => false,
    };

    SeatAssignment {
        join: JoinOutcome {
            seat,
            opponent_joined,
        },
        changed,
    }
}
