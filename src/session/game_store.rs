//! Storage interface for shared games.
//!
//! A store is injected into each session, so concurrent games and tests
//! never share hidden module state. Conflict resolution is last writer wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::utils::game_record::GameRecord;

/// Snapshot persisted per game id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredGame {
    pub record: GameRecord,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub type GameCallback = Box<dyn Fn(&StoredGame) + Send + Sync>;

/// Read-modify-write step for [`GameStore::update`]. Returning `None` leaves
/// the stored snapshot untouched.
pub type GameUpdate<'a> = &'a mut dyn FnMut(Option<&StoredGame>) -> Option<StoredGame>;

pub trait GameStore: Send + Sync {
    fn get(&self, game_id: &str) -> Result<Option<StoredGame>, ChessErrors>;

    /// Replace the snapshot for `game_id` and notify its subscribers.
    fn put(&self, game_id: &str, game: StoredGame) -> Result<(), ChessErrors>;

    /// Apply `update` to the current snapshot of `game_id` atomically with
    /// respect to other writers. Subscribers are notified only when a new
    /// snapshot is written. Returns the snapshot stored afterwards.
    fn update(&self, game_id: &str, update: GameUpdate<'_>) -> Result<Option<StoredGame>, ChessErrors>;

    fn subscribe(&self, game_id: &str, callback: GameCallback) -> Result<SubscriptionId, ChessErrors>;

    /// Returns `false` when the id was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, ChessErrors>;
}
