use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::chess_errors::ChessErrors;
use crate::session::game_store::{GameCallback, GameStore, GameUpdate, StoredGame, SubscriptionId};

struct Subscriber {
    id: SubscriptionId,
    game_id: String,
    callback: Arc<GameCallback>,
}

/// Process-local store. Each instance is independent.
#[derive(Default)]
pub struct InMemoryGameStore {
    games: Mutex<HashMap<String, StoredGame>>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_count(&self) -> Result<usize, ChessErrors> {
        Ok(lock(&self.games)?.len())
    }

    // Callbacks run without holding either lock so they may read the store.
    fn notify(&self, game_id: &str, game: &StoredGame) -> Result<(), ChessErrors> {
        let callbacks: Vec<Arc<GameCallback>> = lock(&self.subscribers)?
            .iter()
            .filter(|s| s.game_id == game_id)
            .map(|s| Arc::clone(&s.callback))
            .collect();
        log::debug!("game {game_id} stored, notifying {} subscriber(s)", callbacks.len());
        for callback in callbacks {
            (callback.as_ref())(game);
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ChessErrors> {
    mutex
        .lock()
        .map_err(|_| ChessErrors::StoreUnavailable("store lock poisoned".to_owned()))
}

impl GameStore for InMemoryGameStore {
    fn get(&self, game_id: &str) -> Result<Option<StoredGame>, ChessErrors> {
        Ok(lock(&self.games)?.get(game_id).cloned())
    }

    fn put(&self, game_id: &str, game: StoredGame) -> Result<(), ChessErrors> {
        lock(&self.games)?.insert(game_id.to_owned(), game.clone());
        self.notify(game_id, &game)
    }

    fn update(&self, game_id: &str, update: GameUpdate<'_>) -> Result<Option<StoredGame>, ChessErrors> {
        let next = {
            let mut games = lock(&self.games)?;
            let Some(next) = update(games.get(game_id)) else {
                return Ok(games.get(game_id).cloned());
            };
            games.insert(game_id.to_owned(), next.clone());
            next
        };
        self.notify(game_id, &next)?;
        Ok(Some(next))
    }

    fn subscribe(&self, game_id: &str, callback: GameCallback) -> Result<SubscriptionId, ChessErrors> {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.subscribers)?.push(Subscriber {
            id,
            game_id: game_id.to_owned(),
            callback: Arc::new(callback),
        });
        Ok(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, ChessErrors> {
        let mut subscribers = lock(&self.subscribers)?;
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        Ok(subscribers.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryGameStore;
    use crate::game_state::chess_types::GameState;
    use crate::session::game_store::{GameStore, StoredGame};
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn snapshot() -> StoredGame {
        StoredGame {
            record: GameState::new_game().to_record(),
            white_player: Some("alice".to_owned()),
            black_player: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn put_then_get_returns_snapshot() {
        let store = InMemoryGameStore::new();
        assert!(store.get("g1").expect("get").is_none());

        store.put("g1", snapshot()).expect("put");

        let loaded = store.get("g1").expect("get").expect("stored game");
        assert_eq!(loaded.white_player.as_deref(), Some("alice"));
        assert_eq!(store.game_count().expect("count"), 1);
    }

    #[test]
    fn subscribers_only_hear_their_game() {
        let store = InMemoryGameStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = store
            .subscribe("g1", Box::new(move |_: &StoredGame| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .expect("subscribe");

        store.put("g1", snapshot()).expect("put");
        store.put("g2", snapshot()).expect("put");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id).expect("unsubscribe"));
        store.put("g1", snapshot()).expect("put");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!store.unsubscribe(id).expect("unsubscribe"));
    }

    #[test]
    fn update_writes_only_when_asked() {
        let store = InMemoryGameStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        store
            .subscribe("g1", Box::new(move |_: &StoredGame| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .expect("subscribe");

        let created = store
            .update("g1", &mut |current: Option<&StoredGame>| match current {
                None => Some(snapshot()),
                Some(_) => None,
            })
            .expect("update");
        assert!(created.is_some());

        let kept = store
            .update("g1", &mut |current: Option<&StoredGame>| match current {
                None => Some(snapshot()),
                Some(_) => None,
            })
            .expect("update");
        assert_eq!(kept, created);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(store.game_count().expect("count"), 1);
    }

    #[test]
    fn separate_stores_do_not_share_games() {
        let a = InMemoryGameStore::new();
        let b = InMemoryGameStore::new();
        a.put("g1", snapshot()).expect("put");
        assert!(b.get("g1").expect("get").is_none());
    }
}
