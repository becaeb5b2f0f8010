//! Session registry and router wiring.
//!
//! Games live behind a [`SessionStore`], injected into the handlers as a
//! trait object so the serving layer never touches a concrete container.
//! The stock implementation is [`MemoryStore`], a process-local concurrent
//! map; a session's engine sits behind its own mutex and that lock is only
//! ever held around synchronous engine calls.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, post},
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rand::Rng;
use twenty48_core::Game;

use crate::routes;

/// One registered game, shared between requests.
pub type SessionHandle = Arc<Mutex<Game>>;

/// Registry of live games keyed by opaque session id.
///
/// Ids are chosen by the store, random, and stable for the session's
/// lifetime. Implementations must be safe under concurrent calls from many
/// request tasks.
pub trait SessionStore: Send + Sync {
    /// Register a game and return its new id.
    fn create(&self, game: Game) -> String;
    /// Handle for a registered session, if it exists.
    fn get(&self, game_id: &str) -> Option<SessionHandle>;
    /// Drop a session. Returns `false` when the id was unknown.
    fn remove(&self, game_id: &str) -> bool;
    /// Ids of all live sessions, in no particular order.
    fn list(&self) -> Vec<String>;
}

/// In-memory [`SessionStore`] backed by a concurrent map.
#[derive(Default)]
pub struct MemoryStore {
    sessions: DashMap<String, SessionHandle>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn create(&self, game: Game) -> String {
        let handle: SessionHandle = Arc::new(Mutex::new(game));
        // 128-bit ids make collisions implausible; the entry guard makes a
        // racing duplicate harmless anyway.
        loop {
            let game_id = new_session_id();
            match self.sessions.entry(game_id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&handle));
                    return game_id;
                }
            }
        }
    }

    fn get(&self, game_id: &str) -> Option<SessionHandle> {
        self.sessions
            .get(game_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn remove(&self, game_id: &str) -> bool {
        self.sessions.remove(game_id).is_some()
    }

    fn list(&self) -> Vec<String> {
        self.sessions
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}

fn new_session_id() -> String {
    format!("{:032x}", rand::thread_rng().gen::<u128>())
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub board_size: usize,
}

impl AppState {
    /// State over a fresh [`MemoryStore`].
    pub fn in_memory(board_size: usize) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            board_size,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::get_health))
        .route("/games", get(routes::list_games))
        .route("/game/new", post(routes::new_game))
        .route("/game/move", post(routes::make_move))
        .route(
            "/game/:game_id",
            get(routes::get_game_state).delete(routes::delete_game),
        )
        .with_state(state)
}
