use std::sync::MutexGuard;

use axum::{
    Json,
    extract::{Path as AxumPath, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use twenty48_core::{Game, GameState, InvalidDirection, Move};

use crate::app::{AppState, SessionHandle};

#[derive(Serialize)]
pub(crate) struct NewGameResponse {
    game_id: String,
    state: GameState,
}

#[derive(Deserialize)]
pub(crate) struct MoveRequest {
    game_id: String,
    direction: String,
}

#[derive(Serialize)]
pub(crate) struct MoveResponse {
    moved: bool,
    state: GameState,
}

#[derive(Serialize)]
pub(crate) struct GamesResponse {
    total: usize,
    sessions: Vec<String>,
}

#[derive(Serialize)]
pub(crate) struct RemovedResponse {
    removed: bool,
}

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: String,
}

/// Start a new game and return its id with the initial state.
pub async fn new_game(State(state): State<AppState>) -> Json<NewGameResponse> {
    let game = Game::new(state.board_size);
    let snapshot = game.state();
    let game_id = state.store.create(game);
    info!("session created" = %game_id);
    Json(NewGameResponse {
        game_id,
        state: snapshot,
    })
}

/// Apply one move to a session.
///
/// Unknown ids are this layer's concern and map to 404 before the direction
/// is even parsed; a bad direction maps to 400 with the engine's message and
/// leaves the session untouched. `moved: false` is a normal response, not an
/// error.
pub async fn make_move(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, (StatusCode, String)> {
    let session = lookup(&state, &request.game_id)?;
    let direction: Move = request
        .direction
        .parse()
        .map_err(|err: InvalidDirection| (StatusCode::BAD_REQUEST, err.to_string()))?;

    let mut game = lock_session(&session)?;
    let moved = game.apply_move(direction);
    Ok(Json(MoveResponse {
        moved,
        state: game.state(),
    }))
}

/// Current state of a session.
pub async fn get_game_state(
    State(state): State<AppState>,
    AxumPath(game_id): AxumPath<String>,
) -> Result<Json<GameState>, (StatusCode, String)> {
    let session = lookup(&state, &game_id)?;
    let game = lock_session(&session)?;
    Ok(Json(game.state()))
}

/// Drop a session.
pub async fn delete_game(
    State(state): State<AppState>,
    AxumPath(game_id): AxumPath<String>,
) -> Result<Json<RemovedResponse>, (StatusCode, String)> {
    if state.store.remove(&game_id) {
        info!("session removed" = %game_id);
        Ok(Json(RemovedResponse { removed: true }))
    } else {
        Err(not_found(&game_id))
    }
}

/// Ids of all live sessions.
pub async fn list_games(State(state): State<AppState>) -> Json<GamesResponse> {
    let mut sessions = state.store.list();
    sessions.sort();
    Json(GamesResponse {
        total: sessions.len(),
        sessions,
    })
}

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn lookup(state: &AppState, game_id: &str) -> Result<SessionHandle, (StatusCode, String)> {
    state.store.get(game_id).ok_or_else(|| not_found(game_id))
}

fn not_found(game_id: &str) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("game {game_id} not found"))
}

fn lock_session(session: &SessionHandle) -> Result<MutexGuard<'_, Game>, (StatusCode, String)> {
    session.lock().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "session lock poisoned".to_string(),
        )
    })
}
