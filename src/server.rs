//! HTTP API exposing the game service.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::db::GameRepository;
use crate::game::{GameDetails, GameId, HistorySummary, PlayView};
use crate::service::{GameError, GameService, parse_letter};

/// Shared handler state.
#[derive(Clone)]
struct AppState {
    service: GameService<GameRepository>,
}

/// Builds the API router over the given service.
pub fn build_router(service: GameService<GameRepository>) -> Router {
    Router::new()
        .route("/api/games", post(start_game_handler).get(history_handler))
        .route("/api/games/{id}", get(state_handler))
        .route("/api/games/{id}/guess", post(guess_handler))
        .route("/api/games/{id}/details", get(details_handler))
        .with_state(AppState { service })
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves the API until the process stops.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server exits
/// abnormally.
pub async fn serve(addr: SocketAddr, service: GameService<GameRepository>) -> anyhow::Result<()> {
    let app = build_router(service);
    info!(%addr, "Hangman API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn start_game_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let service = state.service.clone();
    let game_id = tokio::task::spawn_blocking(move || service.start_new_game())
        .await
        .map_err(ApiError::internal)?
        .map_err(client_error)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "game_id": game_id })),
    )
        .into_response())
}

async fn history_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistorySummary>>, ApiError> {
    let service = state.service.clone();
    let history = tokio::task::spawn_blocking(move || service.list_history())
        .await
        .map_err(ApiError::internal)?
        .map_err(client_error)?;
    Ok(Json(history))
}

async fn guess_handler(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<PlayView>, ApiError> {
    // A missing, null, or non-string letter validates like an empty one
    let raw = body
        .get("letter")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");
    let letter = parse_letter(raw).map_err(client_error)?;
    let service = state.service.clone();
    let view = tokio::task::spawn_blocking(move || service.submit_guess(id, letter))
        .await
        .map_err(ApiError::internal)?
        .map_err(client_error)?;
    Ok(Json(view))
}

async fn state_handler(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<PlayView>, ApiError> {
    let service = state.service.clone();
    let view = tokio::task::spawn_blocking(move || service.get_state(id))
        .await
        .map_err(ApiError::internal)?
        .map_err(lookup_error)?;
    Ok(Json(view))
}

async fn details_handler(
    State(state): State<AppState>,
    Path(id): Path<GameId>,
) -> Result<Json<GameDetails>, ApiError> {
    let service = state.service.clone();
    let details = tokio::task::spawn_blocking(move || service.get_details(id))
        .await
        .map_err(ApiError::internal)?
        .map_err(lookup_error)?;
    Ok(Json(details))
}

/// Maps service errors for the mutating endpoints, where every domain
/// error is the client's fault.
fn client_error(error: GameError) -> ApiError {
    match error {
        GameError::Store(error) => ApiError::internal(error),
        other => ApiError::bad_request(other.to_string()),
    }
}

/// Maps service errors for the read endpoints, where an unknown game is
/// a missing resource.
fn lookup_error(error: GameError) -> ApiError {
    match error {
        GameError::GameNotFound => ApiError::not_found(error.to_string()),
        GameError::Store(error) => ApiError::internal(error),
        other => ApiError::bad_request(other.to_string()),
    }
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal(error: impl std::fmt::Display) -> Self {
        error!(%error, "Internal error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "Request failed");
        (
            self.status,
            Json(serde_json::json!({"error": self.message})),
        )
            .into_response()
    }
}
