use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::time_logs::core::interval::PersistedState;
use crate::shell::state::AppState;

/// `GET /api/logs`: the full persisted state. The store initializes an empty
/// document when none exists; a genuine read failure still answers with a
/// safe empty shape so the client can render.
pub async fn read_state(State(state): State<AppState>) -> Response {
    match state.store.load().await {
        Ok(persisted) => Json(persisted).into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to read persisted state");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read data", "logs": [], "activities": [] })),
            )
                .into_response()
        }
    }
}

/// `POST /api/logs`: overwrites the persisted state wholesale.
pub async fn write_state(
    State(state): State<AppState>,
    body: Result<Json<PersistedState>, JsonRejection>,
) -> Response {
    let Json(persisted) = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%err, "write rejected: malformed request body");
            return write_failed();
        }
    };

    match state.store.save(&persisted).await {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to write persisted state");
            write_failed()
        }
    }
}

fn write_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to write data" })),
    )
        .into_response()
}
