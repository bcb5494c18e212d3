use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::time_logs::use_cases::export_report::inbound::http as export_http;
use crate::modules::time_logs::use_cases::persist_state::inbound::http as logs_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/export", post(export_http::handle))
        .route(
            "/api/logs",
            get(logs_http::read_state).post(logs_http::write_state),
        )
        .layer(TraceLayer::new_for_http())
        // The UI is served from a different origin during development.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
