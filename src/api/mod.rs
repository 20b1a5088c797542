//! Axum HTTP handlers and the router that wires them up.

pub mod rows;
pub mod top;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::Record;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    // Read-only API meant to be called from any page, so every origin may GET.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/rows", get(rows::list_rows))
        .route("/api/top5", get(top::top_five))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe; never touches the sheet
async fn health() -> &'static str {
    "ok"
}

/// Fetch and parse the sheet for one request.
async fn load_sheet(state: &AppState) -> Result<Vec<Record>, ApiError> {
    if state.config.sheet.csv_url.is_none() {
        return Err(ApiError::NotConfigured);
    }

    crate::sheet::load_records(&state.http_client, &state.config.sheet)
        .await
        .map_err(|e| {
            tracing::warn!("Sheet load failed: {e:#}");
            ApiError::Upstream(e)
        })
}
