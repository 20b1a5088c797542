use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::models::RowsResponse;
use crate::state::AppState;

/// GET /api/rows - Every sheet row as-is, in sheet order
pub async fn list_rows(State(state): State<AppState>) -> Result<Json<RowsResponse>, ApiError> {
    let rows = super::load_sheet(&state).await?;
    tracing::info!("Serving {} rows", rows.len());
    Ok(Json(RowsResponse { rows }))
}
