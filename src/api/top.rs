use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::models::{TopQuery, TopResponse};
use crate::ranking::{self, RankingMode};
use crate::state::AppState;

/// GET /api/top5?type=magic|physical|value - Top five rows for the given mode.
///
/// The mode is validated before the sheet is fetched, so a bad `type` never
/// costs an upstream request.
pub async fn top_five(
    State(state): State<AppState>,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> Result<Json<TopResponse>, ApiError> {
    let Query(query) = query?;
    let mode: RankingMode = query
        .mode
        .as_deref()
        .ok_or(ApiError::MissingMode)?
        .trim()
        .parse()?;

    let records = super::load_sheet(&state).await?;

    let fields = &state.config.fields;
    let (primary, secondary) = mode.sort_fields(fields);
    let rows = ranking::rank(&records, mode, fields);
    tracing::info!(
        "Ranked {} rows by {primary} then {secondary} ({mode}), returning {}",
        records.len(),
        rows.len()
    );

    Ok(Json(TopResponse {
        mode: mode.to_string(),
        primary_field: primary.to_string(),
        secondary_field: secondary.to_string(),
        rows,
    }))
}
