//! Statistics handlers

use axum::{extract::State, Json};
use panel_service::dto::StatsResponse;
use panel_service::StatsService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Record counts
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.stats().await?;
    Ok(Json(response))
}
