//! Dashboard handlers

use axum::{extract::State, Json};
use panel_service::dto::{DashboardQuery, DashboardResponse};
use panel_service::DashboardService;

use crate::extractors::ApiQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Servers, stats and the first page of both record tables
///
/// GET /api/dashboard?rows=
pub async fn get_dashboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DashboardQuery>,
) -> ApiResult<Json<DashboardResponse>> {
    let pagination = state.pagination();
    let rows = query.rows.unwrap_or(pagination.default_rows);

    let service = DashboardService::new(state.service_context());
    let response = service.dashboard(rows, pagination.max_rows).await?;
    Ok(Json(response))
}
