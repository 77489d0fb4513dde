//! Game server handlers

use axum::{extract::State, Json};
use panel_service::dto::ServerListResponse;
use panel_service::ServerService;

use crate::response::ApiResult;
use crate::state::AppState;

/// List game servers with the configured layout
///
/// GET /api/servers
pub async fn list_servers(State(state): State<AppState>) -> ApiResult<Json<ServerListResponse>> {
    let service = ServerService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}
