//! Panel settings handlers

use axum::{extract::State, Json};
use panel_service::dto::{SettingResponse, UpdateServersGridRequest};
use panel_service::SettingsService;

use crate::extractors::{RequireAdmin, SettingsManagers, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Switch the dashboard server list between grid and table
///
/// PUT /api/settings/servers-grid
pub async fn update_servers_grid(
    State(state): State<AppState>,
    guard: RequireAdmin<SettingsManagers>,
    ValidatedJson(request): ValidatedJson<UpdateServersGridRequest>,
) -> ApiResult<Json<SettingResponse>> {
    let service = SettingsService::new(state.service_context());
    let response = service
        .set_servers_grid(&guard.admin, request.enabled())
        .await?;
    Ok(Json(response))
}
