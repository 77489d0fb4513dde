//! Ban and mute handlers
//!
//! The same handlers serve `/api/bans` and `/api/mutes`; the table is chosen
//! by the `SanctionKind` extension installed on each nested router.

use axum::{extract::State, Extension, Json};
use panel_core::entities::SanctionKind;
use panel_service::dto::{ListResponse, SanctionResponse, TableResponse};
use panel_service::SanctionService;

use crate::extractors::{ApiPath, Paging};
use crate::response::ApiResult;
use crate::state::AppState;

/// List records, newest first
///
/// GET /api/{bans,mutes}?page=&rows=
pub async fn list_sanctions(
    State(state): State<AppState>,
    Extension(kind): Extension<SanctionKind>,
    Paging(page): Paging,
) -> ApiResult<Json<ListResponse<SanctionResponse>>> {
    let service = SanctionService::new(state.service_context());
    let response = service.list(kind, page).await?;
    Ok(Json(response))
}

/// Records rendered as table rows
///
/// GET /api/{bans,mutes}/table?page=&rows=
pub async fn get_table(
    State(state): State<AppState>,
    Extension(kind): Extension<SanctionKind>,
    Paging(page): Paging,
) -> ApiResult<Json<TableResponse>> {
    let service = SanctionService::new(state.service_context());
    let response = service.table(kind, page).await?;
    Ok(Json(response))
}

/// Get a single record
///
/// GET /api/{bans,mutes}/{id}
pub async fn get_sanction(
    State(state): State<AppState>,
    Extension(kind): Extension<SanctionKind>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<SanctionResponse>> {
    let service = SanctionService::new(state.service_context());
    let response = service.get(kind, id).await?;
    Ok(Json(response))
}
