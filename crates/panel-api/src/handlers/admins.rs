//! Administrator handlers

use axum::Json;
use panel_service::dto::AdminResponse;

use crate::extractors::RequireAdmin;

/// The signed-in administrator
///
/// GET /api/admins/@me
pub async fn get_current_admin(guard: RequireAdmin) -> Json<AdminResponse> {
    Json(AdminResponse::from(&guard.admin))
}
