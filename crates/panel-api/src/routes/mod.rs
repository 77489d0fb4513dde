//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{get, put},
    Extension, Router,
};
use panel_core::entities::SanctionKind;

use crate::handlers::{admins, dashboard, health, sanctions, servers, settings, stats};
use crate::state::AppState;

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            &format!("/{}", SanctionKind::Ban.path()),
            sanction_routes(SanctionKind::Ban),
        )
        .nest(
            &format!("/{}", SanctionKind::Mute.path()),
            sanction_routes(SanctionKind::Mute),
        )
        .route("/servers", get(servers::list_servers))
        .route("/stats", get(stats::get_stats))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/admins/@me", get(admins::get_current_admin))
        .route("/settings/servers-grid", put(settings::update_servers_grid))
}

/// Listing, table and lookup routes for one record kind
fn sanction_routes(kind: SanctionKind) -> Router<AppState> {
    Router::new()
        .route("/", get(sanctions::list_sanctions))
        .route("/table", get(sanctions::get_table))
        .route("/:id", get(sanctions::get_sanction))
        .layer(Extension(kind))
}
