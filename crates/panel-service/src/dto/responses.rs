//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Steam64 ids are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use panel_core::entities::{Admin, GameServer, Sanction, SanctionKind, SanctionStatus, ServersLayout};
use panel_core::traits::SanctionCounts;
use panel_core::value_objects::{Flags, Page, SteamId};
use serde::{Deserialize, Serialize};

use super::table::TableResponse;

// ============================================================================
// Common Response Types
// ============================================================================

/// Paginated envelope: total count plus one page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            count: page.count,
            results: page.results,
        }
    }
}

// ============================================================================
// Sanction Responses
// ============================================================================

/// A ban or mute record as returned by the listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctionResponse {
    pub id: i64,
    pub kind: SanctionKind,
    pub player_steam_id: String,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_steam_id: Option<String>,
    pub reason: String,
    #[serde(rename = "type")]
    pub sanction_type: String,
    /// Minutes, 0 = permanent
    pub duration: i32,
    pub created: DateTime<Utc>,
    pub ends: DateTime<Utc>,
    /// Status with expiry applied
    pub status: SanctionStatus,
}

impl SanctionResponse {
    pub fn from_sanction(sanction: Sanction, now: DateTime<Utc>) -> Self {
        let status = sanction.effective_status(now);
        Self {
            id: sanction.id,
            kind: sanction.kind,
            player_steam_id: sanction.player_steam_id,
            player_name: sanction.player_name,
            admin_steam_id: sanction.admin_steam_id,
            reason: sanction.reason,
            sanction_type: sanction.sanction_type,
            duration: sanction.duration,
            created: sanction.created,
            ends: sanction.ends,
            status,
        }
    }
}

// ============================================================================
// Admin Responses
// ============================================================================

/// The signed-in administrator
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub steam_id: SteamId,
    pub name: String,
    pub flags: Flags,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            steam_id: admin.steam_id,
            name: admin.name.clone(),
            flags: admin.flags,
        }
    }
}

// ============================================================================
// Server Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ServerResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    /// `steam://connect/host:port`
    pub connect_url: String,
}

impl From<&GameServer> for ServerResponse {
    fn from(server: &GameServer) -> Self {
        Self {
            id: server.id,
            name: server.name.clone(),
            address: server.address.clone(),
            port: server.port,
            game: server.game.clone(),
            connect_url: server.connect_url(),
        }
    }
}

/// Server list with the layout the dashboard should use
#[derive(Debug, Clone, Serialize)]
pub struct ServerListResponse {
    pub layout: ServersLayout,
    pub servers: Vec<ServerResponse>,
}

// ============================================================================
// Settings Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SettingResponse {
    pub key: String,
    pub value: serde_json::Value,
}

// ============================================================================
// Stats / Dashboard Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub bans: SanctionCounts,
    pub mutes: SanctionCounts,
    pub servers: i64,
    pub admins: i64,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub servers: ServerListResponse,
    pub stats: StatsResponse,
    pub bans: TableResponse,
    pub mutes: TableResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
