//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{Duration, Utc};
use panel_core::entities::{Sanction, SanctionKind, SanctionStatus};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU32 = AtomicU32::new(1);

/// Get a unique account id for test admins
pub fn unique_account_id() -> u32 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A record created `age` ago lasting `minutes` (0 = permanent)
pub fn sanction(kind: SanctionKind, minutes: i32, age: Duration) -> Sanction {
    let created = Utc::now() - age;
    let suffix = unique_account_id();
    Sanction {
        id: 0,
        kind,
        player_steam_id: format!("STEAM_0:1:{suffix}"),
        player_name: format!("player{suffix}"),
        admin_steam_id: None,
        reason: "Repeated disruptive behaviour on the server".to_string(),
        sanction_type: match kind {
            SanctionKind::Ban => "steam".to_string(),
            SanctionKind::Mute => "voice".to_string(),
        },
        duration: minutes,
        created,
        ends: created + Duration::minutes(i64::from(minutes)),
        status: SanctionStatus::Active,
    }
}

/// Body of `PUT /api/settings/servers-grid`
#[derive(Debug, Serialize)]
pub struct ServersGridRequest {
    pub enabled: bool,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
}

/// `GET /api/servers`
#[derive(Debug, Deserialize)]
pub struct ServerList {
    pub layout: String,
    pub servers: Vec<ServerEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ServerEntry {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub port: u16,
    pub connect_url: String,
}

/// Table response of `GET /api/<kind>/table`
#[derive(Debug, Deserialize)]
pub struct Table {
    pub title: String,
    pub count: u64,
    pub page: u32,
    pub rows: u32,
    pub pages: u32,
    pub items: Vec<serde_json::Value>,
}
