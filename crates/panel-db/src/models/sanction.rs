//! Sanction database model, shared by the bans and mutes tables

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bans/mutes rows
#[derive(Debug, Clone, FromRow)]
pub struct SanctionModel {
    pub id: i64,
    pub player_steam_id: String,
    pub player_name: String,
    pub admin_steam_id: Option<String>,
    pub reason: String,
    #[sqlx(rename = "type")]
    pub sanction_type: String,
    pub duration: i32,
    pub created: DateTime<Utc>,
    pub ends: DateTime<Utc>,
    pub status: String,
}

/// Aggregate counts of a sanction table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SanctionCountsModel {
    pub total: i64,
    pub active: i64,
}
