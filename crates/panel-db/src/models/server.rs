//! Game server database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for servers table
#[derive(Debug, Clone, FromRow)]
pub struct ServerModel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub port: i32,
    pub game: Option<String>,
    pub created_at: DateTime<Utc>,
}
