//! Admin database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for admins table
#[derive(Debug, Clone, FromRow)]
pub struct AdminModel {
    pub steam_id: String,
    pub name: String,
    pub flags: String,
    pub created_at: DateTime<Utc>,
}
