//! Setting database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for settings table
#[derive(Debug, Clone, FromRow)]
pub struct SettingModel {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
