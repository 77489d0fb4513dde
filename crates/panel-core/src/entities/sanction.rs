//! Sanction entity - a ban or mute issued against a player
//!
//! Records are created by moderation tooling on the game servers; this
//! system only reads them. Expiry is derived from `ends`, never written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which moderation table a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanctionKind {
    Ban,
    Mute,
}

impl SanctionKind {
    /// Backing table name
    pub const fn table(self) -> &'static str {
        match self {
            Self::Ban => "bans",
            Self::Mute => "mutes",
        }
    }

    /// Heading shown above the records table
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ban => "Bans",
            Self::Mute => "Mutes",
        }
    }

    /// Resource segment under `/api`
    pub const fn path(self) -> &'static str {
        self.table()
    }
}

impl fmt::Display for SanctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ban => f.write_str("ban"),
            Self::Mute => f.write_str("mute"),
        }
    }
}

/// Stored lifecycle status of a sanction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanctionStatus {
    Active,
    Expired,
    Revoked,
}

impl SanctionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        }
    }

    /// Parse the database representation (case-insensitive)
    pub fn from_db(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "expired" => Some(Self::Expired),
            "revoked" | "unbanned" | "unmuted" => Some(Self::Revoked),
            _ => None,
        }
    }
}

impl fmt::Display for SanctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ban or mute record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanction {
    pub id: i64,
    pub kind: SanctionKind,
    /// Player identity as recorded by the game server
    pub player_steam_id: String,
    pub player_name: String,
    /// Issuing administrator, absent for console/automatic sanctions
    pub admin_steam_id: Option<String>,
    pub reason: String,
    /// Free-form type tag (`voice`, `chat`, `steam`, `ip`, ...)
    pub sanction_type: String,
    /// Length in minutes, 0 means permanent
    pub duration: i32,
    pub created: DateTime<Utc>,
    pub ends: DateTime<Utc>,
    pub status: SanctionStatus,
}

impl Sanction {
    /// Check if the sanction never expires
    #[inline]
    pub fn is_permanent(&self) -> bool {
        self.duration == 0
    }

    /// Status with expiry applied: a timed active sanction past its end is expired
    pub fn effective_status(&self, now: DateTime<Utc>) -> SanctionStatus {
        match self.status {
            SanctionStatus::Active if !self.is_permanent() && self.ends <= now => {
                SanctionStatus::Expired
            }
            status => status,
        }
    }

    /// Check if the sanction is in force at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.effective_status(now) == SanctionStatus::Active
    }

    /// Human readable duration
    pub fn duration_label(&self) -> String {
        if self.is_permanent() {
            "Permanent".to_string()
        } else {
            format!("{} minutes", self.duration)
        }
    }

    /// Elapsed share of the sanction in percent, rounded half-up.
    ///
    /// `None` for permanent sanctions. Not clamped: overdue records exceed 100
    /// and records created in the future are negative. A zero-length window is
    /// complete (100) from its end onwards and 0 before it.
    pub fn time_left_percentage(&self, now: DateTime<Utc>) -> Option<i64> {
        if self.is_permanent() {
            return None;
        }

        let window = (self.ends - self.created).num_milliseconds();
        if window == 0 {
            return Some(if now >= self.ends { 100 } else { 0 });
        }

        let elapsed = (now - self.created).num_milliseconds();
        let ratio = elapsed as f64 / window as f64 * 100.0;

        Some((ratio + 0.5).floor() as i64)
    }
}
