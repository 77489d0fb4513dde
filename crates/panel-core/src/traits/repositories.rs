//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Admin, GameServer, Sanction, SanctionKind};
use crate::error::DomainError;
use crate::value_objects::{Page, PageRequest, SteamId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find administrator by Steam64 identity
    async fn find_by_steam_id(&self, steam_id: &SteamId) -> RepoResult<Option<Admin>>;

    /// Number of administrator accounts
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Sanction Repository
// ============================================================================

/// Total and currently active record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SanctionCounts {
    pub total: i64,
    pub active: i64,
}

/// Read access to one moderation table (bans or mutes)
#[async_trait]
pub trait SanctionRepository: Send + Sync {
    /// Which table this repository reads
    fn kind(&self) -> SanctionKind;

    /// One page of records, newest first, with the total count
    async fn find_page(&self, page: PageRequest) -> RepoResult<Page<Sanction>>;

    /// Find a record by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Sanction>>;

    /// Total records and records in force at `now`
    async fn counts(&self, now: DateTime<Utc>) -> RepoResult<SanctionCounts>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// List all servers ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<GameServer>>;

    /// Number of listed servers
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Raw value stored under `key`
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Insert or replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;
}
