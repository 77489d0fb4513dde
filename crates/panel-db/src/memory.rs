//! In-memory repository implementations
//!
//! Used when the panel runs without PostgreSQL (tests, local demos). Each
//! store is behind a `parking_lot` lock and never holds it across an await.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use panel_core::entities::{Admin, GameServer, Sanction, SanctionKind};
use panel_core::error::DomainError;
use panel_core::traits::{
    AdminRepository, RepoResult, SanctionCounts, SanctionRepository, ServerRepository,
    SettingsRepository,
};
use panel_core::value_objects::{Page, PageRequest, SteamId};

// ============================================================================
// Admins
// ============================================================================

/// In-memory AdminRepository
#[derive(Default)]
pub struct MemoryAdminRepository {
    admins: RwLock<HashMap<SteamId, Admin>>,
    unavailable: AtomicBool,
}

impl MemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `admins`
    pub fn with_admins(admins: impl IntoIterator<Item = Admin>) -> Self {
        let repo = Self::new();
        for admin in admins {
            repo.insert(admin);
        }
        repo
    }

    /// Insert or replace an administrator
    pub fn insert(&self, admin: Admin) {
        self.admins.write().insert(admin.steam_id, admin);
    }

    /// Make every lookup fail with a database error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "admin store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepository {
    async fn find_by_steam_id(&self, steam_id: &SteamId) -> RepoResult<Option<Admin>> {
        self.check_available()?;
        Ok(self.admins.read().get(steam_id).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        self.check_available()?;
        Ok(self.admins.read().len() as i64)
    }
}

// ============================================================================
// Sanctions
// ============================================================================

/// In-memory SanctionRepository for one kind
pub struct MemorySanctionRepository {
    kind: SanctionKind,
    records: RwLock<Vec<Sanction>>,
    next_id: AtomicI64,
}

impl MemorySanctionRepository {
    pub fn new(kind: SanctionKind) -> Self {
        Self {
            kind,
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Store a record, assigning the next ID and this repository's kind
    pub fn insert(&self, mut sanction: Sanction) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        sanction.id = id;
        sanction.kind = self.kind;
        self.records.write().push(sanction);
        id
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SanctionRepository for MemorySanctionRepository {
    fn kind(&self) -> SanctionKind {
        self.kind
    }

    async fn find_page(&self, page: PageRequest) -> RepoResult<Page<Sanction>> {
        let records = self.records.read();

        let mut sorted: Vec<&Sanction> = records.iter().collect();
        sorted.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let results = sorted
            .into_iter()
            .skip(offset)
            .take(page.rows() as usize)
            .cloned()
            .collect();

        Ok(Page::new(records.len() as u64, results))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Sanction>> {
        Ok(self.records.read().iter().find(|s| s.id == id).cloned())
    }

    async fn counts(&self, now: DateTime<Utc>) -> RepoResult<SanctionCounts> {
        let records = self.records.read();
        Ok(SanctionCounts {
            total: records.len() as i64,
            active: records.iter().filter(|s| s.is_active_at(now)).count() as i64,
        })
    }
}

// ============================================================================
// Servers
// ============================================================================

/// In-memory ServerRepository
pub struct MemoryServerRepository {
    servers: RwLock<BTreeMap<i32, GameServer>>,
    next_id: AtomicI32,
}

impl Default for MemoryServerRepository {
    fn default() -> Self {
        Self {
            servers: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl MemoryServerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a server and return its ID
    pub fn insert(&self, name: &str, address: &str, port: u16, game: Option<&str>) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let server = GameServer {
            id,
            name: name.to_string(),
            address: address.to_string(),
            port,
            game: game.map(String::from),
            created_at: Utc::now(),
        };
        self.servers.write().insert(id, server);
        id
    }
}

#[async_trait]
impl ServerRepository for MemoryServerRepository {
    async fn find_all(&self) -> RepoResult<Vec<GameServer>> {
        Ok(self.servers.read().values().cloned().collect())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.servers.read().len() as i64)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// In-memory SettingsRepository
#[derive(Default)]
pub struct MemorySettingsRepository {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
