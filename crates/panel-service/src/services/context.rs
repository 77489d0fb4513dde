//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use panel_common::auth::JwtService;
use panel_core::entities::SanctionKind;
use panel_core::traits::{
    AdminRepository, SanctionRepository, ServerRepository, SettingsRepository,
};
use panel_db::{
    MemoryAdminRepository, MemorySanctionRepository, MemoryServerRepository,
    MemorySettingsRepository, PgAdminRepository, PgPool, PgSanctionRepository,
    PgServerRepository, PgSettingsRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Provides access to:
/// - Database repositories (PostgreSQL or in-memory)
/// - The PostgreSQL pool, when one is configured
/// - JWT service for reading identity tokens
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running on in-memory repositories
    pool: Option<PgPool>,

    // Repositories
    admin_repo: Arc<dyn AdminRepository>,
    ban_repo: Arc<dyn SanctionRepository>,
    mute_repo: Arc<dyn SanctionRepository>,
    server_repo: Arc<dyn ServerRepository>,
    settings_repo: Arc<dyn SettingsRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a context backed by PostgreSQL repositories
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            admin_repo: Arc::new(PgAdminRepository::new(pool.clone())),
            ban_repo: Arc::new(PgSanctionRepository::bans(pool.clone())),
            mute_repo: Arc::new(PgSanctionRepository::mutes(pool.clone())),
            server_repo: Arc::new(PgServerRepository::new(pool.clone())),
            settings_repo: Arc::new(PgSettingsRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
        }
    }

    /// Create a context backed by empty in-memory repositories
    pub fn in_memory(jwt_service: Arc<JwtService>) -> Self {
        Self {
            pool: None,
            admin_repo: Arc::new(MemoryAdminRepository::new()),
            ban_repo: Arc::new(MemorySanctionRepository::new(SanctionKind::Ban)),
            mute_repo: Arc::new(MemorySanctionRepository::new(SanctionKind::Mute)),
            server_repo: Arc::new(MemoryServerRepository::new()),
            settings_repo: Arc::new(MemorySettingsRepository::new()),
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the admin repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    /// Get the repository for one kind of sanction
    pub fn sanction_repo(&self, kind: SanctionKind) -> &dyn SanctionRepository {
        match kind {
            SanctionKind::Ban => self.ban_repo.as_ref(),
            SanctionKind::Mute => self.mute_repo.as_ref(),
        }
    }

    /// Get the server repository
    pub fn server_repo(&self) -> &dyn ServerRepository {
        self.server_repo.as_ref()
    }

    /// Get the settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    ban_repo: Option<Arc<dyn SanctionRepository>>,
    mute_repo: Option<Arc<dyn SanctionRepository>>,
    server_repo: Option<Arc<dyn ServerRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn ban_repo(mut self, repo: Arc<dyn SanctionRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn mute_repo(mut self, repo: Arc<dyn SanctionRepository>) -> Self {
        self.mute_repo = Some(repo);
        self
    }

    pub fn server_repo(mut self, repo: Arc<dyn ServerRepository>) -> Self {
        self.server_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    /// or a sanction repository serves the wrong table
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let ban_repo = required(self.ban_repo, "ban_repo")?;
        let mute_repo = required(self.mute_repo, "mute_repo")?;

        if ban_repo.kind() != SanctionKind::Ban || mute_repo.kind() != SanctionKind::Mute {
            return Err(ServiceError::validation(
                "ban_repo and mute_repo must serve bans and mutes respectively",
            ));
        }

        Ok(ServiceContext {
            pool: self.pool,
            admin_repo: required(self.admin_repo, "admin_repo")?,
            ban_repo,
            mute_repo,
            server_repo: required(self.server_repo, "server_repo")?,
            settings_repo: required(self.settings_repo, "settings_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
