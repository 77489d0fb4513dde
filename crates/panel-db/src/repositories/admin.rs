//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::Admin;
use panel_core::traits::{AdminRepository, RepoResult};
use panel_core::value_objects::SteamId;

use crate::mappers::AdminInsert;
use crate::models::AdminModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert or replace an administrator record
    #[instrument(skip(self, admin), fields(steam_id = %admin.steam_id))]
    pub async fn upsert(&self, admin: &Admin) -> RepoResult<()> {
        let insert = AdminInsert::new(admin);

        sqlx::query(
            r"
            INSERT INTO admins (steam_id, name, flags)
            VALUES ($1, $2, $3)
            ON CONFLICT (steam_id) DO UPDATE SET name = $2, flags = $3
            ",
        )
        .bind(&insert.steam_id)
        .bind(insert.name)
        .bind(&insert.flags)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_steam_id(&self, steam_id: &SteamId) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT steam_id, name, flags, created_at
            FROM admins
            WHERE steam_id = $1
            ",
        )
        .bind(steam_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Admin::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
