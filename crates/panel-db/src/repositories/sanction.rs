//! PostgreSQL implementation of SanctionRepository
//!
//! One repository type serves both moderation tables; the kind picks the table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::{Sanction, SanctionKind};
use panel_core::traits::{RepoResult, SanctionCounts, SanctionRepository};
use panel_core::value_objects::{Page, PageRequest};

use crate::mappers::{sanction_from_model, SanctionInsert};
use crate::models::{SanctionCountsModel, SanctionModel};

use super::error::map_db_error;

const COLUMNS: &str =
    "id, player_steam_id, player_name, admin_steam_id, reason, type, duration, created, ends, status";

/// PostgreSQL implementation of SanctionRepository
#[derive(Clone)]
pub struct PgSanctionRepository {
    pool: PgPool,
    kind: SanctionKind,
}

impl PgSanctionRepository {
    /// Create a repository reading the table of `kind`
    pub fn new(pool: PgPool, kind: SanctionKind) -> Self {
        Self { pool, kind }
    }

    /// Repository over the `bans` table
    pub fn bans(pool: PgPool) -> Self {
        Self::new(pool, SanctionKind::Ban)
    }

    /// Repository over the `mutes` table
    pub fn mutes(pool: PgPool) -> Self {
        Self::new(pool, SanctionKind::Mute)
    }

    /// Insert a record and return its ID (used for seeding)
    #[instrument(skip(self, sanction), fields(table = self.kind.table()))]
    pub async fn insert(&self, sanction: &Sanction) -> RepoResult<i64> {
        let insert = SanctionInsert::new(sanction);
        let sql = format!(
            r"
            INSERT INTO {} (player_steam_id, player_name, admin_steam_id, reason, type, duration, created, ends, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            ",
            self.kind.table()
        );

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(insert.player_steam_id)
            .bind(insert.player_name)
            .bind(insert.admin_steam_id)
            .bind(insert.reason)
            .bind(insert.sanction_type)
            .bind(insert.duration)
            .bind(insert.created)
            .bind(insert.ends)
            .bind(insert.status)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl SanctionRepository for PgSanctionRepository {
    fn kind(&self) -> SanctionKind {
        self.kind
    }

    #[instrument(skip(self), fields(table = self.kind.table()))]
    async fn find_page(&self, page: PageRequest) -> RepoResult<Page<Sanction>> {
        let table = self.kind.table();

        // Count and page come from one snapshot
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, SanctionModel>(&format!(
            "SELECT {COLUMNS} FROM {table} ORDER BY created DESC, id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let results = rows
            .into_iter()
            .map(|model| sanction_from_model(self.kind, model))
            .collect();

        Ok(Page::new(count.max(0) as u64, results))
    }

    #[instrument(skip(self), fields(table = self.kind.table()))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Sanction>> {
        let result = sqlx::query_as::<_, SanctionModel>(&format!(
            "SELECT {COLUMNS} FROM {} WHERE id = $1",
            self.kind.table()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| sanction_from_model(self.kind, model)))
    }

    #[instrument(skip(self), fields(table = self.kind.table()))]
    async fn counts(&self, now: DateTime<Utc>) -> RepoResult<SanctionCounts> {
        let counts = sqlx::query_as::<_, SanctionCountsModel>(&format!(
            r"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (
                    WHERE LOWER(status) = 'active' AND (duration = 0 OR ends > $1)
                ) AS active
            FROM {}
            ",
            self.kind.table()
        ))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(SanctionCounts {
            total: counts.total,
            active: counts.active,
        })
    }
}
