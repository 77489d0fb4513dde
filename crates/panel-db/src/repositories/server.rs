//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use panel_core::entities::GameServer;
use panel_core::traits::{RepoResult, ServerRepository};

use crate::models::ServerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a server and return its ID (used for seeding)
    #[instrument(skip(self))]
    pub async fn insert(
        &self,
        name: &str,
        address: &str,
        port: u16,
        game: Option<&str>,
    ) -> RepoResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO servers (name, address, port, game)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(name)
        .bind(address)
        .bind(i32::from(port))
        .bind(game)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<GameServer>> {
        let results = sqlx::query_as::<_, ServerModel>(
            r"
            SELECT id, name, address, port, game, created_at
            FROM servers
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(GameServer::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM servers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
