//! Statistics service

use chrono::{DateTime, Utc};
use panel_core::entities::SanctionKind;
use tracing::instrument;

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record counts as of now
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        self.stats_at(Utc::now()).await
    }

    /// Record counts as of `now`; `active` applies expiry at `now`
    #[instrument(skip(self))]
    pub async fn stats_at(&self, now: DateTime<Utc>) -> ServiceResult<StatsResponse> {
        let (bans, mutes, servers, admins) = tokio::try_join!(
            self.ctx.sanction_repo(SanctionKind::Ban).counts(now),
            self.ctx.sanction_repo(SanctionKind::Mute).counts(now),
            self.ctx.server_repo().count(),
            self.ctx.admin_repo().count(),
        )
        .map_err(ServiceError::from)?;

        Ok(StatsResponse {
            bans,
            mutes,
            servers,
            admins,
        })
    }
}
