//! Dashboard service
//!
//! Composes the landing page: servers, statistics and the first page of both
//! moderation tables, fetched concurrently.

use chrono::Utc;
use panel_core::entities::SanctionKind;
use panel_core::value_objects::PageRequest;
use tracing::instrument;

use crate::dto::DashboardResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sanction::SanctionService;
use super::server::ServerService;
use super::stats::StatsService;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Assemble the dashboard; tables always show their first page of
    /// `rows` records
    #[instrument(skip(self))]
    pub async fn dashboard(&self, rows: u32, max_rows: u32) -> ServiceResult<DashboardResponse> {
        let first_page = PageRequest::with_max_rows(1, rows, max_rows);
        let now = Utc::now();
        let server_svc = ServerService::new(self.ctx);
        let stats_svc = StatsService::new(self.ctx);
        let sanctions = SanctionService::new(self.ctx);

        let (servers, stats, bans, mutes) = tokio::try_join!(
            server_svc.list(),
            stats_svc.stats_at(now),
            sanctions.table_at(SanctionKind::Ban, first_page, now),
            sanctions.table_at(SanctionKind::Mute, first_page, now),
        )?;

        Ok(DashboardResponse {
            servers,
            stats,
            bans,
            mutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;
    use chrono::Duration;
    use panel_core::entities::{ServersLayout, SERVERS_GRID_KEY};
    use panel_core::traits::SettingsRepository;

    #[tokio::test]
    async fn test_dashboard_composition() {
        let t = TestContext::new();
        t.servers.insert("Public", "127.0.0.1", 27015, None);
        for i in 0..7 {
            t.add_sanction(SanctionKind::Ban, 30, Duration::minutes(i));
        }
        t.add_sanction(SanctionKind::Mute, 0, Duration::days(1));

        let dashboard = DashboardService::new(&t.ctx).dashboard(5, 100).await.unwrap();

        assert_eq!(dashboard.servers.layout, ServersLayout::Table);
        assert_eq!(dashboard.servers.servers.len(), 1);
        assert_eq!(dashboard.stats.bans.total, 7);
        assert_eq!(dashboard.bans.page, 1);
        assert_eq!(dashboard.bans.rows, 5);
        assert_eq!(dashboard.bans.items.len(), 5);
        assert_eq!(dashboard.bans.pages, 2);
        assert_eq!(dashboard.mutes.count, 1);
        assert_eq!(dashboard.mutes.title, "Mutes");
    }

    #[tokio::test]
    async fn test_dashboard_grid_layout_and_row_cap() {
        let t = TestContext::new();
        t.settings.set(SERVERS_GRID_KEY, "true").await.unwrap();

        let dashboard = DashboardService::new(&t.ctx).dashboard(500, 20).await.unwrap();
        assert_eq!(dashboard.servers.layout, ServersLayout::Grid);
        assert_eq!(dashboard.bans.rows, 20);
        assert_eq!(dashboard.bans.pages, 0);
    }
}
