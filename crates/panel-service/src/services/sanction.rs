//! Sanction service
//!
//! Paged listings of bans and mutes, raw and as a rendered table.

use chrono::{DateTime, Utc};
use panel_core::entities::SanctionKind;
use panel_core::error::DomainError;
use panel_core::value_objects::PageRequest;
use tracing::instrument;

use crate::dto::{ListResponse, SanctionResponse, TableResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Sanction service
pub struct SanctionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SanctionService<'a> {
    /// Create a new SanctionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of records, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        kind: SanctionKind,
        page: PageRequest,
    ) -> ServiceResult<ListResponse<SanctionResponse>> {
        let now = Utc::now();
        let records = self.ctx.sanction_repo(kind).find_page(page).await?;

        Ok(records
            .map(|sanction| SanctionResponse::from_sanction(sanction, now))
            .into())
    }

    /// A single record
    #[instrument(skip(self))]
    pub async fn get(&self, kind: SanctionKind, id: i64) -> ServiceResult<SanctionResponse> {
        let sanction = self
            .ctx
            .sanction_repo(kind)
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SanctionNotFound { kind, id })?;

        Ok(SanctionResponse::from_sanction(sanction, Utc::now()))
    }

    /// One page of records rendered as table rows
    pub async fn table(&self, kind: SanctionKind, page: PageRequest) -> ServiceResult<TableResponse> {
        self.table_at(kind, page, Utc::now()).await
    }

    /// Render the table as seen at `now`
    #[instrument(skip(self))]
    pub async fn table_at(
        &self,
        kind: SanctionKind,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<TableResponse> {
        let records = self.ctx.sanction_repo(kind).find_page(page).await?;
        Ok(TableResponse::render(kind, page, records, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::TimeLeftCell;
    use crate::services::test_support::TestContext;
    use chrono::Duration;
    use panel_core::entities::SanctionStatus;

    #[tokio::test]
    async fn test_list_pages_and_counts() {
        let t = TestContext::new();
        for i in 0..23 {
            t.add_sanction(SanctionKind::Mute, 60, Duration::minutes(i));
        }

        let service = SanctionService::new(&t.ctx);
        let first = service
            .list(SanctionKind::Mute, PageRequest::new(1, 10))
            .await
            .unwrap();
        assert_eq!(first.count, 23);
        assert_eq!(first.results.len(), 10);
        assert!(first.results[0].created >= first.results[1].created);

        let last = service
            .list(SanctionKind::Mute, PageRequest::new(3, 10))
            .await
            .unwrap();
        assert_eq!(last.results.len(), 3);

        let bans = service
            .list(SanctionKind::Ban, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(bans.count, 0);
        assert!(bans.results.is_empty());
    }

    #[tokio::test]
    async fn test_list_applies_expiry() {
        let t = TestContext::new();
        t.add_sanction(SanctionKind::Ban, 10, Duration::hours(1));

        let list = SanctionService::new(&t.ctx)
            .list(SanctionKind::Ban, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(list.results[0].status, SanctionStatus::Expired);
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let t = TestContext::new();
        let err = SanctionService::new(&t.ctx)
            .get(SanctionKind::Ban, 404)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_BAN");
    }

    #[tokio::test]
    async fn test_get_existing_record() {
        let t = TestContext::new();
        let id = t.add_sanction(SanctionKind::Mute, 0, Duration::days(2));

        let record = SanctionService::new(&t.ctx)
            .get(SanctionKind::Mute, id)
            .await
            .unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.status, SanctionStatus::Active);
    }

    #[tokio::test]
    async fn test_table_renders_rows() {
        let t = TestContext::new();
        t.add_sanction(SanctionKind::Ban, 0, Duration::days(3));
        t.add_sanction(SanctionKind::Ban, 120, Duration::minutes(60));

        let table = SanctionService::new(&t.ctx)
            .table(SanctionKind::Ban, PageRequest::new(1, 1))
            .await
            .unwrap();

        assert_eq!(table.title, "Bans");
        assert_eq!(table.count, 2);
        assert_eq!(table.pages, 2);
        assert_eq!(table.items.len(), 1);
        // Newest first: the two hour ban created an hour ago, about halfway through
        assert!(matches!(
            table.items[0].time_left,
            TimeLeftCell::Progress { percentage: 50, .. }
        ));
    }
}
