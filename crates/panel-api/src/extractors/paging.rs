//! Page-number pagination extractor
//!
//! Reads `?page=&rows=` and clamps them to the configured bounds.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use panel_common::PaginationConfig;
use panel_core::value_objects::PageRequest;
use panel_service::dto::PageQuery;

use super::query::ApiQuery;
use crate::response::ApiError;
use crate::state::AppState;

/// Clamped page request
#[derive(Debug, Clone, Copy)]
pub struct Paging(pub PageRequest);

impl Paging {
    /// Apply defaults and bounds to raw query values
    pub fn from_query(query: PageQuery, config: &PaginationConfig) -> Self {
        Paging(PageRequest::with_max_rows(
            query.page.unwrap_or(1),
            query.rows.unwrap_or(config.default_rows),
            config.max_rows,
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Paging
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiQuery(query) = ApiQuery::<PageQuery>::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        Ok(Paging::from_query(query, app_state.pagination()))
    }
}
