//! Server service

use tracing::instrument;

use crate::dto::{ServerListResponse, ServerResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::settings::SettingsService;

/// Server service
pub struct ServerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ServerService<'a> {
    /// Create a new ServerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All servers, with the layout chosen in settings
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<ServerListResponse> {
        let settings = SettingsService::new(self.ctx);
        let servers = async { Ok::<_, ServiceError>(self.ctx.server_repo().find_all().await?) };
        let (servers, layout) = tokio::try_join!(servers, settings.servers_layout())?;

        Ok(ServerListResponse {
            layout,
            servers: servers.iter().map(ServerResponse::from).collect(),
        })
    }
}
