//! Settings service
//!
//! Reads and writes panel settings. Only the dashboard server layout is
//! exposed today.

use panel_core::entities::{parse_bool_setting, Admin, ServersLayout, SERVERS_GRID_KEY};
use tracing::{info, instrument};

use crate::dto::SettingResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Settings service
pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    /// Create a new SettingsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Whether the server list is shown as a grid; unset means no
    #[instrument(skip(self))]
    pub async fn servers_grid(&self) -> ServiceResult<bool> {
        let value = self.ctx.settings_repo().get(SERVERS_GRID_KEY).await?;
        Ok(value.as_deref().is_some_and(parse_bool_setting))
    }

    /// Layout selected by the `serversGrid` setting
    pub async fn servers_layout(&self) -> ServiceResult<ServersLayout> {
        Ok(ServersLayout::from_grid_flag(self.servers_grid().await?))
    }

    /// Switch the server list layout
    #[instrument(skip(self, admin), fields(admin = %admin.steam_id))]
    pub async fn set_servers_grid(&self, admin: &Admin, enabled: bool) -> ServiceResult<SettingResponse> {
        self.ctx
            .settings_repo()
            .set(SERVERS_GRID_KEY, if enabled { "true" } else { "false" })
            .await?;

        info!(enabled, "Servers grid setting updated");

        Ok(SettingResponse {
            key: SERVERS_GRID_KEY.to_string(),
            value: serde_json::Value::Bool(enabled),
        })
    }
}
