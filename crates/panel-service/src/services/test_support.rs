//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use panel_common::JwtService;
use panel_core::entities::{Admin, Sanction, SanctionKind, SanctionStatus};
use panel_core::value_objects::{Flags, SteamId};
use panel_db::{
    MemoryAdminRepository, MemorySanctionRepository, MemoryServerRepository,
    MemorySettingsRepository,
};

use super::context::{ServiceContext, ServiceContextBuilder};

pub(crate) struct TestContext {
    pub ctx: ServiceContext,
    pub admins: Arc<MemoryAdminRepository>,
    pub bans: Arc<MemorySanctionRepository>,
    pub mutes: Arc<MemorySanctionRepository>,
    pub servers: Arc<MemoryServerRepository>,
    pub settings: Arc<MemorySettingsRepository>,
    jwt: Arc<JwtService>,
}

impl TestContext {
    pub fn new() -> Self {
        let admins = Arc::new(MemoryAdminRepository::new());
        let bans = Arc::new(MemorySanctionRepository::new(SanctionKind::Ban));
        let mutes = Arc::new(MemorySanctionRepository::new(SanctionKind::Mute));
        let servers = Arc::new(MemoryServerRepository::new());
        let settings = Arc::new(MemorySettingsRepository::new());
        let jwt = Arc::new(JwtService::new("service-test-secret", 3600));

        let ctx = ServiceContextBuilder::new()
            .admin_repo(admins.clone())
            .ban_repo(bans.clone())
            .mute_repo(mutes.clone())
            .server_repo(servers.clone())
            .settings_repo(settings.clone())
            .jwt_service(jwt.clone())
            .build()
            .unwrap();

        Self {
            ctx,
            admins,
            bans,
            mutes,
            servers,
            settings,
            jwt,
        }
    }

    pub fn add_admin(&self, account_id: u32, flags: &str) -> SteamId {
        let steam_id = SteamId::from_account_id(account_id);
        self.admins.insert(Admin::new(
            steam_id,
            format!("admin-{account_id}"),
            Flags::parse_lossy(flags),
        ));
        steam_id
    }

    pub fn token_for(&self, steam_id: SteamId) -> String {
        self.jwt.issue_token(steam_id).unwrap()
    }

    pub fn repo(&self, kind: SanctionKind) -> &MemorySanctionRepository {
        match kind {
            SanctionKind::Ban => &self.bans,
            SanctionKind::Mute => &self.mutes,
        }
    }

    /// Add a record created `age` ago lasting `minutes`
    pub fn add_sanction(&self, kind: SanctionKind, minutes: i32, age: Duration) -> i64 {
        let created: DateTime<Utc> = Utc::now() - age;
        self.repo(kind).insert(Sanction {
            id: 0,
            kind,
            player_steam_id: "STEAM_0:1:4242".to_string(),
            player_name: "player".to_string(),
            admin_steam_id: None,
            reason: "breaking the rules repeatedly".to_string(),
            sanction_type: "voice".to_string(),
            duration: minutes,
            created,
            ends: created + Duration::minutes(i64::from(minutes)),
            status: SanctionStatus::Active,
        })
    }
}
