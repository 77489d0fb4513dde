//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use panel_api::{create_app, create_app_state, AppState};
use panel_client::PanelClient;
use panel_common::{AppConfig, JwtService};
use panel_core::entities::{Admin, SanctionKind};
use panel_core::value_objects::{Flags, SteamId};
use panel_db::{
    MemoryAdminRepository, MemorySanctionRepository, MemoryServerRepository,
    MemorySettingsRepository,
};
use panel_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{sanction, unique_account_id};

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Secret shared by the in-memory server and the token helper
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// In-memory repositories behind a test server
#[derive(Clone)]
pub struct MemoryBackend {
    pub admins: Arc<MemoryAdminRepository>,
    pub bans: Arc<MemorySanctionRepository>,
    pub mutes: Arc<MemorySanctionRepository>,
    pub servers: Arc<MemoryServerRepository>,
    pub settings: Arc<MemorySettingsRepository>,
}

impl MemoryBackend {
    fn new() -> Self {
        Self {
            admins: Arc::new(MemoryAdminRepository::new()),
            bans: Arc::new(MemorySanctionRepository::new(SanctionKind::Ban)),
            mutes: Arc::new(MemorySanctionRepository::new(SanctionKind::Mute)),
            servers: Arc::new(MemoryServerRepository::new()),
            settings: Arc::new(MemorySettingsRepository::new()),
        }
    }

    /// Repository of one record kind
    pub fn sanctions(&self, kind: SanctionKind) -> &MemorySanctionRepository {
        match kind {
            SanctionKind::Ban => &self.bans,
            SanctionKind::Mute => &self.mutes,
        }
    }

    /// Insert `n` records of `kind`, spaced one minute apart
    pub fn seed_sanctions(&self, kind: SanctionKind, n: u32, minutes: i32) {
        for i in 0..n {
            self.sanctions(kind).insert(sanction(
                kind,
                minutes,
                chrono::Duration::minutes(i64::from(i) + 1),
            ));
        }
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Present when the server runs on in-memory repositories
    pub backend: Option<MemoryBackend>,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on in-memory repositories
    pub async fn start() -> Result<Self> {
        let backend = MemoryBackend::new();
        let jwt = Arc::new(JwtService::new(TEST_JWT_SECRET, 3600));

        let ctx = ServiceContextBuilder::new()
            .admin_repo(backend.admins.clone())
            .ban_repo(backend.bans.clone())
            .mute_repo(backend.mutes.clone())
            .server_repo(backend.servers.clone())
            .settings_repo(backend.settings.clone())
            .jwt_service(jwt)
            .build()?;

        let state = AppState::new(ctx, memory_config()?);
        Self::serve(state, Some(backend)).await
    }

    /// Start a server on PostgreSQL using the environment configuration
    pub async fn start_postgres() -> Result<Self> {
        let config = test_config()?;
        let state = create_app_state(config).await?;
        Self::serve(state, None).await
    }

    async fn serve(state: AppState, backend: Option<MemoryBackend>) -> Result<Self> {
        let jwt = JwtService::new(&state.config().jwt.secret, 3600);
        let app = create_app(state);

        let port = get_test_port();
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            backend,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// In-memory repositories; panics for a PostgreSQL-backed server
    pub fn memory(&self) -> &MemoryBackend {
        self.backend
            .as_ref()
            .expect("server is not running on in-memory repositories")
    }

    /// Register an administrator and return a token for it
    pub fn admin_token(&self, flags: &str) -> String {
        let steam_id = SteamId::from_account_id(unique_account_id());
        self.memory().admins.insert(Admin::new(
            steam_id,
            format!("admin-{}", steam_id.account_id()),
            Flags::parse_lossy(flags),
        ));
        self.token_for(steam_id)
    }

    /// Token for an arbitrary identity
    pub fn token_for(&self, steam_id: SteamId) -> String {
        self.jwt
            .issue_token(steam_id)
            .expect("failed to issue test token")
    }

    /// Typed client for this server
    pub fn panel_client(&self) -> PanelClient {
        PanelClient::new(self.base_url()).expect("valid test base url")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }
}

/// Configuration for in-memory servers; no environment needed
pub fn memory_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|key| match key {
        "API_HOST" => Some("127.0.0.1".to_string()),
        "API_PORT" => Some("0".to_string()),
        "DATABASE_URL" => Some("postgres://unused".to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    config.database.run_migrations = true;

    Ok(config)
}

/// Helper to check if the PostgreSQL test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
