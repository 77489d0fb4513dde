//! API Integration Tests
//!
//! Most tests run against in-memory repositories over a real TCP listener.
//! The PostgreSQL tests additionally require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use panel_client::{LoadState, SanctionFeed};
use panel_core::entities::SanctionKind;
use panel_core::value_objects::SteamId;
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_ready_postgres() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_listing_postgres() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/api/bans?page=1&rows=5").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["count"].is_u64());
    assert!(body["results"].as_array().unwrap().len() <= 5);
}

// ============================================================================
// Admin Guard Tests
// ============================================================================

#[tokio::test]
async fn test_guard_missing_identity() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/admins/@me").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(!body.success);
    assert_eq!(body.error, "Protected Route");
    assert_eq!(body.code, "MISSING_IDENTITY");
}

#[tokio::test]
async fn test_guard_unknown_admin() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(SteamId::from_account_id(999_999));

    let response = server.get_auth("/api/admins/@me", &token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error, "Protected Route");
}

#[tokio::test]
async fn test_guard_insufficient_flags() {
    let server = TestServer::start().await.unwrap();
    let token = server.admin_token("mod helper");

    let response = server
        .put_auth(
            "/api/settings/servers-grid",
            &token,
            &ServersGridRequest { enabled: true },
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.code, "INSUFFICIENT_FLAGS");
}

#[tokio::test]
async fn test_guard_any_flag_matches() {
    let server = TestServer::start().await.unwrap();
    let token = server.admin_token("mod admin");

    let response = server
        .put_auth(
            "/api/settings/servers-grid",
            &token,
            &ServersGridRequest { enabled: true },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_current_admin_through_client() {
    let server = TestServer::start().await.unwrap();
    let token = server.admin_token("owner vip");

    let admin = server
        .panel_client()
        .with_token(token)
        .current_admin()
        .await
        .unwrap();
    assert_eq!(admin.flags, vec!["owner", "vip"]);

    let err = server.panel_client().current_admin().await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.code(), Some("MISSING_IDENTITY"));
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_mute_listing_pages() {
    let server = TestServer::start().await.unwrap();
    server.memory().seed_sanctions(SanctionKind::Mute, 23, 30);

    let listing = server
        .panel_client()
        .sanctions(SanctionKind::Mute, 3, 10)
        .await
        .unwrap();
    assert_eq!(listing.count, 23);
    assert_eq!(listing.results.len(), 3);
    assert_eq!(listing.pages(10), 3);
}

#[tokio::test]
async fn test_listing_rejects_bad_query() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/bans?rows=ten").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_sanction_lookup() {
    let server = TestServer::start().await.unwrap();
    let id = server
        .memory()
        .bans
        .insert(sanction(SanctionKind::Ban, 0, chrono::Duration::hours(2)));

    let record = server
        .panel_client()
        .sanction(SanctionKind::Ban, id)
        .await
        .unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.duration, 0);

    let err = server
        .panel_client()
        .sanction(SanctionKind::Ban, id + 1)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.code(), Some("UNKNOWN_BAN"));
}

#[tokio::test]
async fn test_ban_table_rendering() {
    let server = TestServer::start().await.unwrap();
    let memory = server.memory();
    memory
        .bans
        .insert(sanction(SanctionKind::Ban, 100, chrono::Duration::minutes(50)));

    let response = server.get("/api/bans/table").await.unwrap();
    let table: Table = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(table.title, "Bans");
    assert_eq!(table.pages, 1);

    let row = &table.items[0];
    assert_eq!(row["status"]["label"], "active");
    assert_eq!(row["status"]["color"], "danger");
    assert_eq!(row["duration"]["label"], "100 minutes");
    assert_eq!(row["time_left"]["kind"], "progress");
    assert_eq!(row["time_left"]["percentage"], 50);
    assert_eq!(row["time_left"]["color"], "primary");
    assert_eq!(row["reason"]["short"], "Repeated disruptive behav");
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_follows_grid_setting() {
    let server = TestServer::start().await.unwrap();
    let memory = server.memory();
    memory.servers.insert("Retake #1", "10.0.0.5", 27015, Some("csgo"));
    memory.seed_sanctions(SanctionKind::Ban, 4, 0);
    memory.seed_sanctions(SanctionKind::Mute, 2, 5);

    let response = server.get("/api/dashboard?rows=3").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["servers"]["layout"], "table");
    assert_eq!(body["stats"]["bans"]["active"], 4);
    assert_eq!(body["stats"]["mutes"]["total"], 2);
    assert_eq!(body["bans"]["pages"], 2);
    assert_eq!(body["bans"]["items"].as_array().unwrap().len(), 3);

    let setting = server
        .panel_client()
        .with_token(server.admin_token("owner"))
        .set_servers_grid(true)
        .await
        .unwrap();
    assert_eq!(setting.value, Value::Bool(true));

    let response = server.get("/api/servers").await.unwrap();
    let servers: ServerList = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(servers.layout, "grid");
    assert_eq!(servers.servers[0].connect_url, "steam://connect/10.0.0.5:27015");
}

// ============================================================================
// Client Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_pages_through_bans() {
    let server = TestServer::start().await.unwrap();
    server.memory().seed_sanctions(SanctionKind::Ban, 15, 60);

    let feed = SanctionFeed::new_shared(server.panel_client(), SanctionKind::Ban);
    feed.refresh().await.unwrap();
    assert_eq!(feed.pages(), 2);

    let first_page = feed.data().unwrap();
    feed.set_page(2);
    assert_eq!(feed.data(), Some(first_page));

    feed.refresh().await.unwrap();
    assert_eq!(feed.data().unwrap().results.len(), 5);
    assert_eq!(feed.state(), LoadState::Idle);
}

#[tokio::test]
async fn test_feed_polling_sees_new_records() {
    let server = TestServer::start().await.unwrap();
    let feed = SanctionFeed::new_shared(server.panel_client(), SanctionKind::Mute);

    let handle = feed.spawn_polling(Duration::from_millis(25));
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(feed.data().unwrap().count, 0);

    server.memory().seed_sanctions(SanctionKind::Mute, 2, 10);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(feed.data().unwrap().count, 2);

    drop(handle);
}
