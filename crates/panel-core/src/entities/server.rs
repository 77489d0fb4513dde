//! Game server entity

use chrono::{DateTime, Utc};

/// A community game server listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameServer {
    pub id: i32,
    pub name: String,
    /// Host name or IP address
    pub address: String,
    pub port: u16,
    /// Game/mod tag, e.g. `cstrike`
    pub game: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GameServer {
    /// `host:port` endpoint
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Steam browser protocol link that joins the server
    pub fn connect_url(&self) -> String {
        format!("steam://connect/{}", self.endpoint())
    }
}
