//! Response bodies as seen by the client

use chrono::{DateTime, Utc};
use panel_core::entities::{SanctionKind, SanctionStatus};
use panel_core::value_objects::total_pages;
use serde::{Deserialize, Serialize};

/// `{ count, results }` envelope of the listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Listing<T> {
    /// Page count for this envelope at `rows` per page
    pub fn pages(&self, rows: u32) -> u32 {
        total_pages(self.count, rows)
    }
}

/// One ban or mute record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctionRecord {
    pub id: i64,
    pub kind: SanctionKind,
    pub player_steam_id: String,
    pub player_name: String,
    #[serde(default)]
    pub admin_steam_id: Option<String>,
    pub reason: String,
    #[serde(rename = "type")]
    pub sanction_type: String,
    pub duration: i32,
    pub created: DateTime<Utc>,
    pub ends: DateTime<Utc>,
    pub status: SanctionStatus,
}

/// `GET /api/admins/@me`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentAdmin {
    pub steam_id: String,
    pub name: String,
    pub flags: Vec<String>,
}

/// `{ key, value }` of a stored setting
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingValue {
    pub key: String,
    pub value: serde_json::Value,
}

/// Error body `{ success: false, error, code }`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_pages() {
        let listing: Listing<SanctionRecord> = Listing {
            count: 21,
            results: Vec::new(),
        };
        assert_eq!(listing.pages(10), 3);
        assert_eq!(listing.pages(0), 0);
    }

    #[test]
    fn test_record_decodes_type_field() {
        let json = r#"{
            "id": 3,
            "kind": "mute",
            "player_steam_id": "STEAM_0:1:99",
            "player_name": "loud",
            "reason": "mic spam",
            "type": "voice",
            "duration": 0,
            "created": "2024-05-01T12:00:00Z",
            "ends": "2024-05-01T12:00:00Z",
            "status": "active"
        }"#;

        let record: SanctionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, SanctionKind::Mute);
        assert_eq!(record.sanction_type, "voice");
        assert!(record.admin_steam_id.is_none());
    }
}
