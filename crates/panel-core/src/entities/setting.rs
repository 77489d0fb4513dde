//! Panel settings - key/value pairs

use serde::{Deserialize, Serialize};

/// Setting key that switches the dashboard server list to a grid
pub const SERVERS_GRID_KEY: &str = "serversGrid";

/// How the dashboard lays out the server list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServersLayout {
    Grid,
    Table,
}

impl ServersLayout {
    /// Layout selected by the `serversGrid` setting
    pub fn from_grid_flag(grid: bool) -> Self {
        if grid {
            Self::Grid
        } else {
            Self::Table
        }
    }
}

/// Interpret a stored setting value as a boolean
///
/// `true`, `1`, `yes` and `on` are truthy; everything else is false.
pub fn parse_bool_setting(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
