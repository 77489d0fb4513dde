//! Admin entity - an administrator account of the panel

use chrono::{DateTime, Utc};

use crate::value_objects::{Flags, SteamId};

/// Administrator keyed by Steam64 identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub steam_id: SteamId,
    pub name: String,
    pub flags: Flags,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new Admin with the given flags
    pub fn new(steam_id: SteamId, name: String, flags: Flags) -> Self {
        Self {
            steam_id,
            name,
            flags,
            created_at: Utc::now(),
        }
    }

    /// Check if the admin holds at least one of the required flags
    #[inline]
    pub fn has_any(&self, required: Flags) -> bool {
        self.flags.satisfies(required)
    }
}
