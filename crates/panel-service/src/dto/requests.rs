//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Settings Requests
// ============================================================================

/// Toggle the grid layout of the dashboard server list
///
/// `enabled` must be present and non-null.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServersGridRequest {
    #[validate(required)]
    pub enabled: Option<bool>,
}

impl UpdateServersGridRequest {
    /// Requested value of a validated request
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// `?page=&rows=` of record listings
///
/// Out-of-range values are clamped rather than rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub rows: Option<u32>,
}

/// `?rows=` of the dashboard
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DashboardQuery {
    pub rows: Option<u32>,
}
