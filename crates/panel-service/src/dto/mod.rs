//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs and query parameters
//! - Response DTOs for serializing API outputs
//! - The table view renderer for sanction records

pub mod requests;
pub mod responses;
pub mod table;

pub use requests::{DashboardQuery, PageQuery, UpdateServersGridRequest};

pub use responses::{
    AdminResponse, DashboardResponse, HealthChecks, HealthResponse, ListResponse,
    ReadinessResponse, SanctionResponse, ServerListResponse, ServerResponse, SettingResponse,
    StatsResponse,
};

pub use table::{
    render_row, Chip, ChipColor, PlayerCell, ReasonCell, SanctionRow, TableResponse,
    TimeLeftCell, REASON_PREVIEW_CHARS,
};
