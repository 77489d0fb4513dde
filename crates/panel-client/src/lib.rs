//! # panel-client
//!
//! Typed HTTP client for the admin panel API plus `SanctionFeed`, a cached,
//! pollable view over one paginated record listing.

pub mod client;
pub mod error;
pub mod feed;
pub mod models;

pub use client::PanelClient;
pub use error::{ClientError, ClientResult};
pub use feed::{query_key, LoadState, PollHandle, SanctionFeed, DEFAULT_ROWS};
pub use models::{CurrentAdmin, Listing, SanctionRecord, SettingValue};
