//! # panel-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `panel-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - In-memory repositories for running without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use panel_core::{SanctionRepository, PageRequest};
//! use panel_db::pool::{create_pool, DatabaseConfig};
//! use panel_db::repositories::PgSanctionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let bans = PgSanctionRepository::bans(pool);
//!
//!     let page = bans.find_page(PageRequest::default()).await?;
//!     println!("{} bans", page.count);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryAdminRepository, MemorySanctionRepository, MemoryServerRepository,
    MemorySettingsRepository,
};
pub use pool::{create_pool, ping, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{
    PgAdminRepository, PgSanctionRepository, PgServerRepository, PgSettingsRepository,
};
