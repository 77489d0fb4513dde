//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in panel-core.

mod admin;
mod error;
mod sanction;
mod server;
mod settings;

pub use admin::PgAdminRepository;
pub use sanction::PgSanctionRepository;
pub use server::PgServerRepository;
pub use settings::PgSettingsRepository;
