//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and is created per call.

pub mod context;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod sanction;
pub mod server;
pub mod settings;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use guard::AdminGuardService;
pub use sanction::SanctionService;
pub use server::ServerService;
pub use settings::SettingsService;
pub use stats::StatsService;
