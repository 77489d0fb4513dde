//! Axum extractors for request handling
//!
//! Custom extractors for identity, the admin guard, validation, and paging.

mod auth;
mod paging;
mod path;
mod query;
mod validated;

pub use auth::{AnyAdmin, FlagRequirement, Identity, RequireAdmin, SettingsManagers};
pub use paging::Paging;
pub use path::ApiPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
