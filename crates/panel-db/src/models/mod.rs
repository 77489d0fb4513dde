//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod sanction;
mod server;
mod setting;

pub use admin::AdminModel;
pub use sanction::{SanctionCountsModel, SanctionModel};
pub use server::ServerModel;
pub use setting::SettingModel;
