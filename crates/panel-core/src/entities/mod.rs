//! Domain entities - core business objects

mod admin;
mod sanction;
mod server;
mod setting;

pub use admin::Admin;
pub use sanction::{Sanction, SanctionKind, SanctionStatus};
pub use server::GameServer;
pub use setting::{parse_bool_setting, ServersLayout, SERVERS_GRID_KEY};
