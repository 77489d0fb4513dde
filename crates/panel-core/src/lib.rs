//! # panel-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! admin access decision. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{AccessDecision, DenialReason};
pub use entities::{
    parse_bool_setting, Admin, GameServer, Sanction, SanctionKind, SanctionStatus, ServersLayout,
    SERVERS_GRID_KEY,
};
pub use error::DomainError;
pub use traits::{
    AdminRepository, RepoResult, SanctionCounts, SanctionRepository, ServerRepository,
    SettingsRepository,
};
pub use value_objects::{
    total_pages, FlagParseError, Flags, Page, PageRequest, SteamId, SteamIdParseError,
};
