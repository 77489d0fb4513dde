//! Repository traits

mod repositories;

pub use repositories::{
    AdminRepository, RepoResult, SanctionCounts, SanctionRepository, ServerRepository,
    SettingsRepository,
};
