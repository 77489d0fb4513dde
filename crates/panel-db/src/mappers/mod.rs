//! Entity to model mappers
//!
//! Conversions between domain entities (panel-core) and database models.
//! - `TryFrom<Model> for Entity` / `sanction_from_model`: database rows to domain objects
//! - `*Insert` structs: entity data prepared for database writes

mod admin;
mod sanction;
mod server;

pub use admin::AdminInsert;
pub use sanction::{sanction_from_model, SanctionInsert};
