//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod admins;
pub mod dashboard;
pub mod health;
pub mod sanctions;
pub mod servers;
pub mod settings;
pub mod stats;
