//! Integration test utilities for the admin panel
//!
//! This crate provides helpers for running end-to-end tests against
//! a real HTTP listener, backed by in-memory or PostgreSQL repositories.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
