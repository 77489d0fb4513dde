//! Access control for privileged routes

mod decision;

pub use decision::{AccessDecision, DenialReason};
