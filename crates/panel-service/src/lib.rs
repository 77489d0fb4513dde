//! # panel-service
//!
//! Application layer containing the admin guard, record listings, table
//! rendering, settings, statistics and the dashboard composer.

pub mod dto;
pub mod services;

pub use services::{
    AdminGuardService, DashboardService, SanctionService, ServerService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SettingsService, StatsService,
};
