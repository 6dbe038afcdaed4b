//! Sentry API client module
//!
//! This module provides functionality to interact with the Sentry web API.

mod client;
mod credentials;
mod host;
pub mod models;
pub mod organizations;
pub mod teams;

pub use client::SentryClient;
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use models::{ApiObject, StatPoint};
pub use organizations::{
    run_org_command, run_prj_command, run_stats_command, run_update_org_command, Stat,
    StatsQuery, UpdateOrganization,
};
pub use teams::{run_create_team_command, run_team_command, CreateTeam};
