//! Organization module

mod api;
mod commands;
mod models;

pub use commands::{
    run_org_command, run_prj_command, run_stats_command, run_update_org_command,
};
pub use models::{Stat, StatsQuery, UpdateOrganization};
