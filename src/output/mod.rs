//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

pub mod common;
mod organizations;
mod projects;
mod stats;
mod teams;

pub use common::{escape_csv, output_raw, print_json, print_yaml};
pub use organizations::{output_organization, output_organizations};
pub use projects::output_projects;
pub use stats::output_stats;
pub use teams::{output_team, output_teams};
