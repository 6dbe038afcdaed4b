//! Teams module - create and list teams in organizations

mod api;
mod commands;
mod models;

pub use commands::{run_create_team_command, run_team_command};
pub use models::CreateTeam;
