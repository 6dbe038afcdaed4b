//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a team in an organization
    Team(CreateTeamArgs),
}

/// Arguments for 'create team' subcommand
#[derive(Parser, Debug)]
pub struct CreateTeamArgs {
    /// Team name
    pub name: String,

    /// Team slug (generated from the name by Sentry when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Organization slug (defaults to the configured organization)
    #[arg(long = "org")]
    pub org: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
