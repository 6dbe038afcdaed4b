//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update an organization's name or slug
    #[command(visible_alias = "organization")]
    Org(UpdateOrgArgs),
}

/// Arguments for 'update org' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        sentryctl update org acme --name \"Acme Corp\"\n  \
        sentryctl update org acme --new-slug acme-corp --yes")]
pub struct UpdateOrgArgs {
    /// Organization slug (defaults to the configured organization)
    pub slug: Option<String>,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New slug (must be available and unique)
    #[arg(long = "new-slug")]
    pub new_slug: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
