//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::{parse_timestamp, OutputFormat};
use super::enums::StatArg;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organizations
    #[command(
        visible_alias = "orgs",
        visible_alias = "organization",
        visible_alias = "organizations"
    )]
    Org(OrgArgs),

    /// Get projects in an organization
    #[command(
        visible_alias = "prjs",
        visible_alias = "project",
        visible_alias = "projects"
    )]
    Prj(PrjArgs),

    /// Get teams in an organization
    #[command(visible_alias = "teams")]
    Team(TeamArgs),

    /// Get event counts for an organization
    #[command(visible_alias = "stat")]
    Stats(StatsArgs),
}

/// Arguments for 'get org' subcommand
#[derive(Parser, Debug)]
pub struct OrgArgs {
    /// Organization slug (if specified, shows details for that organization)
    pub slug: Option<String>,

    /// Only list organizations you are a member of
    #[arg(short, long, default_value_t = false)]
    pub member: bool,

    /// Filter organizations by name or slug (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get prj' subcommand
#[derive(Parser, Debug)]
pub struct PrjArgs {
    /// Organization slug (defaults to the configured organization)
    #[arg(long = "org")]
    pub org: Option<String>,

    /// Filter projects by name or slug (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get team' subcommand
#[derive(Parser, Debug)]
pub struct TeamArgs {
    /// Organization slug (defaults to the configured organization)
    #[arg(long = "org")]
    pub org: Option<String>,

    /// Filter teams by name or slug (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get stats' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        sentryctl get stats --org acme --stat received --since 1472158800\n  \
        sentryctl get stats --stat rejected --since 2016-08-25 --until 2016-08-26T00:00:00Z")]
pub struct StatsArgs {
    /// Organization slug (defaults to the configured organization)
    #[arg(long = "org")]
    pub org: Option<String>,

    /// Name of the stat to query
    #[arg(long, value_enum)]
    pub stat: Option<StatArg>,

    /// Start of the query (epoch seconds, RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub since: Option<i64>,

    /// End of the query (epoch seconds, RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub until: Option<i64>,

    /// Explicit bucket resolution (e.g. 10s, 1h, 1d)
    #[arg(long)]
    pub resolution: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
