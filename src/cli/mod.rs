//! CLI argument parsing

mod common;
mod context;
mod create;
mod enums;
mod get;
mod update;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{parse_timestamp, OutputFormat};
pub use context::{ConfigAction, DeleteContextArgs, SetContextArgs, UseContextArgs};
pub use create::{CreateResource, CreateTeamArgs};
pub use enums::StatArg;
pub use get::{GetResource, OrgArgs, PrjArgs, StatsArgs, TeamArgs};
pub use update::{UpdateOrgArgs, UpdateResource};

/// Sentry organizations, projects and teams from the command line
#[derive(Parser, Debug)]
#[command(name = "sentryctl")]
#[command(version)]
#[command(about = "Explore and manage Sentry organizations, projects and teams", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
        sentryctl get org --member\n  \
        sentryctl get prj --org acme -o json\n  \
        sentryctl get stats --org acme --stat received --since 2016-08-25\n  \
        sentryctl create team \"Platform\" --org acme\n  \
        sentryctl config set-context saas --host sentry.io --org acme")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Sentry host or URL (env: SENTRY_URL, default: sentry.io)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides env vars and context)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Context to use for this invocation
    #[arg(short = 'c', long, global = true)]
    pub context: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources (organizations, projects, teams, stats)
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Manage connection contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sentryctl", "get", "org"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.host.is_none());
        assert!(cli.token.is_none());
        assert!(cli.context.is_none());
        assert!(!cli.batch);
        assert!(!cli.no_header);
    }

    #[test]
    fn test_get_org_args() {
        let cli = Cli::parse_from(["sentryctl", "get", "org", "--member", "-f", "ac", "-o", "csv"]);
        let Command::Get {
            resource: GetResource::Org(args),
        } = cli.command
        else {
            panic!("expected get org");
        };
        assert!(args.member);
        assert_eq!(args.filter.as_deref(), Some("ac"));
        assert_eq!(args.output, OutputFormat::Csv);
        assert!(args.slug.is_none());
    }

    #[test]
    fn test_get_org_alias_with_slug() {
        let cli = Cli::parse_from(["sentryctl", "get", "orgs", "acme"]);
        let Command::Get {
            resource: GetResource::Org(args),
        } = cli.command
        else {
            panic!("expected get org");
        };
        assert_eq!(args.slug.as_deref(), Some("acme"));
        assert!(!args.member);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "sentryctl",
            "get",
            "team",
            "--org",
            "acme",
            "-H",
            "sentry.corp.com",
            "--batch",
        ]);
        assert_eq!(cli.host.as_deref(), Some("sentry.corp.com"));
        assert!(cli.batch);
        let Command::Get {
            resource: GetResource::Team(args),
        } = cli.command
        else {
            panic!("expected get team");
        };
        assert_eq!(args.org.as_deref(), Some("acme"));
    }

    #[test]
    fn test_get_stats_args() {
        let cli = Cli::parse_from([
            "sentryctl",
            "get",
            "stats",
            "--stat",
            "rejected",
            "--since",
            "2016-08-25T21:00:00Z",
            "--until",
            "1472245200",
            "--resolution",
            "1h",
        ]);
        let Command::Get {
            resource: GetResource::Stats(args),
        } = cli.command
        else {
            panic!("expected get stats");
        };
        assert_eq!(args.stat, Some(StatArg::Rejected));
        assert_eq!(args.since, Some(1472158800));
        assert_eq!(args.until, Some(1472245200));
        assert_eq!(args.resolution.as_deref(), Some("1h"));
    }

    #[test]
    fn test_get_stats_rejects_bad_timestamp() {
        let result = Cli::try_parse_from(["sentryctl", "get", "stats", "--since", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_org_args() {
        let cli = Cli::parse_from([
            "sentryctl",
            "update",
            "org",
            "acme",
            "--name",
            "Acme Corp",
            "--new-slug",
            "acme-corp",
            "-y",
        ]);
        let Command::Update {
            resource: UpdateResource::Org(args),
        } = cli.command
        else {
            panic!("expected update org");
        };
        assert_eq!(args.slug.as_deref(), Some("acme"));
        assert_eq!(args.name.as_deref(), Some("Acme Corp"));
        assert_eq!(args.new_slug.as_deref(), Some("acme-corp"));
        assert!(args.yes);
    }

    #[test]
    fn test_create_team_args() {
        let cli = Cli::parse_from([
            "sentryctl",
            "create",
            "team",
            "Platform",
            "--slug",
            "platform",
            "--org",
            "acme",
        ]);
        let Command::Create {
            resource: CreateResource::Team(args),
        } = cli.command
        else {
            panic!("expected create team");
        };
        assert_eq!(args.name, "Platform");
        assert_eq!(args.slug.as_deref(), Some("platform"));
        assert_eq!(args.org.as_deref(), Some("acme"));
    }

    #[test]
    fn test_create_team_requires_name() {
        assert!(Cli::try_parse_from(["sentryctl", "create", "team"]).is_err());
    }

    #[test]
    fn test_config_set_context() {
        let cli = Cli::parse_from([
            "sentryctl",
            "config",
            "set-context",
            "saas",
            "--host",
            "sentry.io",
            "--org",
            "acme",
        ]);
        let Command::Config {
            action: ConfigAction::SetContext(args),
        } = cli.command
        else {
            panic!("expected config set-context");
        };
        assert_eq!(args.name, "saas");
        assert_eq!(args.host.as_deref(), Some("sentry.io"));
        assert_eq!(args.org.as_deref(), Some("acme"));
        assert!(args.token.is_none());
    }

    #[test]
    fn test_config_contexts_alias() {
        let cli = Cli::parse_from(["sentryctl", "config", "contexts"]);
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::GetContexts
            }
        ));
    }

    #[test]
    fn test_config_set_context_rejects_bad_name() {
        for name in ["", "my context"] {
            let result = Cli::try_parse_from(["sentryctl", "config", "set-context", name, "--host", "sentry.io"]);
            assert!(result.is_err(), "name {:?} should be rejected", name);
        }
    }

    #[test]
    fn test_invalid_output_format() {
        let result = Cli::try_parse_from(["sentryctl", "get", "org", "-o", "xml"]);
        assert!(result.is_err());
    }
}
