//! sentryctl - Explore and manage Sentry organizations, projects and teams
//!
//! A thin client over the Sentry web API (`/api/0`) plus a kubectl-style CLI.
//!
//! # Features
//!
//! - List organizations, projects and teams
//! - Fetch, rename and re-slug an organization
//! - Create teams
//! - Query organization event stats
//! - Named contexts with a default organization
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Organizations you are a member of
//! sentryctl get org --member
//!
//! # Projects of the default organization
//! SENTRY_ORG=acme sentryctl get prj
//!
//! # Rejected events since a point in time
//! sentryctl get stats --org acme --stat rejected --since 2016-08-25 -o json
//!
//! # New team
//! sentryctl create team "Platform" --org acme
//! ```
//!
//! As a library:
//!
//! ```no_run
//! # async fn run() -> sentryctl::Result<()> {
//! use sentryctl::{CreateTeam, SentryClient};
//!
//! let client = SentryClient::new("token".into(), "sentry.io".into(), "acme".into());
//! let projects = client.organization_projects("").await?;
//! let team = client.create_team(&CreateTeam::new("core"), "").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod sentry;
pub mod ui;

pub use cli::{Cli, Command, ConfigAction, CreateResource, GetResource, OutputFormat, UpdateResource};
pub use error::{Result, SentryError};
pub use sentry::{
    run_create_team_command, run_org_command, run_prj_command, run_stats_command,
    run_team_command, run_update_org_command, ApiObject, CreateTeam, HostResolver, SentryClient,
    Stat, StatPoint, StatsQuery, TokenResolver, UpdateOrganization,
};
