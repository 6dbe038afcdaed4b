//! sentryctl - main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use sentryctl::context::{resolve_active_context, resolve_default_org, run_context_command};
use sentryctl::{
    run_create_team_command, run_org_command, run_prj_command, run_stats_command,
    run_team_command, run_update_org_command, Cli, Command, CreateResource, GetResource,
    HostResolver, SentryClient, TokenResolver, UpdateResource,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting sentryctl v{}", env!("CARGO_PKG_VERSION"));

    // Config commands never talk to the API
    if let Command::Config { action } = &cli.command {
        run_context_command(action)?;
        return Ok(());
    }

    let context = resolve_active_context(cli.context.as_deref())?;

    let host = HostResolver::resolve(
        cli.host.as_deref(),
        context.as_ref().map(|c| c.host.as_str()),
    );
    let token = TokenResolver::new(&host).resolve(
        cli.token.as_deref(),
        context.as_ref().and_then(|c| c.token.as_deref()),
    )?;
    let default_org = resolve_default_org(context.as_ref());
    debug!("Resolved host={}, default_org={:?}", host, default_org);

    let client = SentryClient::new(token, host, default_org);

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Org(_) => run_org_command(&client, cli).await,
            GetResource::Prj(_) => run_prj_command(&client, cli).await,
            GetResource::Team(_) => run_team_command(&client, cli).await,
            GetResource::Stats(_) => run_stats_command(&client, cli).await,
        },
        Command::Update { resource } => match resource {
            UpdateResource::Org(_) => run_update_org_command(&client, cli).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Team(_) => run_create_team_command(&client, cli).await,
        },
        Command::Config { .. } => Ok(()),
    }
}
