//! Team command handlers

use log::debug;

use crate::cli::{Cli, Command, CreateResource, GetResource};
use crate::output::{output_team, output_teams};
use crate::sentry::SentryClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::CreateTeam;

/// Run the 'get team' command
pub async fn run_team_command(
    client: &SentryClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Team(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let org = args.org.as_deref().unwrap_or_default();
    let spinner = create_spinner(
        &format!("Fetching teams for '{}'...", client.resolve_org(org)?),
        cli.batch,
    );
    let result = client.organization_teams(org).await;
    finish_spinner(spinner);

    let mut teams = result?;
    if let Some(filter) = &args.filter {
        teams.retain(|t| t.matches_filter(filter));
        debug!("Filtered to {} teams matching '{}'", teams.len(), filter);
    }

    output_teams(&teams, args.output, cli.no_header);
    Ok(())
}

/// Run the 'create team' command
pub async fn run_create_team_command(
    client: &SentryClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Create {
        resource: CreateResource::Team(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let mut options = CreateTeam::new(&args.name);
    if let Some(slug) = &args.slug {
        options = options.slug(slug);
    }

    let org = args.org.as_deref().unwrap_or_default();
    let spinner = create_spinner(
        &format!(
            "Creating team '{}' in '{}'...",
            args.name,
            client.resolve_org(org)?
        ),
        cli.batch,
    );
    let result = client.create_team(&options, org).await;
    finish_spinner(spinner);

    let team = result?;
    debug!("Created team '{}' ({})", team.slug(), team.id());
    output_team(&team, args.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sentryctl", "--batch"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[tokio::test]
    async fn test_run_team_command_with_filter() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "slug": "core", "name": "Core"},
                {"id": "2", "slug": "ops", "name": "Ops"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["get", "team", "--org", "acme", "-f", "CO"]);
        assert!(run_team_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_create_team_command_posts_name_and_slug() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/organizations/default-org/teams/"))
            .and(body_json(serde_json::json!({"name": "Core", "slug": "core"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "9", "slug": "core", "name": "Core"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["create", "team", "Core", "--slug", "core", "-o", "json"]);
        assert!(run_create_team_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_create_team_command_conflict() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/organizations/acme/teams/"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"detail": "A team with this slug already exists."})),
            )
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["create", "team", "Core", "--org", "acme"]);
        let err = run_create_team_command(&client, &cli).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
