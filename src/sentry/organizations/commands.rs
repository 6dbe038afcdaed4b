//! Organization command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource, UpdateResource};
use crate::output::{output_organization, output_organizations, output_projects, output_stats};
use crate::sentry::SentryClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::{Stat, StatsQuery, UpdateOrganization};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Run the 'get org' command
pub async fn run_org_command(client: &SentryClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Org(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(slug) = &args.slug {
        let spinner = create_spinner(&format!("Fetching organization '{}'...", slug), cli.batch);
        let result = client.organization(slug).await;
        finish_spinner(spinner);

        output_organization(&result?, args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner("Fetching organizations...", cli.batch);
    let result = client.organizations(args.member).await;
    finish_spinner(spinner);

    let mut orgs = result?;
    debug!("Fetched {} organizations", orgs.len());

    if let Some(filter) = &args.filter {
        orgs.retain(|org| org.matches_filter(filter));
        debug!(
            "Filtered to {} organizations matching '{}'",
            orgs.len(),
            filter
        );
    }

    output_organizations(&orgs, args.output, cli.no_header);
    Ok(())
}

/// Run the 'get prj' command
pub async fn run_prj_command(client: &SentryClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Prj(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let org = args.org.as_deref().unwrap_or_default();
    let spinner = create_spinner(
        &format!("Fetching projects for '{}'...", client.resolve_org(org)?),
        cli.batch,
    );
    let result = client.organization_projects(org).await;
    finish_spinner(spinner);

    let mut projects = result?;
    if let Some(filter) = &args.filter {
        projects.retain(|p| p.matches_filter(filter));
        debug!(
            "Filtered to {} projects matching '{}'",
            projects.len(),
            filter
        );
    }

    output_projects(&projects, args.output, cli.no_header);
    Ok(())
}

/// Run the 'get stats' command
pub async fn run_stats_command(client: &SentryClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Stats(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let query = build_stats_query(
        args.stat.map(Into::into),
        args.since,
        args.until,
        args.resolution.as_deref(),
    );
    debug!("Stats query: {:?}", query);

    let org = args.org.as_deref().unwrap_or_default();
    let spinner = create_spinner(
        &format!("Fetching stats for '{}'...", client.resolve_org(org)?),
        cli.batch,
    );
    let result = client.organization_stats(org, &query).await;
    finish_spinner(spinner);

    let points = result?;
    output_stats(&points, args.output, cli.no_header);
    Ok(())
}

fn build_stats_query(
    stat: Option<Stat>,
    since: Option<i64>,
    until: Option<i64>,
    resolution: Option<&str>,
) -> StatsQuery {
    let mut query = StatsQuery::default();
    if let Some(stat) = stat {
        query = query.stat(stat);
    }
    if let Some(since) = since {
        query = query.since(since);
    }
    if let Some(until) = until {
        query = query.until(until);
    }
    if let Some(resolution) = resolution {
        query = query.resolution(resolution);
    }
    query
}

/// Run the 'update org' command
pub async fn run_update_org_command(client: &SentryClient, cli: &Cli) -> CommandResult {
    let Command::Update {
        resource: UpdateResource::Org(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let mut update = UpdateOrganization::default();
    if let Some(name) = &args.name {
        update = update.name(name);
    }
    if let Some(new_slug) = &args.new_slug {
        update = update.slug(new_slug);
    }

    if update.is_empty() {
        return Err("Nothing to update: pass --name and/or --new-slug".into());
    }

    let slug = args.slug.as_deref().unwrap_or_default();
    let current = client.resolve_org(slug)?;

    if let Some(new_slug) = args.new_slug.as_deref().filter(|s| *s != current) {
        let prompt = format!(
            "Rename organization '{}' to '{}'? Existing URLs using the old slug will stop working.",
            current, new_slug
        );
        if !confirm_action(&prompt, cli.batch, args.yes)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    let spinner = create_spinner(&format!("Updating organization '{}'...", current), cli.batch);
    let result = client.update_organization(slug, &update).await;
    finish_spinner(spinner);

    let org = result?;
    debug!("Updated organization '{}' -> '{}'", current, org.slug());
    output_organization(&org, args.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["sentryctl", "--batch"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_build_stats_query_all_fields() {
        let query = build_stats_query(Some(Stat::Received), Some(10), Some(20), Some("1h"));
        assert_eq!(
            query,
            StatsQuery::default()
                .stat(Stat::Received)
                .since(10)
                .until(20)
                .resolution("1h")
        );
    }

    #[test]
    fn test_build_stats_query_empty() {
        assert_eq!(build_stats_query(None, None, None, None), StatsQuery::default());
    }

    #[tokio::test]
    async fn test_run_org_command_lists_member_orgs() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/"))
            .and(query_param("member", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "slug": "acme", "name": "Acme"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["get", "org", "--member", "-o", "csv"]);
        assert!(run_org_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_org_command_single_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/missing/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["get", "org", "missing", "-o", "json"]);
        let err = run_org_command(&client, &cli).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_run_prj_command_uses_default_org() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/default-org/projects/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["get", "prj"]);
        assert!(run_prj_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_stats_command_forwards_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/stats/"))
            .and(query_param("stat", "blacklisted"))
            .and(query_param("since", "1472158800"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([[1472158800, 3]])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&[
            "get",
            "stats",
            "--org",
            "acme",
            "--stat",
            "blacklisted",
            "--since",
            "2016-08-25T21:00:00Z",
        ]);
        assert!(run_stats_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_update_org_command_requires_fields() {
        let client = SentryClient::test_client("http://127.0.0.1:9");
        let cli = cli(&["update", "org", "acme"]);
        let err = run_update_org_command(&client, &cli).await.unwrap_err();
        assert!(err.to_string().contains("Nothing to update"));
    }

    #[tokio::test]
    async fn test_run_update_org_command_rename_refused_in_batch() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["update", "org", "acme", "--new-slug", "acme-corp"]);
        let err = run_update_org_command(&client, &cli).await.unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }

    #[tokio::test]
    async fn test_run_update_org_command_rename_with_yes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/organizations/acme/"))
            .and(body_json(serde_json::json!({"slug": "acme-corp"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1", "slug": "acme-corp", "name": "Acme"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["update", "org", "acme", "--new-slug", "acme-corp", "--yes"]);
        assert!(run_update_org_command(&client, &cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_update_org_command_name_needs_no_confirmation() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/organizations/default-org/"))
            .and(body_json(serde_json::json!({"name": "Renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1", "slug": "default-org", "name": "Renamed"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SentryClient::test_client(&mock_server.uri());
        let cli = cli(&["update", "org", "--name", "Renamed"]);
        assert!(run_update_org_command(&client, &cli).await.is_ok());
    }
}
