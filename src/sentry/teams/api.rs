//! Team API operations

use crate::config::api;
use crate::error::Result;
use crate::sentry::models::ApiObject;
use crate::sentry::SentryClient;

use super::models::CreateTeam;

impl SentryClient {
    /// Create a new team bound to an organization
    pub async fn create_team(&self, options: &CreateTeam, org_slug: &str) -> Result<ApiObject> {
        let path = self.org_path(org_slug, Some(api::TEAMS))?;
        let context = format!(
            "create team '{}' in organization '{}'",
            options.name,
            self.resolve_org(org_slug)?
        );

        self.post_json(&path, options, &context).await
    }

    /// List the teams bound to an organization
    pub async fn organization_teams(&self, org_slug: &str) -> Result<Vec<ApiObject>> {
        let path = self.org_path(org_slug, Some(api::TEAMS))?;
        let context = format!("list teams for organization '{}'", self.resolve_org(org_slug)?);

        self.get_json(&path, &context).await
    }
}
