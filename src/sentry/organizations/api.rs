//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::sentry::models::{ApiObject, StatPoint};
use crate::sentry::SentryClient;

use super::models::{StatsQuery, UpdateOrganization};

impl SentryClient {
    /// List organizations visible to the token
    ///
    /// `member` restricts the result to organizations the caller belongs to.
    pub async fn organizations(&self, member: bool) -> Result<Vec<ApiObject>> {
        let path = format!("/{}/", api::ORGANIZATIONS);
        debug!("Listing organizations (member={})", member);

        self.get_json_with_query(&path, &[("member", member)], "list organizations")
            .await
    }

    /// List the projects of an organization
    pub async fn organization_projects(&self, org_slug: &str) -> Result<Vec<ApiObject>> {
        let path = self.org_path(org_slug, Some(api::PROJECTS))?;
        let context = format!("list projects for organization '{}'", self.resolve_org(org_slug)?);

        self.get_json(&path, &context).await
    }

    /// Retrieve a single organization
    pub async fn organization(&self, org_slug: &str) -> Result<ApiObject> {
        let path = self.org_path(org_slug, None)?;
        let context = format!("fetch organization '{}'", self.resolve_org(org_slug)?);

        self.get_json(&path, &context).await
    }

    /// Update an organization's name and/or slug
    pub async fn update_organization(
        &self,
        org_slug: &str,
        options: &UpdateOrganization,
    ) -> Result<ApiObject> {
        let path = self.org_path(org_slug, None)?;
        let context = format!("update organization '{}'", self.resolve_org(org_slug)?);

        self.put_json(&path, options, &context).await
    }

    /// Retrieve event counts for an organization as `[timestamp, count]` buckets
    pub async fn organization_stats(
        &self,
        org_slug: &str,
        options: &StatsQuery,
    ) -> Result<Vec<StatPoint>> {
        let path = self.org_path(org_slug, Some(api::STATS))?;
        let context = format!("fetch stats for organization '{}'", self.resolve_org(org_slug)?);

        self.get_json_with_query(&path, options, &context).await
    }
}
