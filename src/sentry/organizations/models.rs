//! Organization request options

use serde::Serialize;

/// Body for `PUT /organizations/{slug}/`
///
/// Unset fields are left out of the body so the server keeps their values.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOrganization {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug; must be available and unique on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl UpdateOrganization {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// True when neither field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none()
    }
}

/// Which event counter to query
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Received,
    Rejected,
    Blacklisted,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Received => write!(f, "received"),
            Stat::Rejected => write!(f, "rejected"),
            Stat::Blacklisted => write!(f, "blacklisted"),
        }
    }
}

/// Query string for `GET /organizations/{slug}/stats/`
///
/// Set fields are forwarded as-is, in declaration order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<Stat>,
    /// Start of the range, seconds since the UNIX epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    /// End of the range, seconds since the UNIX epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<i64>,
    /// Explicit bucket resolution such as `10s` or `1h`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl StatsQuery {
    pub fn stat(mut self, stat: Stat) -> Self {
        self.stat = Some(stat);
        self
    }

    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    pub fn until(mut self, until: i64) -> Self {
        self.until = Some(until);
        self
    }

    pub fn resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_organization_skips_unset() {
        let body = UpdateOrganization::default().name("Acme Corp");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Acme Corp"}));
    }

    #[test]
    fn test_update_organization_is_empty() {
        assert!(UpdateOrganization::default().is_empty());
        assert!(!UpdateOrganization::default().slug("new-slug").is_empty());
    }

    #[test]
    fn test_stat_serializes_lowercase() {
        let json = serde_json::to_string(&Stat::Blacklisted).unwrap();
        assert_eq!(json, "\"blacklisted\"");
        assert_eq!(Stat::Received.to_string(), "received");
    }

    #[test]
    fn test_stats_query_skips_unset() {
        let query = StatsQuery::default().stat(Stat::Received).since(1472158800);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"stat": "received", "since": 1472158800})
        );
    }

    #[test]
    fn test_stats_query_all_fields() {
        let query = StatsQuery::default()
            .stat(Stat::Rejected)
            .since(1)
            .until(2)
            .resolution("1h");
        assert_eq!(query.stat, Some(Stat::Rejected));
        assert_eq!(query.since, Some(1));
        assert_eq!(query.until, Some(2));
        assert_eq!(query.resolution.as_deref(), Some("1h"));
    }
}
