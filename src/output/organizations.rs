//! Organization output formatter

use super::common::{output_record, output_records, Column};
use crate::cli::OutputFormat;
use crate::sentry::ApiObject;

/// Organization status as reported by Sentry (`status.id`)
fn status(org: &ApiObject) -> String {
    org.get("status")
        .and_then(|s| s.get("id"))
        .and_then(|id| id.as_str())
        .unwrap_or("")
        .to_string()
}

const COLUMNS: &[Column] = &[
    Column {
        header: "SLUG",
        value: |o| o.slug().to_string(),
    },
    Column {
        header: "NAME",
        value: |o| o.name().to_string(),
    },
    Column {
        header: "ID",
        value: |o| o.id().to_string(),
    },
    Column {
        header: "STATUS",
        value: status,
    },
    Column {
        header: "CREATED",
        value: |o| o.date_created().to_string(),
    },
];

/// Output a list of organizations
pub fn output_organizations(orgs: &[ApiObject], format: OutputFormat, no_header: bool) {
    output_records(orgs, COLUMNS, format, no_header);
}

/// Output a single organization
pub fn output_organization(org: &ApiObject, format: OutputFormat, no_header: bool) {
    output_record(org, COLUMNS, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::super::common::render_csv;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_org_columns() {
        let org: ApiObject = serde_json::from_value(json!({
            "id": "2",
            "slug": "acme",
            "name": "Acme",
            "status": { "id": "active", "name": "active" },
            "dateCreated": "2016-08-25T21:00:00Z"
        }))
        .unwrap();

        let csv = render_csv(&[org], COLUMNS, false);
        assert_eq!(
            csv,
            "SLUG,NAME,ID,STATUS,CREATED\nacme,Acme,2,active,2016-08-25T21:00:00Z"
        );
    }

    #[test]
    fn test_org_status_missing() {
        let org = ApiObject::default();
        assert_eq!(status(&org), "");
    }
}
