//! Team output formatter

use super::common::{output_record, output_records, Column};
use crate::cli::OutputFormat;
use crate::sentry::ApiObject;

const COLUMNS: &[Column] = &[
    Column {
        header: "SLUG",
        value: |t| t.slug().to_string(),
    },
    Column {
        header: "NAME",
        value: |t| t.name().to_string(),
    },
    Column {
        header: "ID",
        value: |t| t.id().to_string(),
    },
    Column {
        header: "MEMBERS",
        value: |t| {
            t.u64_field("memberCount")
                .map(|n| n.to_string())
                .unwrap_or_default()
        },
    },
    Column {
        header: "CREATED",
        value: |t| t.date_created().to_string(),
    },
];

/// Output teams in the specified format
pub fn output_teams(teams: &[ApiObject], format: OutputFormat, no_header: bool) {
    output_records(teams, COLUMNS, format, no_header);
}

/// Output a single team (e.g. one just created)
pub fn output_team(team: &ApiObject, format: OutputFormat, no_header: bool) {
    output_record(team, COLUMNS, format, no_header);
}
