//! Project output formatter

use super::common::{field, output_records, Column};
use crate::cli::OutputFormat;
use crate::sentry::ApiObject;

const COLUMNS: &[Column] = &[
    Column {
        header: "SLUG",
        value: |p| p.slug().to_string(),
    },
    Column {
        header: "NAME",
        value: |p| p.name().to_string(),
    },
    Column {
        header: "ID",
        value: |p| p.id().to_string(),
    },
    Column {
        header: "PLATFORM",
        value: |p| field(p, "platform"),
    },
    Column {
        header: "CREATED",
        value: |p| p.date_created().to_string(),
    },
];

/// Output projects in the specified format
pub fn output_projects(projects: &[ApiObject], format: OutputFormat, no_header: bool) {
    output_records(projects, COLUMNS, format, no_header);
}
