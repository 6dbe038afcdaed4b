//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::sentry::ApiObject;

/// A table/CSV column over an API record
pub struct Column {
    pub header: &'static str,
    pub value: fn(&ApiObject) -> String,
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize JSON output: {}", e),
    }
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error: failed to serialize YAML output: {}", e),
    }
}

/// Output a single record exactly as the server returned it
pub fn output_raw(record: &ApiObject, format: OutputFormat) {
    match format {
        OutputFormat::Yaml => print_yaml(record),
        _ => print_json(record),
    }
}

/// Render records as a table
pub fn render_table(records: &[ApiObject], columns: &[Column], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
    }

    for record in records {
        table.add_row(
            columns
                .iter()
                .map(|c| (c.value)(record))
                .collect::<Vec<_>>(),
        );
    }

    table.to_string()
}

/// Render records as CSV lines
pub fn render_csv(records: &[ApiObject], columns: &[Column], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    if !no_header {
        lines.push(
            columns
                .iter()
                .map(|c| c.header)
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    for record in records {
        lines.push(
            columns
                .iter()
                .map(|c| escape_csv(&(c.value)(record)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Output a list of records in the requested format
///
/// JSON and YAML carry the full records, tables and CSV only `columns`.
pub fn output_records(
    records: &[ApiObject],
    columns: &[Column],
    format: OutputFormat,
    no_header: bool,
) {
    match format {
        OutputFormat::Table => println!("{}", render_table(records, columns, no_header)),
        OutputFormat::Csv => {
            let csv = render_csv(records, columns, no_header);
            if !csv.is_empty() {
                println!("{}", csv);
            }
        }
        OutputFormat::Json => print_json(records),
        OutputFormat::Yaml => print_yaml(records),
    }
}

/// Output a single record: raw for JSON/YAML, one row otherwise
pub fn output_record(record: &ApiObject, columns: &[Column], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => output_raw(record, format),
        _ => output_records(std::slice::from_ref(record), columns, format, no_header),
    }
}

/// Common column: string field or empty
pub fn field(record: &ApiObject, key: &str) -> String {
    record.str_field(key).unwrap_or("").to_string()
}
