//! Common CLI types shared across commands

use chrono::{DateTime, NaiveDate};
use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON as returned by the API
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse a timestamp argument into seconds since the UNIX epoch.
///
/// Accepts epoch seconds (`1472158800`), RFC 3339 (`2016-08-25T21:00:00Z`)
/// or a plain date (`2016-08-25`, midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<i64, String> {
    let value = value.trim();

    if let Ok(secs) = value.parse::<i64>() {
        return Ok(secs);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp());
        }
    }

    Err(format!(
        "invalid timestamp '{}': expected epoch seconds, RFC 3339 or YYYY-MM-DD",
        value
    ))
}
