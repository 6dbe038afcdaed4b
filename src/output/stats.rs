//! Organization stats output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::sentry::StatPoint;

/// Serializable stat bucket for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableStat {
    timestamp: i64,
    time: String,
    count: u64,
}

impl From<&StatPoint> for SerializableStat {
    fn from(point: &StatPoint) -> Self {
        Self {
            timestamp: point.timestamp(),
            time: time(point),
            count: point.count(),
        }
    }
}

fn time(point: &StatPoint) -> String {
    point
        .datetime()
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Output stat buckets in the specified format
pub fn output_stats(points: &[StatPoint], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_table(points, no_header)),
        OutputFormat::Csv => output_csv(points, no_header),
        OutputFormat::Json => print_json(&serializable(points)),
        OutputFormat::Yaml => print_yaml(&serializable(points)),
    }
}

fn serializable(points: &[StatPoint]) -> Vec<SerializableStat> {
    points.iter().map(SerializableStat::from).collect()
}

fn render_table(points: &[StatPoint], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["TIMESTAMP", "TIME", "COUNT"]);
    }

    for point in points {
        table.add_row(vec![
            point.timestamp().to_string(),
            time(point),
            point.count().to_string(),
        ]);
    }

    table.to_string()
}

fn output_csv(points: &[StatPoint], no_header: bool) {
    if !no_header {
        println!("TIMESTAMP,TIME,COUNT");
    }
    for point in points {
        println!("{},{},{}", point.timestamp(), time(point), point.count());
    }
}
