//! Response models shared by all Sentry resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single record returned by the Sentry API
///
/// Sentry's resource schemas are wide and change between releases, so the
/// record is kept as the JSON object the server returned. Typed accessors
/// cover the fields the CLI reads; anything else is reachable through [`get`].
///
/// [`get`]: ApiObject::get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiObject(Map<String, Value>);

impl ApiObject {
    /// Raw access to any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field, `None` if missing or not a string
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean field, `None` if missing or not a boolean
    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Unsigned integer field, `None` if missing or not a non-negative integer
    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Resource ID
    pub fn id(&self) -> &str {
        self.str_field("id").unwrap_or("")
    }

    /// Resource slug
    pub fn slug(&self) -> &str {
        self.str_field("slug").unwrap_or("")
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        self.str_field("name").unwrap_or("")
    }

    /// Creation timestamp as sent by the server
    pub fn date_created(&self) -> &str {
        self.str_field("dateCreated").unwrap_or("")
    }

    /// Case-insensitive substring match on name or slug
    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name().to_lowercase().contains(&filter)
            || self.slug().to_lowercase().contains(&filter)
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying JSON object
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ApiObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One bucket of an organization stats series: `[timestamp, count]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPoint(pub i64, pub u64);

impl StatPoint {
    /// Bucket start in seconds since the UNIX epoch
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Event count in the bucket
    pub fn count(&self) -> u64 {
        self.1
    }

    /// Bucket start as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}
