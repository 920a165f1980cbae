use crate::level::Level;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Property set on a record when `with_fields` receives an odd number of
/// arguments.
pub const FIELDS_ERROR_KEY: &str = "fields_error";

/// One log event, assembled before rendering.
///
/// Serializes to the structured output schema: `level`, `time`, `message`,
/// then `properties` and `trace` only when they carry something.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub level: Level,
    #[serde(serialize_with = "serialize_time")]
    pub time: DateTime<Utc>,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
    #[serde(skip_serializing_if = "trace_is_empty")]
    pub trace: Option<String>,
}

impl LogRecord {
    pub fn new(
        level: Level,
        time: DateTime<Utc>,
        message: impl Into<String>,
        properties: HashMap<String, String>,
    ) -> Self {
        Self {
            level,
            time,
            message: message.into(),
            properties,
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Capture time as an RFC 3339 UTC string with second precision.
    pub fn time_rfc3339(&self) -> String {
        format_time(&self.time)
    }
}

pub(crate) fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_time<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_time(time))
}

fn trace_is_empty(trace: &Option<String>) -> bool {
    trace.as_deref().map_or(true, str::is_empty)
}

/// Turn a flat `key, value, key, value, ...` list into a property map.
///
/// An odd-length list is not rejected: the result holds a single
/// [`FIELDS_ERROR_KEY`] entry describing the count and the raw input.
/// Later duplicate keys overwrite earlier ones.
pub fn parse_field_pairs<S: AsRef<str>>(pairs: &[S]) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    if pairs.len() % 2 != 0 {
        let joined = pairs.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        properties.insert(
            FIELDS_ERROR_KEY.to_string(),
            format!("invalid number of fields: {} [{}]", pairs.len(), joined),
        );
        return properties;
    }

    for pair in pairs.chunks_exact(2) {
        if let [key, value] = pair {
            properties.insert(key.as_ref().to_string(), value.as_ref().to_string());
        }
    }
    properties
}
