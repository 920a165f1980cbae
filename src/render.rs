//! Turns a finalized [`LogRecord`] into the bytes of one output line.

use crate::level::Level;
use crate::record::LogRecord;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Output format selected when a logger is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Tab-delimited line: `LEVEL\tTIME\tMESSAGE\tk=v ...`.
    #[default]
    Human,
    /// One compact JSON document per line.
    Json,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Human => "human",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format name cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected human or json)")]
pub struct ParseFormatError(pub String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(Format::Human),
            "json" => Ok(Format::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Result of rendering a record.
///
/// Encoding problems never reach the caller as errors; they produce a
/// `Fallback` line instead, which still gets written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Encoded(Vec<u8>),
    Fallback {
        line: Vec<u8>,
        /// Description of the serialization failure.
        error: String,
    },
}

impl Rendered {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback { .. })
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Encoded(line) | Rendered::Fallback { line, .. } => line,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Rendered::Encoded(line) | Rendered::Fallback { line, .. } => line,
        }
    }
}

/// Render `record` in the requested format.
pub fn render(record: &LogRecord, format: Format) -> Rendered {
    match format {
        Format::Json => render_json(record),
        Format::Human => Rendered::Encoded(render_human(record)),
    }
}

/// Structured rendering: a compact JSON object followed by a newline.
pub fn render_json(record: &LogRecord) -> Rendered {
    encode_json(record)
}

/// Serialize any value as one JSON line, substituting an error-tagged
/// fallback line when serialization fails.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Rendered {
    match serde_json::to_vec(value) {
        Ok(mut line) => {
            line.push(b'\n');
            Rendered::Encoded(line)
        }
        Err(e) => {
            let error = e.to_string();
            let line = format!("{}: unable to marshal message: {}\n", Level::Error, error);
            Rendered::Fallback {
                line: line.into_bytes(),
                error,
            }
        }
    }
}

/// Human rendering: `LEVEL\tTIME\tMESSAGE\t` followed by `key=value ` for
/// each property and a newline. Property order is unspecified.
pub fn render_human(record: &LogRecord) -> Vec<u8> {
    let mut line = format!(
        "{}\t{}\t{}\t",
        record.level.as_str().to_ascii_uppercase(),
        record.time_rfc3339(),
        record.message
    );
    for (key, value) in &record.properties {
        // Writing into a String cannot fail.
        let _ = write!(line, "{key}={value} ");
    }
    line.push('\n');
    line.into_bytes()
}
