use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels in ascending severity.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Whether a call at `self` passes a logger configured with `threshold`.
    pub fn is_at_least(self, threshold: Level) -> bool {
        self >= threshold
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    pub fn ordinal(self) -> i64 {
        match self {
            Level::Debug => 0,
            Level::Info => 1,
            Level::Warn => 2,
            Level::Error => 3,
        }
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Level> {
        match ordinal {
            0 => Some(Level::Debug),
            1 => Some(Level::Info),
            2 => Some(Level::Warn),
            3 => Some(Level::Error),
            _ => None,
        }
    }
}

/// Name of the level with the given ordinal, or `"none"` when the value is
/// outside the defined range.
pub fn level_name(ordinal: i64) -> &'static str {
    Level::from_ordinal(ordinal).map_or("none", Level::as_str)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level `{0}` (expected debug, info, warn or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        for (i, low) in Level::ALL.iter().enumerate() {
            for high in &Level::ALL[i..] {
                assert!(high.is_at_least(*low), "{high} should pass {low}");
            }
            for lower in &Level::ALL[..i] {
                assert!(!lower.is_at_least(*low), "{lower} should not pass {low}");
            }
        }
    }

    #[test]
    fn level_name_is_total() {
        assert_eq!(level_name(0), "debug");
        assert_eq!(level_name(1), "info");
        assert_eq!(level_name(2), "warn");
        assert_eq!(level_name(3), "error");
        assert_eq!(level_name(4), "none");
        assert_eq!(level_name(-1), "none");
        assert_eq!(level_name(i64::MAX), "none");
    }

    #[test]
    fn ordinal_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::from_ordinal(level.ordinal()), Some(level));
            assert_eq!(level_name(level.ordinal()), level.as_str());
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" warning ".parse::<Level>(), Ok(Level::Warn));
        assert_eq!(
            "fatal".parse::<Level>(),
            Err(ParseLevelError("fatal".to_string()))
        );
    }

    #[test]
    fn serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
    }
}
