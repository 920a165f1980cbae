use crate::env::{SLOGGER_FORMAT_ENV, SLOGGER_LEVEL_ENV};
use crate::global;
use crate::level::{Level, ParseLevelError};
use crate::logger::Logger;
use crate::render::{Format, ParseFormatError};

/// Construction-time settings of a [`Logger`].
///
/// **Fields**
/// - `format`: renderer used for every record, human lines or JSON.
/// - `min_level`: calls below this level are dropped before any
///   formatting work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerConfig {
    pub format: Format,
    pub min_level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: Format::Human,
            min_level: Level::Info,
        }
    }
}

/// Error returned when configuration values cannot be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid SLOGGER_LEVEL: {0}")]
    Level(#[from] ParseLevelError),

    #[error("invalid SLOGGER_FORMAT: {0}")]
    Format(#[from] ParseFormatError),
}

impl LoggerConfig {
    /// Read `SLOGGER_FORMAT` and `SLOGGER_LEVEL`. Unset variables keep
    /// their defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(format) = lookup(SLOGGER_FORMAT_ENV) {
            config.format = format.parse()?;
        }
        if let Some(level) = lookup(SLOGGER_LEVEL_ENV) {
            config.min_level = level.parse()?;
        }
        Ok(config)
    }

    pub fn build(&self) -> Logger {
        Logger::from_config(self)
    }
}

/// Build a logger from `config` and install it as the process-wide
/// default used by the free functions in [`global`].
///
/// **Returns**
/// - `Ok(&Logger)` with the installed logger.
/// - `Err(Logger)` giving back the new logger when a default was already
///   installed (explicitly or by first use).
pub fn init_logger(config: LoggerConfig) -> Result<&'static Logger, Logger> {
    global::set_default(config.build())?;
    Ok(global::default_logger())
}

/// Install a `tracing` subscriber printing this crate's own diagnostics
/// (lost lines, bad environment values) to stderr.
///
/// Returns `false` when another global subscriber is already set, in which
/// case diagnostics go there instead.
pub fn init_diagnostics() -> bool {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
