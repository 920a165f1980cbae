//! Environment variable names read by
//! [`LoggerConfig::from_env`](crate::init::LoggerConfig::from_env).
//!
//! Loggers built directly with [`Logger::new`](crate::logger::Logger::new)
//! never look at the environment.

/// Output format, `human` or `json`.
pub const SLOGGER_FORMAT_ENV: &str = "SLOGGER_FORMAT";

/// Minimum level, one of `debug`, `info`, `warn`, `error`.
pub const SLOGGER_LEVEL_ENV: &str = "SLOGGER_LEVEL";
