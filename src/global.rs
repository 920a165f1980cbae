//! Process-wide default logger and free functions forwarding to it.
//!
//! The default is created lazily from the environment on first use, or
//! installed explicitly with [`set_default`] / [`init_logger`](crate::init::init_logger)
//! before any logging happens. Once set it cannot be replaced. Code that
//! can hold a [`Logger`] should prefer doing so.

use crate::init::LoggerConfig;
use crate::logger::{Entry, Logger};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the default. Gives it back if a default already
/// exists.
pub fn set_default(logger: Logger) -> Result<(), Logger> {
    DEFAULT.set(logger).map_err(|rejected| {
        tracing::debug!("default logger already initialized, keeping the existing one");
        rejected
    })
}

/// The default logger, built from `SLOGGER_FORMAT` / `SLOGGER_LEVEL` on
/// first use when none was installed.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring logger environment, using defaults");
            LoggerConfig::default()
        });
        config.build()
    })
}

pub fn with_fields<S: AsRef<str>>(pairs: &[S]) -> Entry<'static> {
    default_logger().with_fields(pairs)
}

pub fn debug(msg: &str) {
    default_logger().debug(msg);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

pub fn info(msg: &str) {
    default_logger().info(msg);
}

pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

pub fn warn(msg: &str) {
    default_logger().warn(msg);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

pub fn error(msg: &str) {
    default_logger().error(msg);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}
