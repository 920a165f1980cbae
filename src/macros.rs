//! `format!`-style shorthands for the `*f` emission methods.
//!
//! Each macro takes a [`Logger`](crate::Logger) or an [`Entry`](crate::Entry)
//! followed by a format string and its arguments.

/// Emit a formatted message at debug level.
#[macro_export]
macro_rules! debugf {
    ($target:expr, $($arg:tt)+) => {
        $target.debugf(::std::format_args!($($arg)+))
    };
}

/// Emit a formatted message at info level.
#[macro_export]
macro_rules! infof {
    ($target:expr, $($arg:tt)+) => {
        $target.infof(::std::format_args!($($arg)+))
    };
}

/// Emit a formatted message at warn level.
#[macro_export]
macro_rules! warnf {
    ($target:expr, $($arg:tt)+) => {
        $target.warnf(::std::format_args!($($arg)+))
    };
}

/// Emit a formatted message at error level.
#[macro_export]
macro_rules! errorf {
    ($target:expr, $($arg:tt)+) => {
        $target.errorf(::std::format_args!($($arg)+))
    };
}
