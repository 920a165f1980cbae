use crate::init::LoggerConfig;
use crate::level::Level;
use crate::record::{parse_field_pairs, LogRecord};
use crate::render::{render, Format};
use crate::sink::{LogSink, StdoutSink, WriterSink};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Appended to a message whose `Display` arguments reported an error
/// while being formatted.
pub const BAD_FORMAT_MARKER: &str = "%!(BADFORMAT)";

/// Error surfaced by [`Entry::try_log`] / [`Logger::try_log`].
#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("failed to write log line to sink: {0}")]
    Write(#[from] io::Error),
}

/// What happened to one emission call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Below the logger's minimum level; nothing was rendered or written.
    Dropped,
    /// The rendered record was written.
    Written,
    /// The record could not be encoded and the error fallback line was
    /// written instead.
    WrittenFallback,
}

/// Counters shared by a logger and its clones.
#[derive(Debug, Default)]
pub struct LoggerStats {
    written: AtomicU64,
    dropped: AtomicU64,
    fallbacks: AtomicU64,
    write_failures: AtomicU64,
}

impl LoggerStats {
    /// Lines successfully handed to the sink.
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    /// Calls filtered out by the minimum level.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Records replaced by the encoding fallback line.
    pub fn fallbacks(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Lines the sink refused.
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }
}

/// Leveled logger writing rendered records to a sink.
///
/// Format, minimum level and sink are fixed once the logger is built; the
/// `with_*` methods are meant to be chained right after [`Logger::new`].
/// Every emission builds its own [`Entry`], so a logger can be shared
/// between threads freely. Clones share the sink and the [`LoggerStats`].
///
/// ```
/// use slogger::{infof, Format, Level, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(Format::Json, Level::Info).with_sink(sink.clone());
///
/// logger.debug("filtered out");
/// infof!(logger, "listening on port {}", 8080);
/// logger.with_fields(&["stage", "cleanup"]).warn("slow cleanup");
///
/// assert_eq!(sink.lines().len(), 2);
/// ```
#[derive(Clone)]
pub struct Logger {
    format: Format,
    min_level: Level,
    sink: Arc<dyn LogSink>,
    stats: Arc<LoggerStats>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("min_level", &self.min_level)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a logger writing to standard output.
    pub fn new(format: Format, min_level: Level) -> Self {
        Self {
            format,
            min_level,
            sink: Arc::new(StdoutSink),
            stats: Arc::new(LoggerStats::default()),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.format, config.min_level)
    }

    /// Replace the default standard-output sink.
    ///
    /// Both formats honour the configured sink.
    pub fn with_sink<S: LogSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Write to any [`Write`] implementation, serialized behind a mutex.
    pub fn with_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.with_sink(WriterSink::new(writer))
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    pub fn stats(&self) -> &LoggerStats {
        &self.stats
    }

    /// Whether a call at `level` would produce output.
    pub fn enabled(&self, level: Level) -> bool {
        level.is_at_least(self.min_level)
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Start a record without properties. Its timestamp is taken now.
    pub fn entry(&self) -> Entry<'_> {
        Entry {
            logger: self,
            time: Utc::now(),
            properties: HashMap::new(),
            trace: None,
        }
    }

    /// Start a record carrying properties from a flat `key, value, ...`
    /// list.
    ///
    /// An odd number of arguments does not fail: the record gets a single
    /// `fields_error` property describing the input and can still be
    /// emitted.
    pub fn with_fields<S: AsRef<str>>(&self, pairs: &[S]) -> Entry<'_> {
        let mut entry = self.entry();
        entry.properties = parse_field_pairs(pairs);
        entry
    }

    pub fn debug(&self, msg: &str) {
        self.entry().debug(msg);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.entry().debugf(args);
    }

    pub fn info(&self, msg: &str) {
        self.entry().info(msg);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.entry().infof(args);
    }

    pub fn warn(&self, msg: &str) {
        self.entry().warn(msg);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.entry().warnf(args);
    }

    pub fn error(&self, msg: &str) {
        self.entry().error(msg);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.entry().errorf(args);
    }

    pub fn log(&self, level: Level, msg: &str) {
        self.entry().log(level, msg);
    }

    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>) {
        self.entry().log_args(level, args);
    }

    /// Like [`Logger::log_args`], but reports what happened and surfaces
    /// sink failures.
    pub fn try_log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<Emission, LogError> {
        self.entry().try_log(level, args)
    }
}

/// A record under construction, finished by one of the level methods.
#[derive(Debug)]
#[must_use = "an entry writes nothing until a level method is called"]
pub struct Entry<'a> {
    logger: &'a Logger,
    time: DateTime<Utc>,
    properties: HashMap<String, String>,
    trace: Option<String>,
}

impl Entry<'_> {
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Attach trace text (e.g. an error chain) to the record.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn debug(self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn debugf(self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Debug, args);
    }

    pub fn info(self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn infof(self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Info, args);
    }

    pub fn warn(self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    pub fn warnf(self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Warn, args);
    }

    pub fn error(self, msg: &str) {
        self.log(Level::Error, msg);
    }

    pub fn errorf(self, args: fmt::Arguments<'_>) {
        self.log_args(Level::Error, args);
    }

    pub fn log(self, level: Level, msg: &str) {
        self.log_args(level, format_args!("{msg}"));
    }

    /// Emit at `level`. Sink failures are counted and reported through
    /// `tracing`, never returned.
    pub fn log_args(self, level: Level, args: fmt::Arguments<'_>) {
        if let Err(e) = self.try_log(level, args) {
            tracing::warn!(error = %e, %level, "log line lost");
        }
    }

    /// Filter, render and write the record.
    pub fn try_log(self, level: Level, args: fmt::Arguments<'_>) -> Result<Emission, LogError> {
        let logger = self.logger;
        let stats = &logger.stats;

        if !logger.enabled(level) {
            stats.dropped.fetch_add(1, Ordering::Relaxed);
            return Ok(Emission::Dropped);
        }

        let record = LogRecord {
            level,
            time: self.time,
            message: interpolate(args),
            properties: self.properties,
            trace: self.trace,
        };

        let rendered = render(&record, logger.format);
        let emission = if rendered.is_fallback() {
            stats.fallbacks.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(%level, "record could not be encoded, writing fallback line");
            Emission::WrittenFallback
        } else {
            Emission::Written
        };

        match logger.sink.send(rendered.as_bytes()) {
            Ok(()) => {
                stats.written.fetch_add(1, Ordering::Relaxed);
                Ok(emission)
            }
            Err(e) => {
                stats.write_failures.fetch_add(1, Ordering::Relaxed);
                Err(LogError::Write(e))
            }
        }
    }
}

/// Apply the formatting arguments without ever panicking: a `Display`
/// implementation that errors leaves the text produced so far followed by
/// [`BAD_FORMAT_MARKER`].
pub(crate) fn interpolate(args: fmt::Arguments<'_>) -> String {
    if let Some(literal) = args.as_str() {
        return literal.to_string();
    }
    let mut message = String::new();
    if fmt::write(&mut message, args).is_err() {
        message.push_str(BAD_FORMAT_MARKER);
    }
    message
}
