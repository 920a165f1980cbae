//! Leveled logger rendering each call as a JSON document or a
//! tab-delimited human line, written to a pluggable [`LogSink`].

mod macros;

pub mod level;
pub mod record;
pub mod render;
pub mod sink;
pub mod noop_sink;
pub mod logger;

pub mod env;
pub mod init;
pub mod global;

pub use level::{level_name, Level};
pub use logger::{Emission, Entry, LogError, Logger, LoggerStats};
pub use record::LogRecord;
pub use render::{Format, Rendered};
pub use sink::{LogSink, MemorySink, StdoutSink, WriterSink};
