use crate::sink::LogSink;
use std::io;

/// A sink that simply drops all lines.
///
/// Useful for measuring the cost of filtering and rendering without any
/// I/O, and for tests that only look at [`LoggerStats`](crate::logger::LoggerStats).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn send(&self, _line: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
