use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Destination for rendered log lines.
///
/// Implementations decide how bytes reach their backend (terminal, file,
/// socket, memory). The logger calls `send` synchronously from the emitting
/// thread.
pub trait LogSink: Send + Sync {
    /// Write one rendered line.
    ///
    /// **Parameters**
    /// - `line`: the complete line, already terminated by `\n`.
    ///
    /// **Returns**
    /// - `Ok(())` once the whole line was handed to the backend.
    /// - `Err(..)` if the backend failed. The logger counts and reports the
    ///   failure but does not retry.
    ///
    /// Concurrent `send` calls on the same sink must not interleave bytes of
    /// different lines.
    fn send(&self, line: &[u8]) -> io::Result<()>;

    /// Flush any buffered lines, if the backend buffers.
    ///
    /// Default implementation is a no-op.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic in another writer does not invalidate the buffer itself.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes to the process's standard output. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn send(&self, line: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Adapts any [`Write`] implementation (a file, a `BufWriter`, a socket)
/// into a sink, serializing writes behind a mutex.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn send(&self, line: &[u8]) -> io::Result<()> {
        lock(&self.writer).write_all(line)
    }

    fn flush(&self) -> io::Result<()> {
        lock(&self.writer).flush()
    }
}

/// In-memory collector, mainly for tests.
///
/// Clones share the same buffer, so one handle can be given to a logger
/// and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }

    /// Written lines without their trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.buffer).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.buffer).clear();
    }
}

impl LogSink for MemorySink {
    fn send(&self, line: &[u8]) -> io::Result<()> {
        lock(&self.buffer).extend_from_slice(line);
        Ok(())
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn send(&self, line: &[u8]) -> io::Result<()> {
        (**self).send(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
