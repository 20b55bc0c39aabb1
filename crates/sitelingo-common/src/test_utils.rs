//! Test utilities and shared test helpers for sitelingo.
//!
//! Provides one-shot test logging and an in-memory log sink that tests use to
//! assert on diagnostic output without touching the global subscriber.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Shared in-memory buffer that formatted log records are written into.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Create an empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dispatcher that formats events up to `level` into this buffer.
    ///
    /// Output carries no timestamps or ANSI escapes, so it is stable to assert on.
    pub fn dispatch(&self, level: Level) -> Dispatch {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(level)
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .finish();
        Dispatch::new(subscriber)
    }

    /// Everything captured so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Captured records, one per line
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Whether nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Writer handed out by [`CapturedLogs`] for each record.
#[derive(Debug)]
pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_captured_logs_respect_level() {
        let logs = CapturedLogs::new();
        let dispatch = logs.dispatch(Level::INFO);

        tracing::dispatcher::with_default(&dispatch, || {
            tracing::debug!("too verbose");
            tracing::info!("kept");
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("kept"));

        logs.clear();
        assert!(logs.is_empty());
    }
}
