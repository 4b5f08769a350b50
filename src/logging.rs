use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILTER: &str = "info";

const MAX_LOG_BYTES: usize = 64 * 1024;

/// Shared text buffer shown in the shell's debug panel.
#[derive(Clone, Default)]
pub struct DebugLog {
    buffer: Arc<Mutex<String>>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().map(|b| b.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    pub fn push(&self, text: &str) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push_str(text);
            if buffer.len() > MAX_LOG_BYTES {
                let excess = buffer.len() - MAX_LOG_BYTES;
                let cut = (excess..buffer.len())
                    .find(|&i| buffer.is_char_boundary(i))
                    .unwrap_or(buffer.len());
                buffer.drain(..cut);
            }
        }
    }
}

pub struct DebugLogWriter {
    log: DebugLog,
}

impl io::Write for DebugLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.log.push(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for DebugLog {
    type Writer = DebugLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DebugLogWriter { log: self.clone() }
    }
}

/// Installs the global subscriber: stderr plus the debug panel buffer.
pub fn init_logging(log: &DebugLog) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .without_time()
                .with_writer(log.clone()),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_events_into_buffer() {
        let log = DebugLog::new();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(log.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(index = 3, "resolved content");
        });

        let contents = log.contents();
        assert!(contents.contains("resolved content"));
        assert!(contents.contains("index=3"));
    }

    #[test]
    fn buffer_is_bounded() {
        let log = DebugLog::new();
        let line = "x".repeat(1024);
        for _ in 0..100 {
            log.push(&line);
        }
        assert!(log.contents().len() <= MAX_LOG_BYTES);

        log.clear();
        assert!(log.contents().is_empty());
    }
}
