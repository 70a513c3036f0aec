//! Where arithmetic diagnostics go.

use std::io::Write;
use std::sync::Mutex;

/// Receiver for one-line diagnostic notices.
pub trait DiagnosticSink {
    fn notice(&self, message: &str);
}

/// Writes each notice as a line on the process stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn notice(&self, message: &str) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        if let Err(err) = writeln!(handle, "{message}").and_then(|()| handle.flush()) {
            tracing::warn!(error = %err, "could not write diagnostic to stderr");
        }
    }
}

/// Keeps notices in memory. Used where the caller wants to inspect them.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Notices received so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn notice(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}
