//! Line writer trait for text-logging backends
//!
//! Every line the template pipeline produces (banners included) goes through
//! a `LineWriter`. The dispatcher owns a process-wide default; a policy may
//! carry a per-call override.

use super::{error::Result, verbosity::Verbosity};
use parking_lot::Mutex;

pub trait LineWriter: Send + Sync {
    fn write_line(&self, level: Verbosity, text: &str) -> Result<()>;
}

/// Writer that captures lines in memory.
///
/// Used by tests and by callers that post-process rendered blocks before
/// shipping them elsewhere.
#[derive(Debug, Default)]
pub struct BufferWriter {
    lines: Mutex<Vec<String>>,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LineWriter for BufferWriter {
    fn write_line(&self, _level: Verbosity, text: &str) -> Result<()> {
        self.lines.lock().push(text.to_string());
        Ok(())
    }
}
